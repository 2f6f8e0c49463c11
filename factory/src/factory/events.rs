// Pair Factory - Events
// Indexing events emitted by factory operations. Nothing in the factory
// consumes these; they are journaled for off-chain indexers and drained by
// the embedder.

use serde::{Deserialize, Serialize};

use super::types::PairVariant;
use crate::crypto::Address;

/// Event emitted by a factory operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactoryEvent {
    /// A new pair was deployed and seeded
    PairCreated {
        variant: PairVariant,
        pair: Address,
        nft: Address,
        owner: Address,
    },
    /// An NFT was deposited into a verified pair
    NftDeposited {
        collection: Address,
        token_id: u64,
        recipient: Address,
    },
    /// A fungible asset was deposited into a verified pair configured for it
    TokenDeposited {
        asset: Address,
        recipient: Address,
        amount: u128,
    },
    /// Protocol fee recipient changed
    FeeRecipientChanged { recipient: Address },
    /// Protocol fee multiplier changed
    FeeMultiplierChanged { multiplier: u128 },
    /// Call-target allowance toggled
    CallTargetStatusChanged { target: Address, allowed: bool },
    /// Router allowance toggled
    RouterStatusChanged { router: Address, allowed: bool },
}
