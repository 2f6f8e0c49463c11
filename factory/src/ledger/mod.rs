// Ledger Abstraction
// This module defines the ledger surface the factory operates against.
//
// The factory's collaborators (bytecode storage, NFT ownership transfer,
// fungible and native asset movement, the pair's initialization entry point)
// are abstracted behind a single trait so the operations stay
// runtime-agnostic:
// - Storage and transfer primitives are provided by the embedding runtime
// - Each trait call is atomic: it either fully applies or leaves the ledger
//   untouched
// - Operations are written validate-then-commit on top of that guarantee

mod error;
mod memory;

pub use error::*;
pub use memory::*;

use crate::crypto::Address;
use crate::factory::PairInit;

/// Abstract ledger interface for factory operations
///
/// Runtime implementations provide concrete backends; [`MemoryLedger`] is the
/// reference in-memory implementation.
pub trait Ledger {
    // Code store operations

    /// Deployed bytecode at an address, `None` if the address holds no code
    fn code_at(&self, address: &Address) -> Option<Vec<u8>>;

    /// Install bytecode at an address. Fails with `AddressOccupied` if any
    /// code already lives there.
    fn deploy_code(&mut self, address: &Address, code: Vec<u8>) -> LedgerResult<()>;

    // NFT operations

    /// Current owner of a token, `None` if the token was never minted
    fn nft_owner(&self, collection: &Address, token_id: u64) -> Option<Address>;

    /// Move one NFT from `from` to `to`. Fails unless `from` is the current
    /// owner.
    fn transfer_nft(
        &mut self,
        collection: &Address,
        token_id: u64,
        from: &Address,
        to: &Address,
    ) -> LedgerResult<()>;

    // Fungible asset operations

    /// Balance of `holder` in `asset`
    fn asset_balance(&self, asset: &Address, holder: &Address) -> u128;

    /// Move `amount` of `asset` from `from` to `to`
    fn transfer_asset(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> LedgerResult<()>;

    // Native asset operations

    /// Native balance of `holder`
    fn native_balance(&self, holder: &Address) -> u128;

    /// Move `amount` of the native asset from `from` to `to`
    fn transfer_native(&mut self, from: &Address, to: &Address, amount: u128) -> LedgerResult<()>;

    // Pair collaborator surface

    /// Run the pair's one-shot initialization entry point
    fn initialize_pair(&mut self, pair: &Address, init: PairInit) -> LedgerResult<()>;

    /// Trading asset an initialized pair is configured for.
    ///
    /// Outer `None`: the address is not an initialized pair. Inner `None`:
    /// the pair trades the native asset.
    fn pair_asset(&self, pair: &Address) -> Option<Option<Address>>;
}
