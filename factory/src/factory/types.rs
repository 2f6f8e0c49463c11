// Pair Factory - Core Types
// This module defines the protocol constants and data structures shared by
// the factory components.

use serde::{Deserialize, Serialize};

use super::error::{FactoryError, FactoryResult};
use crate::crypto::Address;

// ========================================
// Protocol Constants
// ========================================

/// Fixed-point scale for fee multipliers (1e18 = 100%)
pub const FEE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Maximum protocol fee multiplier (10%)
pub const MAX_PROTOCOL_FEE: u128 = FEE_SCALE / 10;

// ========================================
// Pair Variant
// ========================================

/// The supported pair shapes. Each variant is bound to its own template
/// contract and embedded-parameter layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairVariant {
    /// Pair trading the NFT against the native asset
    Native,
    /// Pair trading the NFT against a fungible token
    Fungible,
}

impl PairVariant {
    /// All supported variants, in tag order
    pub const ALL: [PairVariant; 2] = [PairVariant::Native, PairVariant::Fungible];

    /// Wire tag embedded in clone bytecode
    pub fn tag(&self) -> u8 {
        match self {
            PairVariant::Native => 0,
            PairVariant::Fungible => 1,
        }
    }

    /// Parse a wire tag. Unknown tags yield `None` rather than an error so
    /// membership queries stay total.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(PairVariant::Native),
            1 => Some(PairVariant::Fungible),
            _ => None,
        }
    }
}

// ========================================
// Immutable Parameter Block
// ========================================

/// Constructor-like immutable parameters embedded in a clone's bytecode tail.
///
/// `asset` must be `None` for [`PairVariant::Native`] and `Some` for
/// [`PairVariant::Fungible`]; [`PairImmutables::validate`] enforces the
/// combination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairImmutables {
    /// NFT collection the pair trades
    pub nft: Address,
    /// Staking/lock duration parameter, in seconds
    pub duration_secs: u64,
    /// Trading token for fungible-asset pairs
    pub asset: Option<Address>,
}

impl PairImmutables {
    /// Validate the asset slot against the target variant
    pub fn validate(&self, variant: PairVariant) -> FactoryResult<()> {
        match (variant, &self.asset) {
            (PairVariant::Native, Some(_)) => Err(FactoryError::AssetNotAccepted),
            (PairVariant::Fungible, None) => Err(FactoryError::AssetRequired),
            (PairVariant::Fungible, Some(asset)) if asset.is_zero() => {
                Err(FactoryError::ZeroAddress)
            }
            _ => Ok(()),
        }
    }
}

// ========================================
// Pair Initialization Block
// ========================================

/// Arguments handed to a freshly deployed pair's one-shot initialization
/// entry point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairInit {
    /// Pair owner (the creation caller)
    pub owner: Address,
    /// Where swap proceeds are sent
    pub asset_recipient: Address,
    /// Staking/lock duration parameter, in seconds
    pub duration_secs: u64,
    /// Variant the pair was created as
    pub variant: PairVariant,
    /// NFT collection the pair trades
    pub nft: Address,
    /// Configured trading token, `None` for native-asset pairs
    pub asset: Option<Address>,
}
