// Pair Factory
// This module implements the factory for minimal-proxy pair clones.
//
// Components:
// - fingerprint: clone bytecode derivation and membership testing
// - deployer: deterministic clone deployment
// - whitelist: router / call-target mutual-exclusion state machine
// - operations: externally callable entry points (create, deposit, admin, query)
// - error / types / events: taxonomy, protocol constants, indexing events

mod error;
mod events;
mod types;
mod whitelist;

pub mod deployer;
pub mod fingerprint;
pub mod operations;

pub use error::*;
pub use events::*;
pub use operations::*;
pub use types::*;
pub use whitelist::*;

use crate::crypto::Address;

// ========================================
// Factory State
// ========================================

/// Persistent factory state.
///
/// Templates are fixed at construction and never change; everything else is
/// mutated only through the operation functions in [`operations`].
#[derive(Debug)]
pub struct PairFactory {
    /// The factory's own address (embedded in every clone it deploys)
    address: Address,
    /// Single owner for the administrative surface
    owner: Address,
    /// Template for native-asset pairs
    template_native: Address,
    /// Template for fungible-asset pairs
    template_fungible: Address,
    /// Protocol fee recipient
    fee_recipient: Address,
    /// Protocol fee multiplier, 1e18 scale, `<= MAX_PROTOCOL_FEE`
    fee_multiplier: u128,
    /// Router / call-target whitelist
    whitelist: Whitelist,
    /// Number of pairs created, also the salt counter
    pair_count: u64,
    /// Journal of emitted indexing events
    events: Vec<FactoryEvent>,
}

impl PairFactory {
    /// Construct a factory. The fee ceiling and zero-address rules are
    /// enforced here as on every later mutation.
    pub fn new(
        address: Address,
        owner: Address,
        template_native: Address,
        template_fungible: Address,
        fee_recipient: Address,
        fee_multiplier: u128,
    ) -> FactoryResult<Self> {
        if address.is_zero()
            || owner.is_zero()
            || template_native.is_zero()
            || template_fungible.is_zero()
        {
            return Err(FactoryError::ZeroAddress);
        }

        let mut factory = Self {
            address,
            owner,
            template_native,
            template_fungible,
            fee_recipient: Address::zero(),
            fee_multiplier: 0,
            whitelist: Whitelist::new(),
            pair_count: 0,
            events: Vec::new(),
        };
        factory.set_fee_recipient(fee_recipient)?;
        factory.set_fee_multiplier(fee_multiplier)?;
        Ok(factory)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn fee_recipient(&self) -> Address {
        self.fee_recipient
    }

    pub fn fee_multiplier(&self) -> u128 {
        self.fee_multiplier
    }

    /// Template address for a variant
    pub fn template(&self, variant: PairVariant) -> Address {
        match variant {
            PairVariant::Native => self.template_native,
            PairVariant::Fungible => self.template_fungible,
        }
    }

    /// Number of pairs created so far
    pub fn pair_count(&self) -> u64 {
        self.pair_count
    }

    /// Read access to the whitelist
    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Events journaled so far
    pub fn events(&self) -> &[FactoryEvent] {
        &self.events
    }

    /// Take all journaled events, leaving the journal empty
    pub fn drain_events(&mut self) -> Vec<FactoryEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn set_fee_recipient(&mut self, recipient: Address) -> FactoryResult<()> {
        if recipient.is_zero() {
            return Err(FactoryError::ZeroAddress);
        }
        self.fee_recipient = recipient;
        Ok(())
    }

    pub(crate) fn set_fee_multiplier(&mut self, multiplier: u128) -> FactoryResult<()> {
        if multiplier > MAX_PROTOCOL_FEE {
            return Err(FactoryError::FeeTooLarge);
        }
        self.fee_multiplier = multiplier;
        Ok(())
    }

    pub(crate) fn whitelist_mut(&mut self) -> &mut Whitelist {
        &mut self.whitelist
    }

    pub(crate) fn increment_pair_count(&mut self) {
        self.pair_count += 1;
    }

    pub(crate) fn emit(&mut self, event: FactoryEvent) {
        self.events.push(event);
    }
}
