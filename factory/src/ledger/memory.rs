// In-Memory Ledger
// Reference implementation of the Ledger trait backed by IndexMaps, used both
// as the shipped standalone backend and as the test double for operation
// tests. Map iteration order is insertion order, keeping any derived output
// deterministic.

use indexmap::IndexMap;

use super::{Ledger, LedgerError, LedgerResult};
use crate::crypto::Address;
use crate::factory::PairInit;

/// IndexMap-backed ledger
#[derive(Default)]
pub struct MemoryLedger {
    /// Deployed bytecode per address
    code: IndexMap<Address, Vec<u8>>,
    /// (collection, token_id) -> current owner
    nft_owners: IndexMap<(Address, u64), Address>,
    /// (asset, holder) -> balance
    asset_balances: IndexMap<(Address, Address), u128>,
    /// holder -> native balance
    native_balances: IndexMap<Address, u128>,
    /// Initialized pair state per pair address
    pairs: IndexMap<Address, PairInit>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================
    // Setup helpers (mint/credit)
    // ========================================

    /// Mint an NFT to an owner. Fails if the token already exists.
    pub fn mint_nft(
        &mut self,
        collection: &Address,
        token_id: u64,
        owner: &Address,
    ) -> LedgerResult<()> {
        let key = (*collection, token_id);
        if self.nft_owners.contains_key(&key) {
            return Err(LedgerError::NftAlreadyMinted);
        }
        self.nft_owners.insert(key, *owner);
        Ok(())
    }

    /// Credit a holder with a fungible asset balance
    pub fn credit_asset(
        &mut self,
        asset: &Address,
        holder: &Address,
        amount: u128,
    ) -> LedgerResult<()> {
        let balance = self.asset_balances.entry((*asset, *holder)).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Credit a holder with native funds
    pub fn credit_native(&mut self, holder: &Address, amount: u128) -> LedgerResult<()> {
        let balance = self.native_balances.entry(*holder).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Stored pair state, if the address is an initialized pair
    pub fn pair_state(&self, pair: &Address) -> Option<&PairInit> {
        self.pairs.get(pair)
    }
}

impl Ledger for MemoryLedger {
    fn code_at(&self, address: &Address) -> Option<Vec<u8>> {
        self.code.get(address).cloned()
    }

    fn deploy_code(&mut self, address: &Address, code: Vec<u8>) -> LedgerResult<()> {
        if code.is_empty() {
            return Err(LedgerError::EmptyCode);
        }
        if self.code.contains_key(address) {
            return Err(LedgerError::AddressOccupied);
        }
        self.code.insert(*address, code);
        Ok(())
    }

    fn nft_owner(&self, collection: &Address, token_id: u64) -> Option<Address> {
        self.nft_owners.get(&(*collection, token_id)).copied()
    }

    fn transfer_nft(
        &mut self,
        collection: &Address,
        token_id: u64,
        from: &Address,
        to: &Address,
    ) -> LedgerResult<()> {
        let owner = self
            .nft_owners
            .get_mut(&(*collection, token_id))
            .ok_or(LedgerError::NftNotFound)?;
        if owner != from {
            return Err(LedgerError::NotNftOwner);
        }
        *owner = *to;
        Ok(())
    }

    fn asset_balance(&self, asset: &Address, holder: &Address) -> u128 {
        *self.asset_balances.get(&(*asset, *holder)).unwrap_or(&0)
    }

    fn transfer_asset(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: u128,
    ) -> LedgerResult<()> {
        let from_balance = self.asset_balance(asset, from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientAssetBalance);
        }
        let to_balance = self.asset_balance(asset, to);
        let to_balance = to_balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.asset_balances
            .insert((*asset, *from), from_balance - amount);
        self.asset_balances.insert((*asset, *to), to_balance);
        Ok(())
    }

    fn native_balance(&self, holder: &Address) -> u128 {
        *self.native_balances.get(holder).unwrap_or(&0)
    }

    fn transfer_native(&mut self, from: &Address, to: &Address, amount: u128) -> LedgerResult<()> {
        let from_balance = self.native_balance(from);
        if from_balance < amount {
            return Err(LedgerError::InsufficientNativeBalance);
        }
        let to_balance = self
            .native_balance(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.native_balances.insert(*from, from_balance - amount);
        self.native_balances.insert(*to, to_balance);
        Ok(())
    }

    fn initialize_pair(&mut self, pair: &Address, init: PairInit) -> LedgerResult<()> {
        if self.pairs.contains_key(pair) {
            return Err(LedgerError::PairAlreadyInitialized);
        }
        self.pairs.insert(*pair, init);
        Ok(())
    }

    fn pair_asset(&self, pair: &Address) -> Option<Option<Address>> {
        self.pairs.get(pair).map(|init| init.asset)
    }
}
