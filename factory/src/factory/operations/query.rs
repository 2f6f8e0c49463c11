// Pair Membership Queries
// Registry-free membership tests backed by the fingerprint codec, plus the
// advance derivation of the next creation address.

use super::RuntimeContext;
use crate::crypto::Address;
use crate::factory::{
    deployer, fingerprint, FactoryError, FactoryResult, PairFactory, PairImmutables, PairVariant,
};
use crate::ledger::Ledger;

/// Whether `candidate` is a genuine pair of `variant` created by this factory.
///
/// Purely a bytecode check; no registry is consulted. Total over the address
/// space: addresses without code yield `false`.
pub fn is_pair<L: Ledger>(
    factory: &PairFactory,
    ledger: &L,
    candidate: &Address,
    variant: PairVariant,
) -> bool {
    let code = ledger.code_at(candidate);
    fingerprint::matches(
        code.as_deref(),
        &factory.address(),
        &factory.template(variant),
        variant,
    )
}

/// Raw-tag form of [`is_pair`]. Unrecognized tags yield `false` rather than
/// an error.
pub fn is_pair_tag<L: Ledger>(
    factory: &PairFactory,
    ledger: &L,
    candidate: &Address,
    tag: u8,
) -> bool {
    match PairVariant::from_tag(tag) {
        Some(variant) => is_pair(factory, ledger, candidate, variant),
        None => false,
    }
}

/// The variant `candidate` was created as, if it is a genuine pair of any
/// supported variant
pub fn pair_variant_of<L: Ledger>(
    factory: &PairFactory,
    ledger: &L,
    candidate: &Address,
) -> Option<PairVariant> {
    PairVariant::ALL
        .into_iter()
        .find(|variant| is_pair(factory, ledger, candidate, *variant))
}

/// Derive the address the next `create_pair` call with these arguments would
/// deploy at, without deploying anything.
///
/// Valid until the factory's pair counter moves.
pub fn next_pair_address(
    factory: &PairFactory,
    caller: &Address,
    variant: PairVariant,
    nft: Address,
    asset: Option<Address>,
    duration_secs: u64,
) -> FactoryResult<Address> {
    if nft.is_zero() {
        return Err(FactoryError::ZeroAddress);
    }
    let immutables = PairImmutables {
        nft,
        duration_secs,
        asset,
    };
    immutables.validate(variant)?;

    let salt = deployer::derive_salt(caller, variant, &immutables, factory.pair_count());
    let code = fingerprint::encode(
        &factory.template(variant),
        &factory.address(),
        variant,
        &immutables,
    );
    Ok(deployer::clone_address(&factory.address(), &salt, &code))
}

/// Convenience wrapper deriving the next address for the context's caller
pub fn next_pair_address_for(
    factory: &PairFactory,
    ctx: &RuntimeContext,
    variant: PairVariant,
    nft: Address,
    asset: Option<Address>,
    duration_secs: u64,
) -> FactoryResult<Address> {
    next_pair_address(factory, &ctx.caller, variant, nft, asset, duration_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    fn factory() -> PairFactory {
        PairFactory::new(addr(0xf0), addr(0xa0), addr(0xa1), addr(0xa2), addr(0xa3), 0).unwrap()
    }

    #[test]
    fn test_is_pair_false_for_codeless_address() {
        let factory = factory();
        let ledger = MemoryLedger::new();
        for variant in PairVariant::ALL {
            assert!(!is_pair(&factory, &ledger, &addr(5), variant));
        }
    }

    #[test]
    fn test_is_pair_false_for_foreign_code() {
        let factory = factory();
        let mut ledger = MemoryLedger::new();
        let stranger = addr(5);
        ledger.deploy_code(&stranger, vec![0x60, 0x80, 0x60, 0x40]).unwrap();

        for variant in PairVariant::ALL {
            assert!(!is_pair(&factory, &ledger, &stranger, variant));
        }
        assert_eq!(pair_variant_of(&factory, &ledger, &stranger), None);
    }

    #[test]
    fn test_is_pair_tag_unknown_tag() {
        let factory = factory();
        let ledger = MemoryLedger::new();
        assert!(!is_pair_tag(&factory, &ledger, &addr(5), 7));
        assert!(!is_pair_tag(&factory, &ledger, &addr(5), 255));
    }

    #[test]
    fn test_next_pair_address_validates_parameters() {
        let factory = factory();
        let err = next_pair_address(
            &factory,
            &addr(1),
            PairVariant::Native,
            Address::zero(),
            None,
            60,
        )
        .unwrap_err();
        assert_eq!(err, FactoryError::ZeroAddress);

        let err = next_pair_address(
            &factory,
            &addr(1),
            PairVariant::Fungible,
            addr(9),
            None,
            60,
        )
        .unwrap_err();
        assert_eq!(err, FactoryError::AssetRequired);
    }
}
