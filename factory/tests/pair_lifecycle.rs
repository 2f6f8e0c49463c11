// End-to-end factory lifecycle over the in-memory ledger: creation of both
// pair variants, registry-free membership, deposit notifications, fee
// administration and withdrawal.

use pairmint_factory::crypto::Address;
use pairmint_factory::factory::{
    change_fee_multiplier, change_fee_recipient, create_pair, deposit_asset, deposit_nft, is_pair,
    next_pair_address_for, receive_native, set_call_allowed, set_router_allowed,
    withdraw_native_fees, FactoryError, FactoryEvent, PairFactory, PairVariant, RuntimeContext,
};
use pairmint_factory::ledger::{Ledger, MemoryLedger};

fn addr(n: u8) -> Address {
    Address::new([n; 20])
}

struct World {
    factory: PairFactory,
    ledger: MemoryLedger,
    owner: RuntimeContext,
    user: RuntimeContext,
}

fn setup() -> World {
    let factory = PairFactory::new(
        addr(0xf0), // factory address
        addr(0xa0), // owner
        addr(0xa1), // native template
        addr(0xa2), // fungible template
        addr(0xa3), // fee recipient
        0,
    )
    .unwrap();

    World {
        factory,
        ledger: MemoryLedger::new(),
        owner: RuntimeContext::new(addr(0xa0)),
        user: RuntimeContext::new(addr(0x01)),
    }
}

#[test]
fn full_lifecycle() {
    let mut w = setup();
    let nft = addr(0x90);
    let token = addr(0x91);

    // Owner configures a 5% fee
    change_fee_multiplier(&mut w.factory, &w.owner, 50_000_000_000_000_000).unwrap();

    // User creates one pair of each variant
    w.ledger.mint_nft(&nft, 7, &w.user.caller).unwrap();
    w.ledger.mint_nft(&nft, 8, &w.user.caller).unwrap();

    let predicted = next_pair_address_for(
        &w.factory,
        &w.user,
        PairVariant::Native,
        nft,
        None,
        30 * 24 * 3600,
    )
    .unwrap();

    let native_pair = create_pair(
        &mut w.factory,
        &mut w.ledger,
        &w.user,
        PairVariant::Native,
        nft,
        None,
        addr(0x02),
        30 * 24 * 3600,
        7,
    )
    .unwrap();
    let fungible_pair = create_pair(
        &mut w.factory,
        &mut w.ledger,
        &w.user,
        PairVariant::Fungible,
        nft,
        Some(token),
        addr(0x02),
        30 * 24 * 3600,
        8,
    )
    .unwrap();

    assert_eq!(native_pair, predicted);
    assert_ne!(native_pair, fungible_pair);
    assert_eq!(w.factory.pair_count(), 2);

    // Seed NFTs moved into the pairs
    assert_eq!(w.ledger.nft_owner(&nft, 7), Some(native_pair));
    assert_eq!(w.ledger.nft_owner(&nft, 8), Some(fungible_pair));

    // Membership is variant-aware and total
    assert!(is_pair(&w.factory, &w.ledger, &native_pair, PairVariant::Native));
    assert!(!is_pair(&w.factory, &w.ledger, &native_pair, PairVariant::Fungible));
    assert!(is_pair(&w.factory, &w.ledger, &fungible_pair, PairVariant::Fungible));
    assert!(!is_pair(&w.factory, &w.ledger, &fungible_pair, PairVariant::Native));
    for variant in PairVariant::ALL {
        assert!(!is_pair(&w.factory, &w.ledger, &addr(0x77), variant));
    }

    // Deposits: matching asset emits, foreign asset stays silent
    w.ledger.credit_asset(&token, &w.user.caller, 1_000).unwrap();
    let foreign = addr(0x92);
    w.ledger.credit_asset(&foreign, &w.user.caller, 1_000).unwrap();

    w.factory.drain_events();
    deposit_asset(&mut w.factory, &mut w.ledger, &w.user, token, fungible_pair, 100).unwrap();
    deposit_asset(&mut w.factory, &mut w.ledger, &w.user, foreign, fungible_pair, 100).unwrap();

    assert_eq!(
        w.factory.drain_events(),
        vec![FactoryEvent::TokenDeposited {
            asset: token,
            recipient: fungible_pair,
            amount: 100,
        }]
    );
    assert_eq!(w.ledger.asset_balance(&foreign, &fungible_pair), 100);

    // NFT deposit into a pair emits
    w.ledger.mint_nft(&nft, 9, &w.user.caller).unwrap();
    deposit_nft(&mut w.factory, &mut w.ledger, &w.user, nft, 9, native_pair).unwrap();
    assert_eq!(
        w.factory.drain_events(),
        vec![FactoryEvent::NftDeposited {
            collection: nft,
            token_id: 9,
            recipient: native_pair,
        }]
    );

    // Fees accumulate on the factory and are withdrawn to the recipient
    w.ledger.credit_native(&w.user.caller, 10_000).unwrap();
    receive_native(&w.factory, &mut w.ledger, &w.user, 10_000).unwrap();
    let moved = withdraw_native_fees(&w.factory, &mut w.ledger, &w.owner).unwrap();
    assert_eq!(moved, 10_000);
    assert_eq!(w.ledger.native_balance(&w.factory.fee_recipient()), 10_000);
}

#[test]
fn whitelist_exclusion_survives_admin_sequences() {
    let mut w = setup();
    let x = addr(0x40);
    let y = addr(0x41);

    // x: call target, revoked, then promoted to router
    set_call_allowed(&mut w.factory, &w.owner, x, true).unwrap();
    set_call_allowed(&mut w.factory, &w.owner, x, false).unwrap();
    set_router_allowed(&mut w.factory, &w.owner, x, true).unwrap();

    // x can never again become a call target, even after router revocation
    set_router_allowed(&mut w.factory, &w.owner, x, false).unwrap();
    assert_eq!(
        set_call_allowed(&mut w.factory, &w.owner, x, true).unwrap_err(),
        FactoryError::RouterConflict
    );

    // y: live call target blocks router promotion
    set_call_allowed(&mut w.factory, &w.owner, y, true).unwrap();
    assert_eq!(
        set_router_allowed(&mut w.factory, &w.owner, y, true).unwrap_err(),
        FactoryError::CallTargetConflict
    );

    for z in [x, y] {
        assert!(
            !(w.factory.whitelist().is_call_allowed(&z)
                && w.factory.whitelist().router_status(&z).was_ever_allowed)
        );
    }
}

#[test]
fn fee_configuration_is_owner_gated_and_bounded() {
    let mut w = setup();

    assert_eq!(
        change_fee_multiplier(&mut w.factory, &w.user, 1).unwrap_err(),
        FactoryError::PermissionDenied
    );

    change_fee_multiplier(&mut w.factory, &w.owner, 50_000_000_000_000_000).unwrap();
    assert_eq!(
        change_fee_multiplier(&mut w.factory, &w.owner, 150_000_000_000_000_000).unwrap_err(),
        FactoryError::FeeTooLarge
    );
    assert_eq!(w.factory.fee_multiplier(), 50_000_000_000_000_000);

    assert_eq!(
        change_fee_recipient(&mut w.factory, &w.owner, Address::zero()).unwrap_err(),
        FactoryError::ZeroAddress
    );
}
