// Deposit Notification Operations
// Moves assets from the caller to a recipient and emits an indexing event
// when (and only when) the recipient is a verified pair. The events are an
// off-chain indexing convenience; no pair state is touched here, so deposits
// to non-pair recipients succeed silently.

use super::query::pair_variant_of;
use super::RuntimeContext;
use crate::crypto::Address;
use crate::factory::{FactoryError, FactoryEvent, FactoryResult, PairFactory};
use crate::ledger::Ledger;

/// Move one NFT from the caller to `recipient`.
///
/// Emits `NftDeposited` iff the recipient is a genuine pair of any supported
/// variant.
pub fn deposit_nft<L: Ledger>(
    factory: &mut PairFactory,
    ledger: &mut L,
    ctx: &RuntimeContext,
    collection: Address,
    token_id: u64,
    recipient: Address,
) -> FactoryResult<()> {
    ledger
        .transfer_nft(&collection, token_id, &ctx.caller, &recipient)
        .map_err(|_| FactoryError::NftTransferFailed)?;

    if pair_variant_of(factory, ledger, &recipient).is_some() {
        factory.emit(FactoryEvent::NftDeposited {
            collection,
            token_id,
            recipient,
        });
    }
    Ok(())
}

/// Move `amount` of `asset` from the caller to `recipient`.
///
/// Emits `TokenDeposited` iff the recipient is a genuine pair AND the pair's
/// configured trading asset is `asset`. A deposit of a foreign asset into a
/// pair succeeds without an event; it is not pair-relevant activity.
pub fn deposit_asset<L: Ledger>(
    factory: &mut PairFactory,
    ledger: &mut L,
    ctx: &RuntimeContext,
    asset: Address,
    recipient: Address,
    amount: u128,
) -> FactoryResult<()> {
    ledger
        .transfer_asset(&asset, &ctx.caller, &recipient, amount)
        .map_err(|_| FactoryError::AssetTransferFailed)?;

    let genuine = pair_variant_of(factory, ledger, &recipient).is_some();
    if genuine && ledger.pair_asset(&recipient) == Some(Some(asset)) {
        factory.emit(FactoryEvent::TokenDeposited {
            asset,
            recipient,
            amount,
        });
    }
    Ok(())
}

/// Accept native funds into the factory (fee accumulation sink). No event.
pub fn receive_native<L: Ledger>(
    factory: &PairFactory,
    ledger: &mut L,
    ctx: &RuntimeContext,
    amount: u128,
) -> FactoryResult<()> {
    ledger
        .transfer_native(&ctx.caller, &factory.address(), amount)
        .map_err(|_| FactoryError::NativeTransferFailed)
}

#[cfg(test)]
mod tests {
    use super::super::create::create_pair;
    use super::*;
    use crate::factory::PairVariant;
    use crate::ledger::MemoryLedger;

    fn addr(n: u8) -> Address {
        Address::new([n; 20])
    }

    fn setup() -> (PairFactory, MemoryLedger, RuntimeContext) {
        let factory =
            PairFactory::new(addr(0xf0), addr(0xa0), addr(0xa1), addr(0xa2), addr(0xa3), 0)
                .unwrap();
        (factory, MemoryLedger::new(), RuntimeContext::new(addr(1)))
    }

    fn make_pair(
        factory: &mut PairFactory,
        ledger: &mut MemoryLedger,
        ctx: &RuntimeContext,
        variant: PairVariant,
        asset: Option<Address>,
    ) -> Address {
        let nft = addr(9);
        let token_id = factory.pair_count() + 100;
        ledger.mint_nft(&nft, token_id, &ctx.caller).unwrap();
        let pair = create_pair(
            factory, ledger, ctx, variant, nft, asset, addr(2), 60, token_id,
        )
        .unwrap();
        factory.drain_events();
        pair
    }

    #[test]
    fn test_deposit_nft_into_pair_emits_event() {
        let (mut factory, mut ledger, ctx) = setup();
        let pair = make_pair(&mut factory, &mut ledger, &ctx, PairVariant::Native, None);

        let collection = addr(9);
        ledger.mint_nft(&collection, 500, &ctx.caller).unwrap();
        deposit_nft(&mut factory, &mut ledger, &ctx, collection, 500, pair).unwrap();

        assert_eq!(ledger.nft_owner(&collection, 500), Some(pair));
        assert_eq!(
            factory.events(),
            &[FactoryEvent::NftDeposited {
                collection,
                token_id: 500,
                recipient: pair,
            }]
        );
    }

    #[test]
    fn test_deposit_nft_to_non_pair_is_silent() {
        let (mut factory, mut ledger, ctx) = setup();
        let collection = addr(9);
        let recipient = addr(7);
        ledger.mint_nft(&collection, 1, &ctx.caller).unwrap();

        deposit_nft(&mut factory, &mut ledger, &ctx, collection, 1, recipient).unwrap();

        assert_eq!(ledger.nft_owner(&collection, 1), Some(recipient));
        assert!(factory.events().is_empty());
    }

    #[test]
    fn test_deposit_nft_transfer_failure() {
        let (mut factory, mut ledger, ctx) = setup();
        // Caller does not own the token
        ledger.mint_nft(&addr(9), 1, &addr(8)).unwrap();

        let err =
            deposit_nft(&mut factory, &mut ledger, &ctx, addr(9), 1, addr(7)).unwrap_err();
        assert_eq!(err, FactoryError::NftTransferFailed);
        assert!(factory.events().is_empty());
    }

    #[test]
    fn test_deposit_matching_asset_emits_event() {
        let (mut factory, mut ledger, ctx) = setup();
        let asset = addr(5);
        let pair = make_pair(
            &mut factory,
            &mut ledger,
            &ctx,
            PairVariant::Fungible,
            Some(asset),
        );

        ledger.credit_asset(&asset, &ctx.caller, 1_000).unwrap();
        deposit_asset(&mut factory, &mut ledger, &ctx, asset, pair, 100).unwrap();

        assert_eq!(ledger.asset_balance(&asset, &pair), 100);
        assert_eq!(
            factory.events(),
            &[FactoryEvent::TokenDeposited {
                asset,
                recipient: pair,
                amount: 100,
            }]
        );
    }

    #[test]
    fn test_deposit_foreign_asset_into_pair_is_silent() {
        let (mut factory, mut ledger, ctx) = setup();
        let asset = addr(5);
        let foreign = addr(6);
        let pair = make_pair(
            &mut factory,
            &mut ledger,
            &ctx,
            PairVariant::Fungible,
            Some(asset),
        );

        ledger.credit_asset(&foreign, &ctx.caller, 1_000).unwrap();
        deposit_asset(&mut factory, &mut ledger, &ctx, foreign, pair, 100).unwrap();

        // Transfer happened, no event
        assert_eq!(ledger.asset_balance(&foreign, &pair), 100);
        assert!(factory.events().is_empty());
    }

    #[test]
    fn test_deposit_fungible_asset_into_native_pair_is_silent() {
        let (mut factory, mut ledger, ctx) = setup();
        let pair = make_pair(&mut factory, &mut ledger, &ctx, PairVariant::Native, None);
        let asset = addr(5);

        ledger.credit_asset(&asset, &ctx.caller, 50).unwrap();
        deposit_asset(&mut factory, &mut ledger, &ctx, asset, pair, 50).unwrap();

        assert_eq!(ledger.asset_balance(&asset, &pair), 50);
        assert!(factory.events().is_empty());
    }

    #[test]
    fn test_deposit_asset_insufficient_balance() {
        let (mut factory, mut ledger, ctx) = setup();
        let err = deposit_asset(
            &mut factory,
            &mut ledger,
            &ctx,
            addr(5),
            addr(7),
            1,
        )
        .unwrap_err();
        assert_eq!(err, FactoryError::AssetTransferFailed);
    }

    #[test]
    fn test_receive_native_accumulates_on_factory() {
        let (factory, mut ledger, ctx) = setup();
        ledger.credit_native(&ctx.caller, 500).unwrap();

        receive_native(&factory, &mut ledger, &ctx, 200).unwrap();
        assert_eq!(ledger.native_balance(&factory.address()), 200);

        let err = receive_native(&factory, &mut ledger, &ctx, 400).unwrap_err();
        assert_eq!(err, FactoryError::NativeTransferFailed);
    }
}
