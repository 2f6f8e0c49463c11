// Administrative Operations
// Owner-gated mutations of fee state and the router/call-target whitelist,
// plus protocol fee withdrawal.

use log::debug;

use super::RuntimeContext;
use crate::crypto::Address;
use crate::factory::{FactoryError, FactoryEvent, FactoryResult, PairFactory};
use crate::ledger::Ledger;

fn ensure_owner(factory: &PairFactory, ctx: &RuntimeContext) -> FactoryResult<()> {
    if ctx.caller != factory.owner() {
        return Err(FactoryError::PermissionDenied);
    }
    Ok(())
}

/// Change the protocol fee recipient. Fails with `ZeroAddress` for the zero
/// address.
pub fn change_fee_recipient(
    factory: &mut PairFactory,
    ctx: &RuntimeContext,
    recipient: Address,
) -> FactoryResult<()> {
    ensure_owner(factory, ctx)?;
    factory.set_fee_recipient(recipient)?;
    factory.emit(FactoryEvent::FeeRecipientChanged { recipient });
    debug!("fee recipient changed to {}", recipient);
    Ok(())
}

/// Change the protocol fee multiplier (1e18 scale). Fails with `FeeTooLarge`
/// above the ceiling; the stored value is untouched on failure.
pub fn change_fee_multiplier(
    factory: &mut PairFactory,
    ctx: &RuntimeContext,
    multiplier: u128,
) -> FactoryResult<()> {
    ensure_owner(factory, ctx)?;
    factory.set_fee_multiplier(multiplier)?;
    factory.emit(FactoryEvent::FeeMultiplierChanged { multiplier });
    debug!("fee multiplier changed to {}", multiplier);
    Ok(())
}

/// Toggle whether pairs may call `target` arbitrarily
pub fn set_call_allowed(
    factory: &mut PairFactory,
    ctx: &RuntimeContext,
    target: Address,
    allowed: bool,
) -> FactoryResult<()> {
    ensure_owner(factory, ctx)?;
    factory.whitelist_mut().set_call_allowed(&target, allowed)?;
    factory.emit(FactoryEvent::CallTargetStatusChanged { target, allowed });
    debug!("call target {} set to {}", target, allowed);
    Ok(())
}

/// Toggle router status for `router`
pub fn set_router_allowed(
    factory: &mut PairFactory,
    ctx: &RuntimeContext,
    router: Address,
    allowed: bool,
) -> FactoryResult<()> {
    ensure_owner(factory, ctx)?;
    factory
        .whitelist_mut()
        .set_router_allowed(&router, allowed)?;
    factory.emit(FactoryEvent::RouterStatusChanged { router, allowed });
    debug!("router {} set to {}", router, allowed);
    Ok(())
}

/// Withdraw the factory's whole native balance to the fee recipient.
///
/// # Returns
/// The amount moved (possibly zero).
pub fn withdraw_native_fees<L: Ledger>(
    factory: &PairFactory,
    ledger: &mut L,
    ctx: &RuntimeContext,
) -> FactoryResult<u128> {
    ensure_owner(factory, ctx)?;

    let amount = ledger.native_balance(&factory.address());
    if amount > 0 {
        ledger
            .transfer_native(&factory.address(), &factory.fee_recipient(), amount)
            .map_err(|_| FactoryError::NativeTransferFailed)?;
    }
    Ok(amount)
}

/// Withdraw the factory's whole balance of `asset` to the fee recipient.
///
/// # Returns
/// The amount moved (possibly zero).
pub fn withdraw_asset_fees<L: Ledger>(
    factory: &PairFactory,
    ledger: &mut L,
    ctx: &RuntimeContext,
    asset: Address,
) -> FactoryResult<u128> {
    ensure_owner(factory, ctx)?;

    let amount = ledger.asset_balance(&asset, &factory.address());
    if amount > 0 {
        ledger
            .transfer_asset(&asset, &factory.address(), &factory.fee_recipient(), amount)
            .map_err(|_| FactoryError::AssetTransferFailed)?;
    }
    Ok(amount)
}
