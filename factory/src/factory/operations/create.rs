// Pair Creation Operation
// Deploys, initializes and seeds a new pair clone.

use log::info;

use super::RuntimeContext;
use crate::crypto::Address;
use crate::factory::{
    deployer, FactoryError, FactoryEvent, FactoryResult, PairFactory, PairImmutables, PairInit,
    PairVariant,
};
use crate::ledger::Ledger;

/// Create a new pair and seed it with one NFT.
///
/// The caller becomes the pair owner. `asset` must be `None` for
/// [`PairVariant::Native`] and the trading token for
/// [`PairVariant::Fungible`].
///
/// # Parameters
/// - `variant`: pair shape to create
/// - `nft`: NFT collection the pair trades
/// - `asset`: trading token for fungible-asset pairs
/// - `asset_recipient`: where swap proceeds are sent
/// - `duration_secs`: staking/lock duration parameter
/// - `initial_token_id`: seed NFT moved from the caller into the pair
///
/// # Returns
/// - `Ok(address)`: the new pair's address
/// - `Err(FactoryError)`: `DeploymentFailed` if the derived address is
///   occupied, `InitializationFailed` if the pair cannot be initialized or
///   the seed NFT cannot be moved
pub fn create_pair<L: Ledger>(
    factory: &mut PairFactory,
    ledger: &mut L,
    ctx: &RuntimeContext,
    variant: PairVariant,
    nft: Address,
    asset: Option<Address>,
    asset_recipient: Address,
    duration_secs: u64,
    initial_token_id: u64,
) -> FactoryResult<Address> {
    // Step 1: Validate the embedded parameter block
    if nft.is_zero() {
        return Err(FactoryError::ZeroAddress);
    }
    let immutables = PairImmutables {
        nft,
        duration_secs,
        asset,
    };
    immutables.validate(variant)?;

    // Step 2: The seed NFT must be movable by the caller. Checked before the
    // first write; after this point no collaborator call on a fresh clone
    // address can fail, which keeps the whole operation atomic.
    match ledger.nft_owner(&nft, initial_token_id) {
        Some(owner) if owner == ctx.caller => {}
        _ => return Err(FactoryError::InitializationFailed),
    }

    // Step 3: Deploy the clone at its deterministic address
    let salt = deployer::derive_salt(&ctx.caller, variant, &immutables, factory.pair_count());
    let factory_address = factory.address();
    let template = factory.template(variant);
    let pair = deployer::deploy(
        ledger,
        &factory_address,
        &template,
        variant,
        &immutables,
        &salt,
    )?;

    // Step 4: Initialize the pair and move the seed NFT into it
    let init = PairInit {
        owner: ctx.caller,
        asset_recipient,
        duration_secs,
        variant,
        nft,
        asset: immutables.asset,
    };
    ledger
        .initialize_pair(&pair, init)
        .map_err(|_| FactoryError::InitializationFailed)?;
    ledger
        .transfer_nft(&nft, initial_token_id, &ctx.caller, &pair)
        .map_err(|_| FactoryError::InitializationFailed)?;

    // Step 5: Record and emit
    factory.increment_pair_count();
    factory.emit(FactoryEvent::PairCreated {
        variant,
        pair,
        nft,
        owner: ctx.caller,
    });
    info!("pair {} created ({:?}, collection {})", pair, variant, nft);

    Ok(pair)
}
