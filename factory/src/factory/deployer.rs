// Pair Factory - Clone Deployer
// Deploys minimal-proxy clones at deterministic addresses.
//
// The clone address is derivable before deployment:
//
//   address = keccak256(0xff ++ factory ++ salt ++ keccak256(runtime_code))[12..32]
//
// The salt folds in the caller, the variant, the embedded parameters and the
// factory's creation counter, so the next address for a given creation call
// is readable in advance while repeated identical creations still land on
// fresh addresses. An address squatted by a third party before the factory's
// deploy executes surfaces as `DeploymentFailed`; the recovery is plain
// resubmission once the counter has moved.

use super::error::{FactoryError, FactoryResult};
use super::fingerprint;
use super::types::{PairImmutables, PairVariant};
use crate::crypto::{keccak256, Address, Hash};
use crate::ledger::Ledger;

/// Derive the deployment salt for a creation call
pub fn derive_salt(
    caller: &Address,
    variant: PairVariant,
    immutables: &PairImmutables,
    pair_index: u64,
) -> Hash {
    let mut preimage = Vec::with_capacity(20 + 1 + 20 + 8 + 20 + 8);
    preimage.extend_from_slice(caller.as_bytes());
    preimage.push(variant.tag());
    preimage.extend_from_slice(immutables.nft.as_bytes());
    preimage.extend_from_slice(&immutables.duration_secs.to_be_bytes());
    if let Some(asset) = &immutables.asset {
        preimage.extend_from_slice(asset.as_bytes());
    }
    preimage.extend_from_slice(&pair_index.to_be_bytes());
    keccak256(&preimage)
}

/// Compute the deterministic clone address for a salt and runtime bytecode
pub fn clone_address(factory: &Address, salt: &Hash, code: &[u8]) -> Address {
    let code_hash = keccak256(code);

    let mut preimage = Vec::with_capacity(1 + 20 + 32 + 32);
    preimage.push(0xff);
    preimage.extend_from_slice(factory.as_bytes());
    preimage.extend_from_slice(salt.as_bytes());
    preimage.extend_from_slice(code_hash.as_bytes());

    Address::from_hash(&keccak256(&preimage))
}

/// Deploy a new clone of `template` with the given embedded parameters.
///
/// The installed runtime bytecode is exactly the Fingerprint Codec's encoding,
/// so the new address immediately satisfies the membership test for its
/// variant.
pub fn deploy<L: Ledger>(
    ledger: &mut L,
    factory: &Address,
    template: &Address,
    variant: PairVariant,
    immutables: &PairImmutables,
    salt: &Hash,
) -> FactoryResult<Address> {
    let code = fingerprint::encode(template, factory, variant, immutables);
    let address = clone_address(factory, salt, &code);

    ledger
        .deploy_code(&address, code)
        .map_err(|_| FactoryError::DeploymentFailed)?;

    Ok(address)
}
