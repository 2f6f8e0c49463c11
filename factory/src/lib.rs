// Pair Factory Library
// This library implements a factory for lightweight "pair" trading contracts
// that couple an NFT collection with a fungible asset.
//
// Module Structure:
// - crypto: address/hash primitives and Keccak-256 helpers
// - ledger: abstract ledger surface (code store, asset movement) + in-memory backend
// - factory: the factory itself (fingerprint codec, clone deployer, whitelist
//   state machine, orchestrating operations)

#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]

pub mod crypto;
pub mod factory;
pub mod ledger;
