// Pair Factory - Fingerprint Codec
// Derives and recognizes the deterministic bytecode of a minimal-proxy clone.
//
// Clone runtime layout (EIP-1167 delegate proxy with an immutable tail):
//
//   0              10                  30              45
//   +--------------+-------------------+---------------+-------------+
//   | proxy prefix | template (20)     | proxy suffix  | factory (20)|
//   +--------------+-------------------+---------------+-------------+
//   | variant (1)  | nft (20) | duration (8, BE) | [asset (20)]      |
//   +--------------+-------------------+-------------------------------
//
// Genuineness is established by the head: proxy fragments + template +
// embedded factory + variant tag, plus an exact per-variant total length.
// The per-pair parameters beyond the head are intentionally not compared;
// they differ for every clone of the same variant.
//
// Membership testing is a total function over the address space: absent or
// malformed code yields `false`, never an error.

use super::types::{PairImmutables, PairVariant};
use crate::crypto::{Address, ADDRESS_SIZE};

/// EIP-1167 runtime bytecode up to the embedded template address
/// (`363d3d373d3d3d363d73`)
pub const PROXY_PREFIX: [u8; 10] = [0x36, 0x3d, 0x3d, 0x37, 0x3d, 0x3d, 0x3d, 0x36, 0x3d, 0x73];

/// EIP-1167 runtime bytecode after the embedded template address
/// (`5af43d82803e903d91602b57fd5bf3`)
pub const PROXY_SUFFIX: [u8; 15] = [
    0x5a, 0xf4, 0x3d, 0x82, 0x80, 0x3e, 0x90, 0x3d, 0x91, 0x60, 0x2b, 0x57, 0xfd, 0x5b, 0xf3,
];

/// Length of the verified head: proxy fragments, template, factory, variant tag
pub const HEAD_LEN: usize =
    PROXY_PREFIX.len() + ADDRESS_SIZE + PROXY_SUFFIX.len() + ADDRESS_SIZE + 1;

/// Exact clone bytecode length for a variant
pub fn expected_len(variant: PairVariant) -> usize {
    // nft + duration, plus the trading token for fungible-asset pairs
    let params = match variant {
        PairVariant::Native => ADDRESS_SIZE + 8,
        PairVariant::Fungible => ADDRESS_SIZE + 8 + ADDRESS_SIZE,
    };
    HEAD_LEN + params
}

/// Build the verified head for a (template, factory, variant) triple
fn head(template: &Address, factory: &Address, variant: PairVariant) -> [u8; HEAD_LEN] {
    let mut out = [0u8; HEAD_LEN];
    let mut at = 0;

    out[at..at + PROXY_PREFIX.len()].copy_from_slice(&PROXY_PREFIX);
    at += PROXY_PREFIX.len();
    out[at..at + ADDRESS_SIZE].copy_from_slice(template.as_bytes());
    at += ADDRESS_SIZE;
    out[at..at + PROXY_SUFFIX.len()].copy_from_slice(&PROXY_SUFFIX);
    at += PROXY_SUFFIX.len();
    out[at..at + ADDRESS_SIZE].copy_from_slice(factory.as_bytes());
    at += ADDRESS_SIZE;
    out[at] = variant.tag();

    out
}

/// Produce the full clone runtime bytecode for a template and its embedded
/// immutable parameters.
///
/// Pure and deterministic. Callers validate `immutables` against `variant`
/// first (`PairImmutables::validate`); for a fungible-asset pair the trading
/// token is part of the tail.
pub fn encode(
    template: &Address,
    factory: &Address,
    variant: PairVariant,
    immutables: &PairImmutables,
) -> Vec<u8> {
    let mut code = Vec::with_capacity(expected_len(variant));
    code.extend_from_slice(&head(template, factory, variant));
    code.extend_from_slice(immutables.nft.as_bytes());
    code.extend_from_slice(&immutables.duration_secs.to_be_bytes());
    if let (PairVariant::Fungible, Some(asset)) = (variant, &immutables.asset) {
        code.extend_from_slice(asset.as_bytes());
    }
    code
}

/// Check whether `code` is a genuine clone of `template` created by `factory`
/// as `variant`.
///
/// Total: returns `false` for absent code, wrong length, or any head
/// mismatch. Never fails.
pub fn matches(
    code: Option<&[u8]>,
    factory: &Address,
    template: &Address,
    variant: PairVariant,
) -> bool {
    let code = match code {
        Some(code) => code,
        None => return false,
    };
    if code.len() != expected_len(variant) {
        return false;
    }
    code[..HEAD_LEN] == head(template, factory, variant)
}
