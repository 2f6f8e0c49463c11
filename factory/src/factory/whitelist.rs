// Pair Factory - Router / Call-Target Whitelist
// Tracks which addresses pairs may call arbitrarily and which addresses hold
// (or ever held) router status, and enforces their mutual exclusion.
//
// Invariant: no address may simultaneously satisfy
//   `is_call_allowed(x) == true` and `router_status(x).was_ever_allowed == true`.
// The check runs at every grant, in both directions, so the invariant holds
// across all historical and future transitions. `was_ever_allowed` is a
// monotonic sticky bit: router revocation clears `allowed` only.
//
// Both maps live privately in this module; the guarded mutators below are the
// only write path.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::{FactoryError, FactoryResult};
use crate::crypto::Address;

/// Current and historical router standing of an address
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterStatus {
    /// Router calls are currently permitted
    pub allowed: bool,
    /// The address was granted router status at some point. Never reset.
    pub was_ever_allowed: bool,
}

/// Whitelist state machine for call targets and routers
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Whitelist {
    /// target -> arbitrary calls allowed
    call_targets: IndexMap<Address, bool>,
    /// router -> status
    routers: IndexMap<Address, RouterStatus>,
}

impl Whitelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether pairs may call `target` arbitrarily
    pub fn is_call_allowed(&self, target: &Address) -> bool {
        *self.call_targets.get(target).unwrap_or(&false)
    }

    /// Whether `router` currently holds router status
    pub fn is_router_allowed(&self, router: &Address) -> bool {
        self.router_status(router).allowed
    }

    /// Full router standing, including history
    pub fn router_status(&self, router: &Address) -> RouterStatus {
        self.routers.get(router).copied().unwrap_or_default()
    }

    /// Toggle the call-target allowance for `target`.
    ///
    /// Granting fails with `RouterConflict` if `target` ever held router
    /// status. Revoking always succeeds and is idempotent.
    pub fn set_call_allowed(&mut self, target: &Address, allowed: bool) -> FactoryResult<()> {
        if allowed && self.router_status(target).was_ever_allowed {
            return Err(FactoryError::RouterConflict);
        }
        self.call_targets.insert(*target, allowed);
        Ok(())
    }

    /// Toggle the router allowance for `router`.
    ///
    /// Granting fails with `CallTargetConflict` if `router` is currently an
    /// allowed call target; on success it also sets the sticky
    /// `was_ever_allowed`. Revoking clears `allowed` only.
    pub fn set_router_allowed(&mut self, router: &Address, allowed: bool) -> FactoryResult<()> {
        if allowed && self.is_call_allowed(router) {
            return Err(FactoryError::CallTargetConflict);
        }

        let status = self.routers.entry(*router).or_default();
        status.allowed = allowed;
        if allowed {
            status.was_ever_allowed = true;
        }
        Ok(())
    }
}
