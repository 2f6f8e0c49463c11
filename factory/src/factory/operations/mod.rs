// Pair Factory - Operations
// Externally callable entry points, written runtime-agnostic:
// - Ledger access goes through the Ledger trait
// - The transaction signer arrives in a RuntimeContext
// - Every operation validates before its first write, so a returned error
//   implies zero state change

mod admin;
mod create;
mod deposit;
mod query;

pub use admin::*;
pub use create::*;
pub use deposit::*;
pub use query::*;

use crate::crypto::Address;

// ========================================
// Runtime Context
// ========================================

/// Identity of the transaction driving an operation
#[derive(Clone, Copy, Debug)]
pub struct RuntimeContext {
    /// Current caller (transaction signer)
    pub caller: Address,
}

impl RuntimeContext {
    /// Create a new runtime context
    pub fn new(caller: Address) -> Self {
        Self { caller }
    }
}
