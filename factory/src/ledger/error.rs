// Ledger - Error Codes
// This module defines all error codes for ledger-level operations.
//
// Error Code Ranges:
// - 1-99: Code store errors
// - 100-199: NFT errors
// - 200-299: Balance errors
// - 300-399: Pair state errors

use thiserror::Error;

/// Ledger operation result type
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum LedgerError {
    // ========================================
    // Code store errors (1-99)
    // ========================================
    #[error("Address already holds code")]
    AddressOccupied = 1,

    #[error("Empty bytecode")]
    EmptyCode = 2,

    // ========================================
    // NFT errors (100-199)
    // ========================================
    #[error("NFT not found")]
    NftNotFound = 100,

    #[error("Not the NFT owner")]
    NotNftOwner = 101,

    #[error("NFT already minted")]
    NftAlreadyMinted = 102,

    // ========================================
    // Balance errors (200-299)
    // ========================================
    #[error("Insufficient asset balance")]
    InsufficientAssetBalance = 200,

    #[error("Insufficient native balance")]
    InsufficientNativeBalance = 201,

    #[error("Balance overflow")]
    Overflow = 202,

    // ========================================
    // Pair state errors (300-399)
    // ========================================
    #[error("Pair already initialized")]
    PairAlreadyInitialized = 300,

    #[error("Pair not initialized")]
    PairNotInitialized = 301,
}

impl LedgerError {
    /// Get the numeric error code
    pub fn code(&self) -> u64 {
        *self as u64
    }
}
