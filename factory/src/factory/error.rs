// Pair Factory - Error Codes
// This module defines all error codes for factory operations.
//
// Error Code Ranges:
// - 1-99: Configuration errors
// - 200-299: Permission errors
// - 300-399: Invariant violations (router / call-target mutual exclusion)
// - 400-499: Deployment errors
// - 500-599: Asset movement errors
//
// Every error aborts its operation with no partial state change: operations
// perform all fallible checks before their first write.

use thiserror::Error;

/// Factory operation result type
pub type FactoryResult<T> = Result<T, FactoryError>;

/// Factory error type with numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[repr(u64)]
pub enum FactoryError {
    // ========================================
    // Configuration errors (1-99)
    // ========================================
    #[error("Fee multiplier exceeds the protocol ceiling")]
    FeeTooLarge = 1,

    #[error("Zero address not allowed")]
    ZeroAddress = 2,

    #[error("Variant requires a fungible asset")]
    AssetRequired = 3,

    #[error("Variant does not accept a fungible asset")]
    AssetNotAccepted = 4,

    // ========================================
    // Permission errors (200-299)
    // ========================================
    #[error("Caller is not the factory owner")]
    PermissionDenied = 200,

    // ========================================
    // Invariant violations (300-399)
    // ========================================
    #[error("Address was granted router status in the past")]
    RouterConflict = 300,

    #[error("Address is an allowed call target")]
    CallTargetConflict = 301,

    // ========================================
    // Deployment errors (400-499)
    // ========================================
    #[error("Clone deployment failed")]
    DeploymentFailed = 400,

    #[error("Pair initialization failed")]
    InitializationFailed = 401,

    // ========================================
    // Asset movement errors (500-599)
    // ========================================
    #[error("NFT transfer failed")]
    NftTransferFailed = 500,

    #[error("Asset transfer failed")]
    AssetTransferFailed = 501,

    #[error("Native transfer failed")]
    NativeTransferFailed = 502,
}

impl FactoryError {
    /// Get the numeric error code
    pub fn code(&self) -> u64 {
        *self as u64
    }
}
