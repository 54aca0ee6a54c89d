//! Error types for BlendScore
//!
//! The scoring and adjustment core is infallible over clamped inputs; these
//! errors surface only from validators, constructors and the outer layers.

use thiserror::Error;

/// Result type alias using BlendScoreError
pub type Result<T> = std::result::Result<T, BlendScoreError>;

/// Unified error type for BlendScore operations
#[derive(Debug, Error)]
pub enum BlendScoreError {
    // Snapshot errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    // Reserve errors
    #[error("Reserve error: {0}")]
    Reserve(#[from] ReserveError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Inconsistencies found in an on-chain activity snapshot
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    #[error("Wallet address is empty")]
    EmptyWalletAddress,

    #[error("Repayment outcomes exceed loans: {recorded} recorded for {total_loans} loans")]
    RepaymentCountsExceedLoans { recorded: u64, total_loans: u32 },

    #[error("Recent liquidations exceed total: {recent} > {total}")]
    RecentLiquidationsExceedTotal { recent: u32, total: u32 },

    #[error("Field {field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("Field {field} is negative: {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Field {field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Invalid lending pool reserve parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReserveError {
    #[error("Reserve parameter {field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("Reserve ratio {field} must be within [0, 1], got {value}")]
    RatioOutOfRange { field: &'static str, value: f64 },

    #[error("Reserve parameter {field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

impl From<serde_json::Error> for BlendScoreError {
    fn from(err: serde_json::Error) -> Self {
        BlendScoreError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for BlendScoreError {
    fn from(err: std::io::Error) -> Self {
        BlendScoreError::Io(err.to_string())
    }
}
