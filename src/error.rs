//! Error types for RHCP
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RhcpError
pub type Result<T> = std::result::Result<T, RhcpError>;

/// Unified error type for RHCP operations
#[derive(Debug, Error)]
pub enum RhcpError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("Store error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Store(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),
}
