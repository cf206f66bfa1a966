//! # RHCP
//!
//! A small line-oriented request/response protocol for querying and updating
//! named status values, plus the minimal TCP server that speaks it:
//! - Strict all-or-nothing request parsing
//! - Version-dispatched protocol engines
//! - Flat CSV record store, re-read per request
//! - Sequential TCP transport (one connection at a time)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │               (One Connection at a Time)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw request text
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Version Registry                            │
//! │          (version string → protocol engine)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Protocol Engine                             │
//! │         (parse → validate → dispatch → format)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ load / persist
//!                ┌──────▼──────┐
//!                │    Store    │
//!                │ (CSV rows)  │
//!                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod store;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RhcpError};
pub use config::Config;
pub use protocol::{extract_version, Engine};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the rhcp crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
