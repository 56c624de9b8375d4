//! IFQL diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the IFQL
//! crates: structured error codes, severities and diagnostic records.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for IFQL operations
pub type Result<T> = std::result::Result<T, IfqlError>;
