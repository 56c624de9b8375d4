//! IFQL error codes following a structured numbering system
//!
//! Error code ranges:
//! - IFQL0100-IFQL0199: Semantic errors (lowering the AST into the semantic graph)
//! - IFQL0200-IFQL0299: Type errors (capability queries, operator resolution)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a semantic error (0100-0199)
    pub const fn is_semantic_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a type error (0200-0299)
    pub const fn is_type_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IFQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Semantic errors (0100-0199)
    map.insert(
        100,
        ErrorInfo::new("Unsupported node kind")
            .with_help("The AST was produced by a parser version this analyzer does not understand"),
    );
    map.insert(
        101,
        ErrorInfo::new("Malformed call arguments")
            .with_help("Calls take a single object of named arguments, e.g. f(a: 1, b: 2)"),
    );
    map.insert(
        102,
        ErrorInfo::new("Invalid member property")
            .with_help("Use an identifier (a.b) or a string literal (a[\"b\"]) as the property"),
    );
    map.insert(
        103,
        ErrorInfo::new("Invalid parameter default")
            .with_help("Function parameter defaults must be literal values"),
    );
    map.insert(
        104,
        ErrorInfo::new("Malformed block")
            .with_help("A block must end with a return statement"),
    );
    map.insert(105, ErrorInfo::new("Analysis cancelled"));
    map.insert(106, ErrorInfo::new("Analysis deadline exceeded"));
    map.insert(
        107,
        ErrorInfo::new("Multiple declarators")
            .with_help("Declare one variable per statement"),
    );

    // Type errors (0200-0299)
    map.insert(200, ErrorInfo::new("Type capability violation"));
    map.insert(201, ErrorInfo::new("Unsupported operation"));
    map.insert(
        202,
        ErrorInfo::new("Unresolved identifier")
            .with_help("Check that the identifier is declared or bound before use"),
    );
    map.insert(203, ErrorInfo::new("Conditional branch mismatch"));

    map
});

// Semantic errors
pub const IFQL0100: ErrorCode = ErrorCode::new(100);
pub const IFQL0101: ErrorCode = ErrorCode::new(101);
pub const IFQL0102: ErrorCode = ErrorCode::new(102);
pub const IFQL0103: ErrorCode = ErrorCode::new(103);
pub const IFQL0104: ErrorCode = ErrorCode::new(104);
pub const IFQL0105: ErrorCode = ErrorCode::new(105);
pub const IFQL0106: ErrorCode = ErrorCode::new(106);
pub const IFQL0107: ErrorCode = ErrorCode::new(107);

// Type errors
pub const IFQL0200: ErrorCode = ErrorCode::new(200);
pub const IFQL0201: ErrorCode = ErrorCode::new(201);
pub const IFQL0202: ErrorCode = ErrorCode::new(202);
pub const IFQL0203: ErrorCode = ErrorCode::new(203);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(IFQL0100.to_string(), "IFQL0100");
        assert_eq!(IFQL0203.to_string(), "IFQL0203");
    }

    #[test]
    fn test_error_categories() {
        assert!(IFQL0104.is_semantic_error());
        assert!(!IFQL0104.is_type_error());

        assert!(IFQL0201.is_type_error());
        assert!(!IFQL0201.is_semantic_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(IFQL0101.info().description, "Malformed call arguments");
        assert!(IFQL0104.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
