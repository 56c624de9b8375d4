//! IFQL error types

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - analysis cannot proceed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message describing the offending node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Variant name of the node the diagnostic refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// Additional context or help
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            node: None,
            help: code.info().help.map(str::to_string),
        }
    }

    /// Set the offending node
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(node) = &self.node {
            write!(f, " (in {})", node)?;
        }
        Ok(())
    }
}

/// Main IFQL error type
#[derive(Debug, Clone, Error)]
pub enum IfqlError {
    /// Semantic error (shape violations found while lowering)
    #[error("{code}: {message}")]
    Semantic {
        code: ErrorCode,
        message: String,
        node: Option<String>,
    },

    /// Type error (found while checking the semantic graph)
    #[error("{code}: {message}")]
    Type {
        code: ErrorCode,
        message: String,
        node: Option<String>,
    },
}

impl IfqlError {
    /// Create a semantic error
    pub fn semantic(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Semantic {
            code,
            message: message.into(),
            node: None,
        }
    }

    /// Create a type error
    pub fn type_error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Type {
            code,
            message: message.into(),
            node: None,
        }
    }

    /// Attach the variant name of the offending node
    pub fn with_node(mut self, name: impl Into<String>) -> Self {
        match &mut self {
            Self::Semantic { node, .. } | Self::Type { node, .. } => *node = Some(name.into()),
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Semantic { code, .. } | Self::Type { code, .. } => *code,
        }
    }

    /// Get the offending node, if known
    pub fn node(&self) -> Option<&str> {
        match self {
            Self::Semantic { node, .. } | Self::Type { node, .. } => node.as_deref(),
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Semantic { code, message, node } | Self::Type { code, message, node } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(node) = node {
                    diag = diag.with_node(node.clone());
                }
                diag
            }
        }
    }
}
