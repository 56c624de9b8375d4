//! IFQL operators and their canonical tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Equality, relational, arithmetic and unary operators
///
/// Serialized as the canonical source token (e.g. `+`, `==`, `not empty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    #[serde(rename = "*")]
    Multiplication,
    #[serde(rename = "/")]
    Division,
    #[serde(rename = "+")]
    Addition,
    #[serde(rename = "-")]
    Subtraction,
    #[serde(rename = "<=")]
    LessThanEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    GreaterThanEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "startswith")]
    StartsWith,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not")]
    Not,
    #[serde(rename = "not empty")]
    NotEmpty,
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
}

impl OperatorKind {
    /// Every operator, in declaration order
    pub const ALL: [OperatorKind; 15] = [
        Self::Multiplication,
        Self::Division,
        Self::Addition,
        Self::Subtraction,
        Self::LessThanEqual,
        Self::LessThan,
        Self::GreaterThanEqual,
        Self::GreaterThan,
        Self::StartsWith,
        Self::In,
        Self::Not,
        Self::NotEmpty,
        Self::Empty,
        Self::Equal,
        Self::NotEqual,
    ];

    /// Get the operator token
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::LessThanEqual => "<=",
            Self::LessThan => "<",
            Self::GreaterThanEqual => ">=",
            Self::GreaterThan => ">",
            Self::StartsWith => "startswith",
            Self::In => "in",
            Self::Not => "not",
            Self::NotEmpty => "not empty",
            Self::Empty => "empty",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Check if this is an arithmetic operator
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Multiplication | Self::Division | Self::Addition | Self::Subtraction
        )
    }

    /// Check if this is a relational or equality operator
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::LessThanEqual
                | Self::LessThan
                | Self::GreaterThanEqual
                | Self::GreaterThan
                | Self::Equal
                | Self::NotEqual
        )
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when a token names no known operator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator {0:?}")]
pub struct UnknownOperator(pub String);

impl FromStr for OperatorKind {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.token() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// Logical operators over boolean values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalOperatorKind {
    #[serde(rename = "and")]
    And,
    #[serde(rename = "or")]
    Or,
}

impl LogicalOperatorKind {
    /// Get the operator token
    pub const fn token(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for LogicalOperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for LogicalOperatorKind {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}
