//! Literal AST nodes for IFQL

use chrono::{DateTime, FixedOffset, TimeDelta};
use regex::Regex;

/// A literal value in IFQL
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Literal {
    /// String literal
    String(String),
    /// Boolean literal (true/false)
    Boolean(bool),
    /// Floating point literal (IEEE-754 double)
    Number(f64),
    /// Integer literal (64-bit signed)
    Integer(i64),
    /// Unsigned integer literal (64-bit)
    UnsignedInteger(u64),
    /// Regular expression literal (`/pattern/`, RE2 syntax)
    Regexp(Regex),
    /// Duration literal (`1h30m`), may be negative
    Duration(TimeDelta),
    /// Absolute point in time (`2018-05-22T19:53:26Z`)
    DateTime(DateTime<FixedOffset>),
}

impl Literal {
    /// Variant name of this literal, as the parser reports it
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "StringLiteral",
            Self::Boolean(_) => "BooleanLiteral",
            Self::Number(_) => "NumberLiteral",
            Self::Integer(_) => "IntegerLiteral",
            Self::UnsignedInteger(_) => "UnsignedIntegerLiteral",
            Self::Regexp(_) => "RegexpLiteral",
            Self::Duration(_) => "DurationLiteral",
            Self::DateTime(_) => "DateTimeLiteral",
        }
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Self::UnsignedInteger(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Regex> for Literal {
    fn from(value: Regex) -> Self {
        Self::Regexp(value)
    }
}

impl From<TimeDelta> for Literal {
    fn from(value: TimeDelta) -> Self {
        Self::Duration(value)
    }
}

impl From<DateTime<FixedOffset>> for Literal {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(value)
    }
}
