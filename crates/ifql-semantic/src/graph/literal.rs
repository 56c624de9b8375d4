//! Literal nodes of the semantic graph

use crate::types::Kind;
use chrono::{DateTime, FixedOffset, TimeDelta};
use regex::Regex;
use serde::{Serialize, Serializer};

/// Literal value of one of the scalar kinds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Boolean(BooleanLiteral),
    String(StringLiteral),
    Integer(IntegerLiteral),
    UnsignedInteger(UnsignedIntegerLiteral),
    Float(FloatLiteral),
    Duration(DurationLiteral),
    DateTime(DateTimeLiteral),
    Regexp(RegexpLiteral),
}

impl Literal {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "BooleanLiteral",
            Self::String(_) => "StringLiteral",
            Self::Integer(_) => "IntegerLiteral",
            Self::UnsignedInteger(_) => "UnsignedIntegerLiteral",
            Self::Float(_) => "FloatLiteral",
            Self::Duration(_) => "DurationLiteral",
            Self::DateTime(_) => "DateTimeLiteral",
            Self::Regexp(_) => "RegexpLiteral",
        }
    }

    /// Kind of the value this literal denotes
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Boolean(_) => Kind::Bool,
            Self::String(_) => Kind::String,
            Self::Integer(_) => Kind::Int,
            Self::UnsignedInteger(_) => Kind::UInt,
            Self::Float(_) => Kind::Float,
            Self::Duration(_) => Kind::Duration,
            Self::DateTime(_) => Kind::Time,
            Self::Regexp(_) => Kind::Regex,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct BooleanLiteral {
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct IntegerLiteral {
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct UnsignedIntegerLiteral {
    pub value: u64,
}

/// Floating point value; NaN and infinities render as JSON `null`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FloatLiteral {
    pub value: f64,
}

/// Signed span of time, rendered in ISO-8601 form (`PT90S`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct DurationLiteral {
    #[serde(serialize_with = "serialize_display")]
    pub value: TimeDelta,
}

/// Absolute point in time, rendered as RFC 3339
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct DateTimeLiteral {
    pub value: DateTime<FixedOffset>,
}

/// Compiled regular expression, rendered as its pattern
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub struct RegexpLiteral {
    #[serde(serialize_with = "serialize_display")]
    pub value: Regex,
}

impl RegexpLiteral {
    /// Literal owning its own compilation of `pattern`
    pub fn compile_from(pattern: &Regex) -> Self {
        Self {
            value: Regex::new(pattern.as_str()).unwrap_or_else(|_| pattern.clone()),
        }
    }
}

// Copies recompile the pattern instead of sharing it.
impl Clone for RegexpLiteral {
    fn clone(&self) -> Self {
        Self::compile_from(&self.value)
    }
}

impl PartialEq for RegexpLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value.as_str() == other.value.as_str()
    }
}

impl Eq for RegexpLiteral {}

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(BooleanLiteral { value })
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(StringLiteral {
            value: value.to_string(),
        })
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(IntegerLiteral { value })
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Self::UnsignedInteger(UnsignedIntegerLiteral { value })
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(FloatLiteral { value })
    }
}

impl From<TimeDelta> for Literal {
    fn from(value: TimeDelta) -> Self {
        Self::Duration(DurationLiteral { value })
    }
}

impl From<DateTime<FixedOffset>> for Literal {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::DateTime(DateTimeLiteral { value })
    }
}

impl From<Regex> for Literal {
    fn from(value: Regex) -> Self {
        Self::Regexp(RegexpLiteral { value })
    }
}
