//! Semantic graph
//!
//! The typed, immutable tree produced by lowering. Every node is `Clone`
//! (a clone is a fully independent subtree) and `Serialize` (each node renders
//! as an object whose `"type"` field names its variant).

mod expression;
mod literal;
mod statement;

pub use expression::*;
pub use literal::*;
pub use statement::*;

use serde::Serialize;

/// Root of a lowered program
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    /// Compact JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON rendering
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Body of an arrow function: a block or a bare expression
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FunctionBody {
    Statement(Statement),
    Expression(Expression),
}

impl FunctionBody {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Statement(stmt) => stmt.node_type(),
            Self::Expression(expr) => expr.node_type(),
        }
    }
}
