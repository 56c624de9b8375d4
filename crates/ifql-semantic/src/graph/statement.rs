//! Statement nodes of the semantic graph

use super::{Expression, Identifier};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    Block(BlockStatement),
    Expression(ExpressionStatement),
    Return(ReturnStatement),
    VariableDeclaration(VariableDeclaration),
}

impl Statement {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Block(_) => "BlockStatement",
            Self::Expression(_) => "ExpressionStatement",
            Self::Return(_) => "ReturnStatement",
            Self::VariableDeclaration(_) => "VariableDeclaration",
        }
    }
}

/// Function body; lowering guarantees the last statement is a return
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ReturnStatement {
    pub argument: Expression,
}

/// Binding of one name to its initializer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub init: Expression,
}
