//! Expression nodes of the semantic graph

use super::{FunctionBody, Literal};
use ifql_ast::{LogicalOperatorKind, OperatorKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Array(ArrayExpression),
    ArrowFunction(ArrowFunctionExpression),
    Binary(BinaryExpression),
    Call(CallExpression),
    Conditional(ConditionalExpression),
    Logical(LogicalExpression),
    Member(MemberExpression),
    Object(ObjectExpression),
    Unary(UnaryExpression),
    Identifier(Identifier),
    Literal(Literal),
}

impl Expression {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Array(_) => "ArrayExpression",
            Self::ArrowFunction(_) => "ArrowFunctionExpression",
            Self::Binary(_) => "BinaryExpression",
            Self::Call(_) => "CallExpression",
            Self::Conditional(_) => "ConditionalExpression",
            Self::Logical(_) => "LogicalExpression",
            Self::Member(_) => "MemberExpression",
            Self::Object(_) => "ObjectExpression",
            Self::Unary(_) => "UnaryExpression",
            Self::Identifier(_) => "Identifier",
            Self::Literal(lit) => lit.node_type(),
        }
    }
}

impl From<Literal> for Expression {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<Identifier> for Expression {
    fn from(ident: Identifier) -> Self {
        Self::Identifier(ident)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrayExpression {
    pub elements: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ArrowFunctionExpression {
    pub params: Vec<FunctionParam>,
    pub body: Box<FunctionBody>,
}

/// Parameter of an arrow function; a default is always a literal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct FunctionParam {
    pub key: Identifier,
    pub default: Option<Literal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct BinaryExpression {
    pub operator: OperatorKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Function call with its named arguments gathered in one object
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Option<ObjectExpression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub alternate: Box<Expression>,
    pub consequent: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct LogicalExpression {
    pub operator: LogicalOperatorKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Property access with the property already resolved to a name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Property {
    pub key: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct UnaryExpression {
    pub operator: OperatorKind,
    pub argument: Box<Expression>,
}
