//! IFQL Abstract Syntax Tree definitions
//!
//! This crate defines the untyped syntax tree a parser hands to semantic
//! analysis. Node enums are `#[non_exhaustive]` so that parsers can grow new
//! variants; consumers must reject what they do not recognize.

mod expression;
mod literal;
mod operator;
mod statement;

pub use expression::*;
pub use literal::*;
pub use operator::*;
pub use statement::*;

/// A complete parsed program
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }
}

/// A bare name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    /// Create a new identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Any AST node
///
/// Used where the grammar admits more than one node family, such as the body
/// of an arrow function.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Node {
    Program(Program),
    Statement(Statement),
    Expression(Expression),
    Property(Property),
    VariableDeclarator(VariableDeclarator),
}

impl Node {
    /// Variant name of the wrapped node
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Program(_) => "Program",
            Self::Statement(stmt) => stmt.type_name(),
            Self::Expression(expr) => expr.type_name(),
            Self::Property(_) => "Property",
            Self::VariableDeclarator(_) => "VariableDeclarator",
        }
    }
}

impl From<Statement> for Node {
    fn from(stmt: Statement) -> Self {
        Self::Statement(stmt)
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

impl From<Property> for Node {
    fn from(prop: Property) -> Self {
        Self::Property(prop)
    }
}

impl From<Program> for Node {
    fn from(program: Program) -> Self {
        Self::Program(program)
    }
}
