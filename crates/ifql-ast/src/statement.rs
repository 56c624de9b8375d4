//! Statement AST nodes for IFQL

use crate::{Expression, Identifier};

/// All IFQL statement types
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Statement {
    /// `{ ... }` body of a function
    Block(BlockStatement),
    /// Bare expression
    Expression(ExpressionStatement),
    /// `return expr`
    Return(ReturnStatement),
    /// `a = expr` (one or more declarators)
    VariableDeclaration(VariableDeclaration),
}

impl Statement {
    /// Variant name of this statement, as the parser reports it
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Block(_) => "BlockStatement",
            Self::Expression(_) => "ExpressionStatement",
            Self::Return(_) => "ReturnStatement",
            Self::VariableDeclaration(_) => "VariableDeclaration",
        }
    }

    /// Block of statements
    pub fn block(body: Vec<Statement>) -> Self {
        Self::Block(BlockStatement { body })
    }

    /// Expression statement
    pub fn expr(expression: Expression) -> Self {
        Self::Expression(ExpressionStatement { expression })
    }

    /// Return statement
    pub fn ret(argument: Expression) -> Self {
        Self::Return(ReturnStatement { argument })
    }

    /// Declaration of a single variable
    pub fn var(id: impl Into<String>, init: Expression) -> Self {
        Self::VariableDeclaration(VariableDeclaration {
            declarations: vec![VariableDeclarator::new(id, init)],
        })
    }
}

#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub argument: Expression,
}

/// Declaration statement; the parser may group several declarators
#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone)]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Expression,
}

impl VariableDeclarator {
    pub fn new(id: impl Into<String>, init: Expression) -> Self {
        Self {
            id: Identifier::new(id),
            init,
        }
    }
}
