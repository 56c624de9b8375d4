//! Semantic analysis errors

use crate::types::{Kind, SemanticType};
use ifql_ast::OperatorKind;
use ifql_diagnostics::{
    Diagnostic, ErrorCode, IFQL0100, IFQL0101, IFQL0102, IFQL0103, IFQL0104, IFQL0105, IFQL0106,
    IFQL0107, IFQL0200, IFQL0201, IFQL0202, IFQL0203, IfqlError,
};
use thiserror::Error;

/// Structural violation found while lowering the AST
///
/// Lowering stops at the first one; no partial graph is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    /// The AST contains a node this analyzer does not recognize
    #[error("unsupported node kind {kind}")]
    UnsupportedNodeKind { kind: String },

    /// Call arguments are not a single object literal
    #[error("arguments of CallExpression must be a single ObjectExpression, found {found}")]
    MalformedArguments { found: String },

    /// Member property is neither an identifier nor a string literal
    #[error("property of MemberExpression must be an Identifier or StringLiteral, found {found}")]
    InvalidMemberProperty { found: String },

    /// Function parameter default is not a literal
    #[error("default of parameter '{param}' must be a literal, found {found}")]
    InvalidParameterDefault { param: String, found: String },

    /// Block does not end with a return statement
    #[error("BlockStatement must end with a ReturnStatement, found {found}")]
    MalformedBlock { found: String },

    /// Variable declaration with other than exactly one declarator
    #[error("VariableDeclaration must have a single declarator, found {count}")]
    MultipleDeclarators { count: usize },

    /// The caller raised the cancellation flag
    #[error("lowering cancelled after {completed} statements")]
    Cancelled { completed: usize },

    /// The configured deadline passed
    #[error("lowering deadline exceeded after {completed} statements")]
    DeadlineExceeded { completed: usize },
}

impl LowerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedNodeKind { .. } => IFQL0100,
            Self::MalformedArguments { .. } => IFQL0101,
            Self::InvalidMemberProperty { .. } => IFQL0102,
            Self::InvalidParameterDefault { .. } => IFQL0103,
            Self::MalformedBlock { .. } => IFQL0104,
            Self::Cancelled { .. } => IFQL0105,
            Self::DeadlineExceeded { .. } => IFQL0106,
            Self::MultipleDeclarators { .. } => IFQL0107,
        }
    }

    /// Variant name of the node that failed to lower
    pub fn node(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedNodeKind { .. } | Self::Cancelled { .. } | Self::DeadlineExceeded { .. } => {
                None
            }
            Self::MalformedArguments { .. } => Some("CallExpression"),
            Self::InvalidMemberProperty { .. } => Some("MemberExpression"),
            Self::InvalidParameterDefault { .. } => Some("ArrowFunctionExpression"),
            Self::MalformedBlock { .. } => Some("BlockStatement"),
            Self::MultipleDeclarators { .. } => Some("VariableDeclaration"),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        IfqlError::from(self.clone()).to_diagnostic()
    }
}

impl From<LowerError> for IfqlError {
    fn from(err: LowerError) -> Self {
        let node = err.node();
        let converted = IfqlError::semantic(err.code(), err.to_string());
        match node {
            Some(node) => converted.with_node(node),
            None => converted,
        }
    }
}

/// A capability query was made on a kind that lacks the capability
///
/// This is a contract violation by the caller, not an input error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeCapabilityError {
    #[error("kind {kind} has no properties")]
    NoProperties { kind: Kind },

    #[error("kind {kind} has no element type")]
    NoElements { kind: Kind },

    #[error("kind {kind} is not callable")]
    NotCallable { kind: Kind },
}

impl TypeCapabilityError {
    /// The offending kind
    pub fn kind(&self) -> Kind {
        match self {
            Self::NoProperties { kind } | Self::NoElements { kind } | Self::NotCallable { kind } => {
                *kind
            }
        }
    }
}

/// Error found while type checking a semantic graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// No operator table entry for the operand kinds
    #[error("operator {operator} is not defined for {left} and {right}")]
    UnsupportedOperation {
        operator: OperatorKind,
        left: Kind,
        right: Kind,
    },

    /// Identifier with no binding in scope
    #[error("identifier '{name}' is not bound")]
    UnresolvedIdentifier { name: String },

    /// Conditional branches have different types
    #[error("conditional branches disagree: {consequent} and {alternate}")]
    ConditionalMismatch {
        consequent: SemanticType,
        alternate: SemanticType,
    },

    #[error(transparent)]
    Capability(#[from] TypeCapabilityError),
}

impl TypeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnsupportedOperation { .. } => IFQL0201,
            Self::UnresolvedIdentifier { .. } => IFQL0202,
            Self::ConditionalMismatch { .. } => IFQL0203,
            Self::Capability(_) => IFQL0200,
        }
    }

    pub fn node(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation { .. } => "BinaryExpression",
            Self::UnresolvedIdentifier { .. } => "Identifier",
            Self::ConditionalMismatch { .. } => "ConditionalExpression",
            Self::Capability(TypeCapabilityError::NotCallable { .. }) => "CallExpression",
            Self::Capability(_) => "MemberExpression",
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        IfqlError::from(self.clone()).to_diagnostic()
    }
}

impl From<TypeError> for IfqlError {
    fn from(err: TypeError) -> Self {
        IfqlError::type_error(err.code(), err.to_string()).with_node(err.node())
    }
}
