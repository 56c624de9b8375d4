//! Expression AST nodes for IFQL

use crate::{Identifier, Literal, LogicalOperatorKind, Node, OperatorKind};

/// All IFQL expression types
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Expression {
    /// Array literal (`[a, b]`)
    Array(ArrayExpression),
    /// Arrow function (`(a, b=1) => a + b`)
    ArrowFunction(ArrowFunctionExpression),
    /// Binary operation (`a + b`, `a == b`)
    Binary(BinaryExpression),
    /// Function call (`f(a: 1)`)
    Call(CallExpression),
    /// Conditional (`if test then consequent else alternate`)
    Conditional(ConditionalExpression),
    /// Logical operation (`a and b`)
    Logical(LogicalExpression),
    /// Property access (`a.b`, `a["b"]`)
    Member(MemberExpression),
    /// Object literal (`{a: 1}`)
    Object(ObjectExpression),
    /// Unary operation (`not a`, `-a`)
    Unary(UnaryExpression),
    /// Identifier reference
    Identifier(Identifier),
    /// Literal value
    Literal(Literal),
}

impl Expression {
    /// Variant name of this expression, as the parser reports it
    pub const fn type_name(&self) -> &'static str {
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
            Self::Literal(lit) => lit.type_name(),
        }
    }

    /// Identifier reference
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// Literal value
    pub fn literal(value: impl Into<Literal>) -> Self {
        Self::Literal(value.into())
    }

    /// Binary operation
    pub fn binary(operator: OperatorKind, left: Expression, right: Expression) -> Self {
        Self::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Logical operation
    pub fn logical(operator: LogicalOperatorKind, left: Expression, right: Expression) -> Self {
        Self::Logical(LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Unary operation
    pub fn unary(operator: OperatorKind, argument: Expression) -> Self {
        Self::Unary(UnaryExpression {
            operator,
            argument: Box::new(argument),
        })
    }

    /// Function call with raw arguments
    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Self::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
        })
    }

    /// Property access
    pub fn member(object: Expression, property: Expression) -> Self {
        Self::Member(MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
        })
    }

    /// Object literal from key/value pairs
    pub fn object<K: Into<String>>(properties: impl IntoIterator<Item = (K, Expression)>) -> Self {
        Self::Object(ObjectExpression {
            properties: properties
                .into_iter()
                .map(|(key, value)| Property::new(key, value))
                .collect(),
        })
    }

    /// Array literal
    pub fn array(elements: Vec<Expression>) -> Self {
        Self::Array(ArrayExpression { elements })
    }

    /// Arrow function
    pub fn arrow(params: Vec<Param>, body: impl Into<Node>) -> Self {
        Self::ArrowFunction(ArrowFunctionExpression {
            params,
            body: Box::new(body.into()),
        })
    }

    /// Conditional expression
    pub fn conditional(test: Expression, consequent: Expression, alternate: Expression) -> Self {
        Self::Conditional(ConditionalExpression {
            test: Box::new(test),
            alternate: Box::new(alternate),
            consequent: Box::new(consequent),
        })
    }
}

impl From<Identifier> for Expression {
    fn from(ident: Identifier) -> Self {
        Self::Identifier(ident)
    }
}

impl From<Literal> for Expression {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

/// Array literal
#[derive(Debug, Clone)]
pub struct ArrayExpression {
    pub elements: Vec<Expression>,
}

/// Arrow function
#[derive(Debug, Clone)]
pub struct ArrowFunctionExpression {
    pub params: Vec<Param>,
    /// Function body: a block, a bare expression, or any other node the parser produced
    pub body: Box<Node>,
}

/// Function parameter with optional default value
#[derive(Debug, Clone)]
pub struct Param {
    pub key: Identifier,
    pub default: Option<Expression>,
}

impl Param {
    /// Parameter without a default
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Identifier::new(key),
            default: None,
        }
    }

    /// Parameter with a default value
    pub fn with_default(key: impl Into<String>, default: Expression) -> Self {
        Self {
            key: Identifier::new(key),
            default: Some(default),
        }
    }
}

/// Binary operation
#[derive(Debug, Clone)]
pub struct BinaryExpression {
    pub operator: OperatorKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Function call; arguments are kept as the parser produced them
#[derive(Debug, Clone)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// Conditional expression
#[derive(Debug, Clone)]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub alternate: Box<Expression>,
    pub consequent: Box<Expression>,
}

/// Logical operation
#[derive(Debug, Clone)]
pub struct LogicalExpression {
    pub operator: LogicalOperatorKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// Property access; the property is any expression until analysis resolves it
#[derive(Debug, Clone)]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
}

/// Object literal
#[derive(Debug, Clone)]
pub struct ObjectExpression {
    pub properties: Vec<Property>,
}

/// Unary operation
#[derive(Debug, Clone)]
pub struct UnaryExpression {
    pub operator: OperatorKind,
    pub argument: Box<Expression>,
}

/// Key/value pair of an object literal
#[derive(Debug, Clone)]
pub struct Property {
    pub key: Identifier,
    pub value: Expression,
}

impl Property {
    pub fn new(key: impl Into<String>, value: Expression) -> Self {
        Self {
            key: Identifier::new(key),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        let call = Expression::call(Expression::ident("f"), vec![]);
        assert_eq!(call.type_name(), "CallExpression");

        let lit = Expression::literal(true);
        assert_eq!(lit.type_name(), "BooleanLiteral");
    }

    #[test]
    fn test_object_builder_keeps_order() {
        let obj = Expression::object([("b", Expression::literal(1i64)), ("a", Expression::literal(2i64))]);
        let Expression::Object(obj) = obj else {
            panic!("Expected ObjectExpression");
        };
        let keys: Vec<_> = obj.properties.iter().map(|p| p.key.name.as_str()).collect();
        assert_eq!(keys, ["b", "a"]);
    }
}
