//! Depth-first traversal over the semantic graph

use crate::graph::{
    ArrayExpression, ArrowFunctionExpression, BinaryExpression, BlockStatement, CallExpression,
    ConditionalExpression, Expression, ExpressionStatement, FunctionBody, FunctionParam,
    Identifier, Literal, LogicalExpression, MemberExpression, ObjectExpression, Program, Property,
    ReturnStatement, Statement, UnaryExpression, VariableDeclaration,
};

/// Borrowed view of any graph node
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Program(&'a Program),
    BlockStatement(&'a BlockStatement),
    ExpressionStatement(&'a ExpressionStatement),
    ReturnStatement(&'a ReturnStatement),
    VariableDeclaration(&'a VariableDeclaration),
    ArrayExpression(&'a ArrayExpression),
    ArrowFunctionExpression(&'a ArrowFunctionExpression),
    FunctionParam(&'a FunctionParam),
    BinaryExpression(&'a BinaryExpression),
    CallExpression(&'a CallExpression),
    ConditionalExpression(&'a ConditionalExpression),
    LogicalExpression(&'a LogicalExpression),
    MemberExpression(&'a MemberExpression),
    ObjectExpression(&'a ObjectExpression),
    Property(&'a Property),
    UnaryExpression(&'a UnaryExpression),
    Identifier(&'a Identifier),
    Literal(&'a Literal),
}

impl<'a> Node<'a> {
    pub const fn node_type(&self) -> &'static str {
        match self {
            Self::Program(_) => "Program",
            Self::BlockStatement(_) => "BlockStatement",
            Self::ExpressionStatement(_) => "ExpressionStatement",
            Self::ReturnStatement(_) => "ReturnStatement",
            Self::VariableDeclaration(_) => "VariableDeclaration",
            Self::ArrayExpression(_) => "ArrayExpression",
            Self::ArrowFunctionExpression(_) => "ArrowFunctionExpression",
            Self::FunctionParam(_) => "FunctionParam",
            Self::BinaryExpression(_) => "BinaryExpression",
            Self::CallExpression(_) => "CallExpression",
            Self::ConditionalExpression(_) => "ConditionalExpression",
            Self::LogicalExpression(_) => "LogicalExpression",
            Self::MemberExpression(_) => "MemberExpression",
            Self::ObjectExpression(_) => "ObjectExpression",
            Self::Property(_) => "Property",
            Self::UnaryExpression(_) => "UnaryExpression",
            Self::Identifier(_) => "Identifier",
            Self::Literal(lit) => lit.node_type(),
        }
    }

    /// Direct children in field order
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Self::Program(p) => p.body.iter().map(Node::from).collect(),
            Self::BlockStatement(b) => b.body.iter().map(Node::from).collect(),
            Self::ExpressionStatement(s) => vec![Node::from(&s.expression)],
            Self::ReturnStatement(s) => vec![Node::from(&s.argument)],
            Self::VariableDeclaration(d) => vec![Node::Identifier(&d.id), Node::from(&d.init)],
            Self::ArrayExpression(e) => e.elements.iter().map(Node::from).collect(),
            Self::ArrowFunctionExpression(e) => {
                let mut children: Vec<_> = e.params.iter().map(Node::FunctionParam).collect();
                children.push(Node::from(e.body.as_ref()));
                children
            }
            Self::FunctionParam(p) => {
                let mut children = vec![Node::Identifier(&p.key)];
                children.extend(p.default.as_ref().map(Node::Literal));
                children
            }
            Self::BinaryExpression(e) => {
                vec![Node::from(e.left.as_ref()), Node::from(e.right.as_ref())]
            }
            Self::CallExpression(e) => {
                let mut children = vec![Node::from(e.callee.as_ref())];
                children.extend(e.arguments.as_ref().map(Node::ObjectExpression));
                children
            }
            Self::ConditionalExpression(e) => vec![
                Node::from(e.test.as_ref()),
                Node::from(e.alternate.as_ref()),
                Node::from(e.consequent.as_ref()),
            ],
            Self::LogicalExpression(e) => {
                vec![Node::from(e.left.as_ref()), Node::from(e.right.as_ref())]
            }
            Self::MemberExpression(e) => vec![Node::from(e.object.as_ref())],
            Self::ObjectExpression(e) => e.properties.iter().map(Node::Property).collect(),
            Self::Property(p) => vec![Node::Identifier(&p.key), Node::from(&p.value)],
            Self::UnaryExpression(e) => vec![Node::from(e.argument.as_ref())],
            Self::Identifier(_) | Self::Literal(_) => Vec::new(),
        }
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        match stmt {
            Statement::Block(s) => Self::BlockStatement(s),
            Statement::Expression(s) => Self::ExpressionStatement(s),
            Statement::Return(s) => Self::ReturnStatement(s),
            Statement::VariableDeclaration(s) => Self::VariableDeclaration(s),
        }
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        match expr {
            Expression::Array(e) => Self::ArrayExpression(e),
            Expression::ArrowFunction(e) => Self::ArrowFunctionExpression(e),
            Expression::Binary(e) => Self::BinaryExpression(e),
            Expression::Call(e) => Self::CallExpression(e),
            Expression::Conditional(e) => Self::ConditionalExpression(e),
            Expression::Logical(e) => Self::LogicalExpression(e),
            Expression::Member(e) => Self::MemberExpression(e),
            Expression::Object(e) => Self::ObjectExpression(e),
            Expression::Unary(e) => Self::UnaryExpression(e),
            Expression::Identifier(e) => Self::Identifier(e),
            Expression::Literal(e) => Self::Literal(e),
        }
    }
}

impl<'a> From<&'a FunctionBody> for Node<'a> {
    fn from(body: &'a FunctionBody) -> Self {
        match body {
            FunctionBody::Statement(stmt) => Self::from(stmt),
            FunctionBody::Expression(expr) => Self::from(expr),
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

/// Callbacks for [`walk`]
pub trait Visitor<'a> {
    /// Called before a node's children; returning `false` skips them
    fn visit(&mut self, node: Node<'a>) -> bool;

    /// Called after a node's children have been walked
    fn done(&mut self, node: Node<'a>) {
        let _ = node;
    }
}

/// Walk `node` and its descendants depth-first in field order
pub fn walk<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, node: Node<'a>) {
    if visitor.visit(node) {
        for child in node.children() {
            walk(visitor, child);
        }
    }
    visitor.done(node);
}

/// Number of nodes reachable from `node`, itself included
pub fn count_nodes(node: Node<'_>) -> usize {
    struct Counter(usize);

    impl<'a> Visitor<'a> for Counter {
        fn visit(&mut self, _: Node<'a>) -> bool {
            self.0 += 1;
            true
        }
    }

    let mut counter = Counter(0);
    walk(&mut counter, node);
    counter.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifql_ast::OperatorKind;
    use pretty_assertions::assert_eq;

    fn sample() -> Program {
        // a = 1 + b
        Program {
            body: vec![Statement::VariableDeclaration(VariableDeclaration {
                id: Identifier::new("a"),
                init: Expression::Binary(BinaryExpression {
                    operator: OperatorKind::Addition,
                    left: Box::new(Expression::Literal(Literal::from(1i64))),
                    right: Box::new(Expression::Identifier(Identifier::new("b"))),
                }),
            })],
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        skip: Option<&'static str>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn visit(&mut self, node: Node<'a>) -> bool {
            self.events.push(format!("enter {}", node.node_type()));
            self.skip != Some(node.node_type())
        }

        fn done(&mut self, node: Node<'a>) {
            self.events.push(format!("leave {}", node.node_type()));
        }
    }

    #[test]
    fn test_walk_order() {
        let program = sample();
        let mut recorder = Recorder::default();
        walk(&mut recorder, Node::from(&program));

        assert_eq!(
            recorder.events,
            [
                "enter Program",
                "enter VariableDeclaration",
                "enter Identifier",
                "leave Identifier",
                "enter BinaryExpression",
                "enter IntegerLiteral",
                "leave IntegerLiteral",
                "enter Identifier",
                "leave Identifier",
                "leave BinaryExpression",
                "leave VariableDeclaration",
                "leave Program",
            ]
        );
    }

    #[test]
    fn test_walk_skips_subtree() {
        let program = sample();
        let mut recorder = Recorder {
            skip: Some("BinaryExpression"),
            ..Default::default()
        };
        walk(&mut recorder, Node::from(&program));

        assert!(!recorder.events.iter().any(|e| e == "enter IntegerLiteral"));
        assert!(recorder.events.iter().any(|e| e == "leave BinaryExpression"));
    }

    #[test]
    fn test_count_nodes() {
        assert_eq!(count_nodes(Node::from(&sample())), 6);
    }
}
