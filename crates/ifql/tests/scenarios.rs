//! End-to-end analysis scenarios

use ifql::ast::{Expression as E, OperatorKind, Param, Program, Statement as S};
use ifql::diagnostics::{IFQL0101, IFQL0102, IFQL0104, IFQL0201, Severity};
use ifql::semantic::graph::{
    BinaryExpression, CallExpression, Expression, ExpressionStatement, FunctionBody, Identifier,
    Literal, MemberExpression, ObjectExpression, Property, Statement, VariableDeclaration,
};
use ifql::semantic::binary_op_type;
use ifql::{IfqlError, Kind, analyze, type_check};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

fn int_property(key: &str, value: i64) -> Property {
    Property {
        key: Identifier::new(key),
        value: Expression::Literal(Literal::from(value)),
    }
}

#[test]
fn test_declaration_then_reference() {
    // let a = true; a
    let program = Program::new(vec![S::var("a", E::literal(true)), S::expr(E::ident("a"))]);

    let graph = analyze(&program).unwrap();
    assert_eq!(
        graph.body,
        vec![
            Statement::VariableDeclaration(VariableDeclaration {
                id: Identifier::new("a"),
                init: Expression::Literal(Literal::from(true)),
            }),
            Statement::Expression(ExpressionStatement {
                expression: ident("a"),
            }),
        ]
    );
}

#[test]
fn test_function_definition_and_call() {
    // f = (a, b) => a + b
    // f(a: 2, b: 3)
    let program = Program::new(vec![
        S::var(
            "f",
            E::arrow(
                vec![Param::new("a"), Param::new("b")],
                E::binary(OperatorKind::Addition, E::ident("a"), E::ident("b")),
            ),
        ),
        S::expr(E::call(
            E::ident("f"),
            vec![E::object([("a", E::literal(2i64)), ("b", E::literal(3i64))])],
        )),
    ]);

    let graph = analyze(&program).unwrap();

    let Statement::VariableDeclaration(decl) = &graph.body[0] else {
        panic!("expected VariableDeclaration");
    };
    let Expression::ArrowFunction(func) = &decl.init else {
        panic!("expected ArrowFunctionExpression");
    };
    let names: Vec<_> = func.params.iter().map(|p| p.key.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(
        *func.body,
        FunctionBody::Expression(Expression::Binary(BinaryExpression {
            operator: OperatorKind::Addition,
            left: Box::new(ident("a")),
            right: Box::new(ident("b")),
        }))
    );

    assert_eq!(
        graph.body[1],
        Statement::Expression(ExpressionStatement {
            expression: Expression::Call(CallExpression {
                callee: Box::new(ident("f")),
                arguments: Some(ObjectExpression {
                    properties: vec![int_property("a", 2), int_property("b", 3)],
                }),
            }),
        })
    );
}

#[test]
fn test_three_raw_arguments() {
    let program = Program::new(vec![S::expr(E::call(
        E::ident("f"),
        vec![E::literal(1i64), E::literal(2i64), E::literal(3i64)],
    ))]);

    let err = analyze(&program).unwrap_err();
    assert_eq!(err.code(), IFQL0101);
    assert_eq!(err.node(), Some("CallExpression"));
    insta::assert_snapshot!(
        err.to_string(),
        @"IFQL0101: arguments of CallExpression must be a single ObjectExpression, found 3 arguments"
    );
}

#[rstest]
#[case(OperatorKind::Equal, Kind::String, Kind::String, Some(Kind::Bool))]
#[case(OperatorKind::Addition, Kind::String, Kind::String, None)]
fn test_operator_lookup(
    #[case] op: OperatorKind,
    #[case] left: Kind,
    #[case] right: Kind,
    #[case] expected: Option<Kind>,
) {
    assert_eq!(binary_op_type(op, left, right), expected);
}

#[test]
fn test_block_without_return() {
    let program = Program::new(vec![S::var(
        "f",
        E::arrow(vec![], S::block(vec![S::expr(E::literal(1i64))])),
    )]);

    let err = analyze(&program).unwrap_err();
    assert!(matches!(err, IfqlError::Semantic { .. }));
    assert_eq!(err.code(), IFQL0104);

    let diag = err.to_diagnostic();
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.node.as_deref(), Some("BlockStatement"));
}

#[rstest]
#[case::dotted(E::ident("b"))]
#[case::indexed(E::literal("b"))]
fn test_member_property_resolves(#[case] property: E) {
    let program = Program::new(vec![S::expr(E::member(E::ident("a"), property))]);
    let graph = analyze(&program).unwrap();

    assert_eq!(
        graph.body[0],
        Statement::Expression(ExpressionStatement {
            expression: Expression::Member(MemberExpression {
                object: Box::new(ident("a")),
                property: "b".to_string(),
            }),
        })
    );
}

#[test]
fn test_member_integer_property_rejected() {
    let program = Program::new(vec![S::expr(E::member(E::ident("a"), E::literal(1i64)))]);
    assert_eq!(analyze(&program).unwrap_err().code(), IFQL0102);
}

#[test]
fn test_type_check_reports_table_miss() {
    let program = Program::new(vec![S::var(
        "s",
        E::binary(OperatorKind::Addition, E::literal("a"), E::literal("b")),
    )]);
    let graph = analyze(&program).unwrap();

    let err = type_check(&graph).unwrap_err();
    assert!(matches!(err, IfqlError::Type { .. }));
    assert_eq!(err.code(), IFQL0201);
    assert_eq!(err.node(), Some("BinaryExpression"));
}

#[test]
fn test_type_check_of_query_pipeline() {
    // limit = (n=10) => n
    // top = limit(n: 5) > 3
    let program = Program::new(vec![
        S::var(
            "limit",
            E::arrow(vec![Param::with_default("n", E::literal(10i64))], E::ident("n")),
        ),
        S::var(
            "top",
            E::binary(
                OperatorKind::GreaterThan,
                E::call(E::ident("limit"), vec![E::object([("n", E::literal(5i64))])]),
                E::literal(3i64),
            ),
        ),
    ]);

    let checker = type_check(&analyze(&program).unwrap()).unwrap();
    assert_eq!(checker.lookup("top"), Some(&Kind::Bool.into()));
}

#[test]
fn test_type_check_of_function_call() {
    // f = (a, b) => a + b
    // r = f(a: 2, b: 3)
    let program = Program::new(vec![
        S::var(
            "f",
            E::arrow(
                vec![Param::new("a"), Param::new("b")],
                E::binary(OperatorKind::Addition, E::ident("a"), E::ident("b")),
            ),
        ),
        S::var(
            "r",
            E::call(
                E::ident("f"),
                vec![E::object([("a", E::literal(2i64)), ("b", E::literal(3i64))])],
            ),
        ),
    ]);

    let checker = type_check(&analyze(&program).unwrap()).unwrap();
    assert_eq!(checker.lookup("r"), Some(&Kind::Int.into()));
}
