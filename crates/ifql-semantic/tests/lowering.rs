//! Structural rules enforced while lowering

use ifql_ast::{Expression as E, OperatorKind, Param, Program, Statement as S};
use ifql_semantic::graph::{Expression, FunctionBody, Literal, Statement};
use ifql_semantic::{LowerError, lower};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Wrap `body` in `depth` levels of functions returning functions
fn nested(body: S, depth: usize) -> Program {
    let mut stmt = body;
    for _ in 0..depth {
        stmt = S::block(vec![S::ret(E::arrow(vec![], stmt))]);
    }
    Program::new(vec![S::var("f", E::arrow(vec![], stmt))])
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
fn test_malformed_block_at_any_depth(#[case] depth: usize) {
    let bad = S::block(vec![S::var("x", E::literal(1i64))]);
    let err = lower(&nested(bad, depth)).unwrap_err();
    assert_eq!(
        err,
        LowerError::MalformedBlock {
            found: "VariableDeclaration".to_string()
        }
    );

    let good = S::block(vec![S::var("x", E::literal(1i64)), S::ret(E::ident("x"))]);
    assert!(lower(&nested(good, depth)).is_ok());
}

#[test]
fn test_first_error_wins() {
    let program = Program::new(vec![
        S::expr(E::member(E::ident("a"), E::literal(1i64))),
        S::expr(E::call(E::ident("f"), vec![E::literal(1i64), E::literal(2i64)])),
    ]);
    assert!(matches!(
        lower(&program),
        Err(LowerError::InvalidMemberProperty { .. })
    ));
}

#[test]
fn test_errors_inside_call_arguments_propagate() {
    let program = Program::new(vec![S::expr(E::call(
        E::ident("filter"),
        vec![E::object([(
            "fn",
            E::arrow(vec![Param::new("r")], S::block(vec![S::expr(E::ident("r"))])),
        )])],
    ))]);
    assert!(matches!(
        lower(&program),
        Err(LowerError::MalformedBlock { .. })
    ));
}

#[test]
fn test_operators_are_carried_verbatim() {
    // Type compatibility is not checked while lowering.
    let program = Program::new(vec![S::expr(E::binary(
        OperatorKind::StartsWith,
        E::literal(1i64),
        E::literal(true),
    ))]);
    let lowered = lower(&program).unwrap();

    let Statement::Expression(stmt) = &lowered.body[0] else {
        panic!("expected ExpressionStatement");
    };
    let Expression::Binary(bin) = &stmt.expression else {
        panic!("expected BinaryExpression");
    };
    assert_eq!(bin.operator, OperatorKind::StartsWith);
    assert_eq!(*bin.left, Expression::Literal(Literal::from(1i64)));
}

#[test]
fn test_literal_body() {
    let program = Program::new(vec![S::var("one", E::arrow(vec![], E::literal(1u64)))]);
    let lowered = lower(&program).unwrap();

    let Statement::VariableDeclaration(decl) = &lowered.body[0] else {
        panic!("expected VariableDeclaration");
    };
    let Expression::ArrowFunction(func) = &decl.init else {
        panic!("expected ArrowFunctionExpression");
    };
    assert_eq!(
        *func.body,
        FunctionBody::Expression(Expression::Literal(Literal::from(1u64)))
    );
}

#[test]
fn test_program_body_is_unsupported_as_function_body() {
    let program = Program::new(vec![S::expr(E::arrow(vec![], Program::default()))]);
    assert_eq!(
        lower(&program).unwrap_err(),
        LowerError::UnsupportedNodeKind {
            kind: "Program".to_string()
        }
    );
}
