//! AST to semantic graph lowering
//!
//! A single recursive pass over the AST. Each AST variant maps onto exactly
//! one graph constructor; structural rules are enforced along the way:
//!
//! - a block must end with a return statement
//! - call arguments are either absent or a single object literal
//! - a member property is an identifier or a string literal
//! - a parameter default is a literal
//!
//! The first violation aborts the whole pass.

use crate::error::LowerError;
use crate::graph::{
    ArrayExpression, ArrowFunctionExpression, BinaryExpression, BlockStatement, BooleanLiteral,
    CallExpression, ConditionalExpression, DateTimeLiteral, DurationLiteral, Expression,
    ExpressionStatement, FloatLiteral, FunctionBody, FunctionParam, Identifier, IntegerLiteral,
    Literal, LogicalExpression, MemberExpression, ObjectExpression, Program, Property,
    RegexpLiteral, ReturnStatement, Statement, StringLiteral, UnaryExpression,
    UnsignedIntegerLiteral, VariableDeclaration,
};
use crate::walk::{Node, count_nodes};
use ifql_ast as ast;
use log::{debug, trace};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Result type for lowering
pub type LowerResult<T> = Result<T, LowerError>;

/// Limits applied while lowering
#[derive(Debug, Clone, Default)]
pub struct LowerOptions {
    /// Abort once this instant has passed
    pub deadline: Option<Instant>,
    /// Abort once this flag is raised
    pub cancellation: Option<Arc<AtomicBool>>,
}

/// Configurable entry point for lowering
///
/// Limits are checked before each top-level statement.
///
/// ```
/// use ifql_semantic::Lowerer;
/// use std::time::Duration;
///
/// let program = ifql_ast::Program::default();
/// let lowered = Lowerer::new()
///     .with_timeout(Duration::from_secs(1))
///     .lower_program(&program)
///     .unwrap();
/// assert!(lowered.body.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lowerer {
    options: LowerOptions,
}

impl Lowerer {
    /// Create a lowerer without limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LowerOptions) -> Self {
        Self { options }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.options.deadline = Some(deadline);
        self
    }

    /// Set the deadline relative to now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.options.cancellation = Some(flag);
        self
    }

    pub fn options(&self) -> &LowerOptions {
        &self.options
    }

    /// Lower a complete program
    pub fn lower_program(&self, program: &ast::Program) -> LowerResult<Program> {
        debug!("lowering program with {} statements", program.body.len());

        let result = self.lower_body(program);
        match &result {
            Ok(lowered) => {
                if log::log_enabled!(log::Level::Debug) {
                    debug!(
                        "lowered program into {} statements, {} nodes",
                        lowered.body.len(),
                        count_nodes(Node::from(lowered))
                    );
                }
            }
            Err(err) => debug!("lowering aborted: {err}"),
        }
        result
    }

    fn lower_body(&self, program: &ast::Program) -> LowerResult<Program> {
        let mut body = Vec::with_capacity(program.body.len());
        for (index, stmt) in program.body.iter().enumerate() {
            self.check_limits(index)?;
            trace!("lowering statement {index}: {}", stmt.type_name());
            body.push(lower_statement(stmt)?);
        }
        Ok(Program { body })
    }

    fn check_limits(&self, completed: usize) -> LowerResult<()> {
        if let Some(flag) = &self.options.cancellation {
            if flag.load(Ordering::Relaxed) {
                return Err(LowerError::Cancelled { completed });
            }
        }
        if let Some(deadline) = self.options.deadline {
            if Instant::now() >= deadline {
                return Err(LowerError::DeadlineExceeded { completed });
            }
        }
        Ok(())
    }
}

/// Lower a program without limits
pub fn lower(program: &ast::Program) -> LowerResult<Program> {
    Lowerer::new().lower_program(program)
}

fn unsupported(kind: impl Into<String>) -> LowerError {
    LowerError::UnsupportedNodeKind { kind: kind.into() }
}

fn lower_statement(stmt: &ast::Statement) -> LowerResult<Statement> {
    let lowered = match stmt {
        ast::Statement::Block(block) => Statement::Block(lower_block(block)?),
        ast::Statement::Expression(s) => Statement::Expression(ExpressionStatement {
            expression: lower_expression(&s.expression)?,
        }),
        ast::Statement::Return(s) => Statement::Return(ReturnStatement {
            argument: lower_expression(&s.argument)?,
        }),
        ast::Statement::VariableDeclaration(decl) => {
            Statement::VariableDeclaration(lower_declaration(decl)?)
        }
        other => return Err(unsupported(other.type_name())),
    };
    Ok(lowered)
}

fn lower_declaration(decl: &ast::VariableDeclaration) -> LowerResult<VariableDeclaration> {
    match decl.declarations.as_slice() {
        [declarator] => Ok(VariableDeclaration {
            id: lower_identifier(&declarator.id),
            init: lower_expression(&declarator.init)?,
        }),
        declarators => Err(LowerError::MultipleDeclarators {
            count: declarators.len(),
        }),
    }
}

fn lower_block(block: &ast::BlockStatement) -> LowerResult<BlockStatement> {
    let body = block
        .body
        .iter()
        .map(lower_statement)
        .collect::<LowerResult<Vec<_>>>()?;
    match body.last() {
        Some(Statement::Return(_)) => Ok(BlockStatement { body }),
        Some(last) => Err(LowerError::MalformedBlock {
            found: last.node_type().to_string(),
        }),
        None => Err(LowerError::MalformedBlock {
            found: "an empty body".to_string(),
        }),
    }
}

fn lower_identifier(ident: &ast::Identifier) -> Identifier {
    Identifier::new(ident.name.as_str())
}

/// Lower a single expression
pub fn lower_expression(expr: &ast::Expression) -> LowerResult<Expression> {
    let lowered = match expr {
        ast::Expression::Array(e) => Expression::Array(ArrayExpression {
            elements: e
                .elements
                .iter()
                .map(lower_expression)
                .collect::<LowerResult<_>>()?,
        }),
        ast::Expression::ArrowFunction(e) => Expression::ArrowFunction(lower_arrow(e)?),
        ast::Expression::Binary(e) => Expression::Binary(BinaryExpression {
            operator: e.operator,
            left: Box::new(lower_expression(&e.left)?),
            right: Box::new(lower_expression(&e.right)?),
        }),
        ast::Expression::Call(e) => Expression::Call(lower_call(e)?),
        ast::Expression::Conditional(e) => Expression::Conditional(ConditionalExpression {
            test: Box::new(lower_expression(&e.test)?),
            alternate: Box::new(lower_expression(&e.alternate)?),
            consequent: Box::new(lower_expression(&e.consequent)?),
        }),
        ast::Expression::Logical(e) => Expression::Logical(LogicalExpression {
            operator: e.operator,
            left: Box::new(lower_expression(&e.left)?),
            right: Box::new(lower_expression(&e.right)?),
        }),
        ast::Expression::Member(e) => Expression::Member(lower_member(e)?),
        ast::Expression::Object(e) => Expression::Object(lower_object(e)?),
        ast::Expression::Unary(e) => Expression::Unary(UnaryExpression {
            operator: e.operator,
            argument: Box::new(lower_expression(&e.argument)?),
        }),
        ast::Expression::Identifier(ident) => Expression::Identifier(lower_identifier(ident)),
        ast::Expression::Literal(lit) => Expression::Literal(lower_literal(lit)?),
        other => return Err(unsupported(other.type_name())),
    };
    Ok(lowered)
}

fn lower_arrow(arrow: &ast::ArrowFunctionExpression) -> LowerResult<ArrowFunctionExpression> {
    let body = lower_function_body(&arrow.body)?;

    let params = arrow
        .params
        .iter()
        .map(|param| {
            let default = match &param.default {
                None => None,
                Some(ast::Expression::Literal(lit)) => Some(lower_literal(lit)?),
                Some(other) => {
                    return Err(LowerError::InvalidParameterDefault {
                        param: param.key.name.clone(),
                        found: other.type_name().to_string(),
                    });
                }
            };
            Ok(FunctionParam {
                key: lower_identifier(&param.key),
                default,
            })
        })
        .collect::<LowerResult<_>>()?;

    Ok(ArrowFunctionExpression {
        params,
        body: Box::new(body),
    })
}

fn lower_function_body(node: &ast::Node) -> LowerResult<FunctionBody> {
    match node {
        ast::Node::Expression(expr) => Ok(FunctionBody::Expression(lower_expression(expr)?)),
        ast::Node::Statement(stmt) => Ok(FunctionBody::Statement(lower_statement(stmt)?)),
        other => Err(unsupported(other.type_name())),
    }
}

fn lower_call(call: &ast::CallExpression) -> LowerResult<CallExpression> {
    let callee = lower_expression(&call.callee)?;

    let arguments = match call.arguments.as_slice() {
        [] => None,
        [ast::Expression::Object(obj)] => Some(lower_object(obj)?),
        [other] => {
            return Err(LowerError::MalformedArguments {
                found: other.type_name().to_string(),
            });
        }
        args => {
            return Err(LowerError::MalformedArguments {
                found: format!("{} arguments", args.len()),
            });
        }
    };

    Ok(CallExpression {
        callee: Box::new(callee),
        arguments,
    })
}

fn lower_member(member: &ast::MemberExpression) -> LowerResult<MemberExpression> {
    let object = lower_expression(&member.object)?;

    let property = match member.property.as_ref() {
        ast::Expression::Identifier(ident) => ident.name.clone(),
        ast::Expression::Literal(ast::Literal::String(value)) => value.clone(),
        other => {
            return Err(LowerError::InvalidMemberProperty {
                found: other.type_name().to_string(),
            });
        }
    };

    Ok(MemberExpression {
        object: Box::new(object),
        property,
    })
}

fn lower_object(obj: &ast::ObjectExpression) -> LowerResult<ObjectExpression> {
    let properties = obj
        .properties
        .iter()
        .map(|prop| {
            Ok(Property {
                key: lower_identifier(&prop.key),
                value: lower_expression(&prop.value)?,
            })
        })
        .collect::<LowerResult<_>>()?;
    Ok(ObjectExpression { properties })
}

/// Lower a literal, copying its payload
pub fn lower_literal(lit: &ast::Literal) -> LowerResult<Literal> {
    let lowered = match lit {
        ast::Literal::String(value) => Literal::String(StringLiteral {
            value: value.clone(),
        }),
        ast::Literal::Boolean(value) => Literal::Boolean(BooleanLiteral { value: *value }),
        ast::Literal::Number(value) => Literal::Float(FloatLiteral { value: *value }),
        ast::Literal::Integer(value) => Literal::Integer(IntegerLiteral { value: *value }),
        ast::Literal::UnsignedInteger(value) => {
            Literal::UnsignedInteger(UnsignedIntegerLiteral { value: *value })
        }
        ast::Literal::Regexp(value) => Literal::Regexp(RegexpLiteral::compile_from(value)),
        ast::Literal::Duration(value) => Literal::Duration(DurationLiteral { value: *value }),
        ast::Literal::DateTime(value) => Literal::DateTime(DateTimeLiteral { value: *value }),
        other => return Err(unsupported(other.type_name())),
    };
    Ok(lowered)
}
