//! Semantic analysis for the IFQL query language
//!
//! This crate ties together:
//! - The AST handed over by a parser
//! - Lowering into the typed semantic graph
//! - Type checking with the operator table
//! - Structured diagnostics
//!
//! # Example
//!
//! ```
//! use ifql::ast::{Expression, Program, Statement};
//!
//! let program = Program::new(vec![
//!     Statement::var("a", Expression::literal(true)),
//!     Statement::expr(Expression::ident("a")),
//! ]);
//!
//! let graph = ifql::analyze(&program).unwrap();
//! assert_eq!(graph.body.len(), 2);
//! ```

pub use ifql_ast as ast;
pub use ifql_diagnostics as diagnostics;
pub use ifql_semantic as semantic;

pub use ifql_diagnostics::{Diagnostic, IfqlError, Result};
pub use ifql_semantic::{Kind, Lowerer, SemanticType, Type, TypeChecker};

use log::debug;

/// Lower a program into its semantic graph
pub fn analyze(program: &ast::Program) -> Result<semantic::Program> {
    analyze_with(&Lowerer::new(), program)
}

/// Lower a program with a configured [`Lowerer`]
pub fn analyze_with(lowerer: &Lowerer, program: &ast::Program) -> Result<semantic::Program> {
    lowerer.lower_program(program).map_err(IfqlError::from)
}

/// Type check a lowered program, returning the checker with its global bindings
pub fn type_check(program: &semantic::Program) -> Result<TypeChecker> {
    let mut checker = TypeChecker::new();
    checker.check_program(program).map_err(|err| {
        debug!("type check failed: {err}");
        IfqlError::from(err)
    })?;
    Ok(checker)
}
