//! IFQL semantic analysis
//!
//! Lowers the untyped AST into the semantic graph, and provides the type
//! system used by later passes:
//!
//! - [`types`]: value kinds and the `Type` capability interface
//! - [`binary_types`]: result kinds of binary operators
//! - [`graph`]: the semantic graph itself
//! - [`lower`]: AST to graph lowering
//! - [`walk`]: depth-first traversal
//! - [`check`]: type checking over the graph

pub mod binary_types;
pub mod check;
pub mod error;
pub mod graph;
pub mod lower;
pub mod types;
pub mod walk;

pub use binary_types::{BinarySignature, binary_op_type, binary_signatures};
pub use check::{TypeChecker, TypeResult};
pub use error::{LowerError, TypeCapabilityError, TypeError};
pub use graph::Program;
pub use lower::{LowerOptions, LowerResult, Lowerer, lower};
pub use types::{Kind, SemanticType, Type};
pub use walk::{Node, Visitor, walk};
