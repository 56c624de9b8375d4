//! Type checking over the semantic graph
//!
//! Computes a [`SemanticType`] for expressions using the capability queries
//! of the type system and the operator table.

use crate::binary_types::binary_op_type;
use crate::error::TypeError;
use crate::graph::{ArrowFunctionExpression, Expression, FunctionBody, Program, Statement};
use crate::types::{Kind, SemanticType, Type};
use indexmap::IndexMap;
use log::trace;

/// Result type for type checking
pub type TypeResult<T> = Result<T, TypeError>;

#[derive(Debug, Clone)]
struct Binding {
    ty: SemanticType,
    // Functions are re-typed at each call against the argument types.
    function: Option<ArrowFunctionExpression>,
}

/// Scoped type environment and checker
///
/// Declaring a function types it from its parameter defaults alone. When a
/// parameter has no default the body is not checked until the function is
/// called; each call then types the body with the argument types bound in
/// place of the parameters.
#[derive(Debug, Clone)]
pub struct TypeChecker {
    scopes: Vec<IndexMap<String, Binding>>,
    // Names of functions whose bodies are being typed, innermost last
    expanding: Vec<String>,
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeChecker {
    /// Create a checker with one empty global scope
    pub fn new() -> Self {
        Self {
            scopes: vec![IndexMap::new()],
            expanding: Vec::new(),
        }
    }

    /// Bind a name in the innermost scope, replacing any earlier binding there
    pub fn bind(&mut self, name: impl Into<String>, ty: impl Into<SemanticType>) {
        self.insert(name.into(), ty.into(), None);
    }

    fn insert(
        &mut self,
        name: String,
        ty: SemanticType,
        function: Option<ArrowFunctionExpression>,
    ) {
        trace!("binding {name}: {ty}");
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name, Binding { ty, function });
        }
    }

    fn binding(&self, name: &str) -> Option<&Binding> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Type bound to a name, searching from the innermost scope outwards
    pub fn lookup(&self, name: &str) -> Option<&SemanticType> {
        self.binding(name).map(|binding| &binding.ty)
    }

    fn push_scope(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    fn scoped<T>(&mut self, f: impl FnOnce(&mut Self) -> TypeResult<T>) -> TypeResult<T> {
        self.push_scope();
        let result = f(self);
        self.pop_scope();
        result
    }

    /// Check every statement of a program, binding declarations as they appear
    pub fn check_program(&mut self, program: &Program) -> TypeResult<()> {
        for stmt in &program.body {
            self.check_statement(stmt)?;
        }
        Ok(())
    }

    /// Check a statement and return the type it produces, if any
    pub fn check_statement(&mut self, stmt: &Statement) -> TypeResult<Option<SemanticType>> {
        match stmt {
            Statement::Block(block) => self.scoped(|checker| {
                let mut last = None;
                for stmt in &block.body {
                    last = checker.check_statement(stmt)?;
                }
                Ok(last)
            }),
            Statement::Expression(s) => self.check_expression(&s.expression).map(Some),
            Statement::Return(s) => self.check_expression(&s.argument).map(Some),
            Statement::VariableDeclaration(decl) => {
                let ty = self.check_expression(&decl.init)?;
                let function = match &decl.init {
                    Expression::ArrowFunction(func) => Some(func.clone()),
                    _ => None,
                };
                self.insert(decl.id.name.clone(), ty, function);
                Ok(None)
            }
        }
    }

    /// Type of a function whose parameters are given explicit types
    ///
    /// Parameters missing from `params` are typed by their default literal, or
    /// `invalid` when they have none.
    pub fn check_function(
        &mut self,
        func: &ArrowFunctionExpression,
        params: &IndexMap<String, SemanticType>,
    ) -> TypeResult<SemanticType> {
        let param_types = Self::param_types(func, params);

        let return_type = self.scoped(|checker| {
            for (name, ty) in &param_types {
                checker.bind(name.as_str(), ty.clone());
            }
            checker.check_body(&func.body)
        })?;

        Ok(SemanticType::Function {
            params: param_types,
            return_type: Box::new(return_type),
        })
    }

    fn param_types(
        func: &ArrowFunctionExpression,
        params: &IndexMap<String, SemanticType>,
    ) -> IndexMap<String, SemanticType> {
        func.params
            .iter()
            .map(|param| {
                let name = param.key.name.clone();
                let ty = match (params.get(&name), &param.default) {
                    (Some(ty), _) => ty.clone(),
                    (None, Some(default)) => default.kind().into(),
                    (None, None) => SemanticType::INVALID,
                };
                (name, ty)
            })
            .collect()
    }

    // Type of a function before any call. A body that depends on a parameter
    // without a default is left to the call sites, with an `invalid` return.
    fn declared_function_type(
        &mut self,
        func: &ArrowFunctionExpression,
    ) -> TypeResult<SemanticType> {
        if func.params.iter().all(|param| param.default.is_some()) {
            return self.check_function(func, &IndexMap::new());
        }
        Ok(SemanticType::Function {
            params: Self::param_types(func, &IndexMap::new()),
            return_type: Box::new(SemanticType::INVALID),
        })
    }

    fn check_body(&mut self, body: &FunctionBody) -> TypeResult<SemanticType> {
        match body {
            FunctionBody::Expression(expr) => self.check_expression(expr),
            FunctionBody::Statement(stmt) => {
                Ok(self.check_statement(stmt)?.unwrap_or(SemanticType::INVALID))
            }
        }
    }

    fn check_call(
        &mut self,
        callee: &Expression,
        args: IndexMap<String, SemanticType>,
    ) -> TypeResult<SemanticType> {
        let target = match callee {
            Expression::ArrowFunction(func) => Some((None, func.clone())),
            Expression::Identifier(ident) if !self.expanding.contains(&ident.name) => self
                .binding(&ident.name)
                .and_then(|binding| binding.function.clone())
                .map(|func| (Some(ident.name.clone()), func)),
            _ => None,
        };

        let Some((name, func)) = target else {
            let callee = self.check_expression(callee)?;
            return Ok(callee.try_return_type()?);
        };

        trace!(
            "typing call of {} with {} arguments",
            name.as_deref().unwrap_or("<anonymous>"),
            args.len()
        );
        if let Some(name) = &name {
            self.expanding.push(name.clone());
        }
        let result = self.check_function(&func, &args);
        if name.is_some() {
            self.expanding.pop();
        }
        Ok(result?.try_return_type()?)
    }

    /// Type of an expression
    pub fn check_expression(&mut self, expr: &Expression) -> TypeResult<SemanticType> {
        match expr {
            Expression::Literal(lit) => Ok(lit.kind().into()),
            Expression::Identifier(ident) => self.lookup(&ident.name).cloned().ok_or_else(|| {
                TypeError::UnresolvedIdentifier {
                    name: ident.name.clone(),
                }
            }),
            Expression::Array(array) => {
                let element = match array.elements.first() {
                    Some(first) => self.check_expression(first)?,
                    None => SemanticType::INVALID,
                };
                Ok(SemanticType::array(element))
            }
            Expression::Object(obj) => {
                let mut properties = IndexMap::with_capacity(obj.properties.len());
                for prop in &obj.properties {
                    properties.insert(prop.key.name.clone(), self.check_expression(&prop.value)?);
                }
                Ok(SemanticType::Map(properties))
            }
            Expression::Binary(bin) => {
                let left = self.check_expression(&bin.left)?.kind();
                let right = self.check_expression(&bin.right)?.kind();
                binary_op_type(bin.operator, left, right)
                    .map(SemanticType::from)
                    .ok_or(TypeError::UnsupportedOperation {
                        operator: bin.operator,
                        left,
                        right,
                    })
            }
            Expression::Logical(logical) => {
                self.check_expression(&logical.left)?;
                self.check_expression(&logical.right)?;
                Ok(Kind::Bool.into())
            }
            Expression::Unary(unary) => self.check_expression(&unary.argument),
            Expression::Conditional(cond) => {
                self.check_expression(&cond.test)?;
                let consequent = self.check_expression(&cond.consequent)?;
                let alternate = self.check_expression(&cond.alternate)?;
                if consequent.kind() == alternate.kind() {
                    Ok(consequent)
                } else {
                    Err(TypeError::ConditionalMismatch {
                        consequent,
                        alternate,
                    })
                }
            }
            Expression::Member(member) => {
                let object = self.check_expression(&member.object)?;
                Ok(object.try_property_type(&member.property)?)
            }
            Expression::ArrowFunction(func) => self.declared_function_type(func),
            Expression::Call(call) => {
                let mut args = IndexMap::new();
                if let Some(obj) = &call.arguments {
                    for prop in &obj.properties {
                        args.insert(prop.key.name.clone(), self.check_expression(&prop.value)?);
                    }
                }
                self.check_call(&call.callee, args)
            }
        }
    }
}
