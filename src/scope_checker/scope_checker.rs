use log::{debug, trace};

use crate::{
    ast::{
        expressions::{Expr, Variable},
        statements::{Compound, FunctionDef, Program, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::scope_tree::ScopeTree;

/// Pre-evaluation pass enforcing declare-before-use and no redeclaration.
#[derive(Debug, Default)]
pub struct ScopeChecker {
    tree: ScopeTree,
}

impl ScopeChecker {
    pub fn new() -> Self {
        ScopeChecker {
            tree: ScopeTree::new(),
        }
    }

    pub fn tree(&self) -> &ScopeTree {
        &self.tree
    }

    pub fn into_tree(self) -> ScopeTree {
        self.tree
    }

    pub fn check_program(&mut self, program: &Program) -> Result<(), Error> {
        self.check_function(&program.function)
    }

    // Parameters have no arguments to bind, so they are not declared here.
    fn check_function(&mut self, function: &FunctionDef) -> Result<(), Error> {
        trace!("checking function `{}`", function.name);
        self.check_compound(&function.body)
    }

    // A compound body shares the enclosing scope.
    fn check_compound(&mut self, compound: &Compound) -> Result<(), Error> {
        for statement in compound.iter() {
            self.check_stmt(statement)?;
        }

        Ok(())
    }

    fn check_stmt(&mut self, statement: &Stmt) -> Result<(), Error> {
        match statement {
            Stmt::Declare {
                name,
                declared_type,
            } => self.tree.define(name, *declared_type),
            Stmt::Assign { target, value } => {
                self.check_variable(target)?;
                self.check_expr(value)?;
                self.tree.mark_assigned(&target.name)
            }
            Stmt::Compound(compound) => self.check_compound(compound),
            Stmt::Empty => Ok(()),
        }
    }

    fn check_expr(&mut self, expr: &Expr) -> Result<(), Error> {
        match expr {
            Expr::NumberLiteral { .. } => Ok(()),
            Expr::Variable(variable) => self.check_variable(variable),
            Expr::BinaryOp { left, right, .. } => {
                self.check_expr(left)?;
                self.check_expr(right)
            }
            Expr::UnaryOp { operand, .. } => self.check_expr(operand),
        }
    }

    fn check_variable(&self, variable: &Variable) -> Result<(), Error> {
        if self.tree.lookup(&variable.name).is_none() {
            return Err(Error::unpositioned(ErrorImpl::VariableNotDeclared {
                variable: variable.name.clone(),
            }));
        }

        Ok(())
    }
}

/// Validates every declaration and variable use in `program`.
///
/// Returns the populated scope tree; callers that only need the verdict can drop it.
pub fn check_scopes(program: &Program) -> Result<ScopeTree, Error> {
    let mut checker = ScopeChecker::new();
    checker.check_program(program)?;

    debug!(
        "scope check passed, {} symbol(s) in the global scope",
        checker.tree().root().symbol_count()
    );

    Ok(checker.into_tree())
}
