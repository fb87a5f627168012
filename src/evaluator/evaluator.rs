use log::{debug, trace};

use crate::{
    ast::{
        expressions::Expr,
        statements::{Compound, FunctionDef, Program, Stmt},
    },
    errors::errors::Error,
};

use super::{environment::Environment, value::Value};

/// The outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Value of the last statement executed in the function body.
    pub result: Value,
    /// Every runtime binding, in the order it was created.
    pub bindings: Vec<(String, Value)>,
}

impl Evaluation {
    pub fn binding(&self, name: &str) -> Option<Value> {
        self.bindings
            .iter()
            .find(|(binding, _)| binding == name)
            .map(|(_, value)| *value)
    }
}

/// Tree-walking evaluator over a single flat environment.
///
/// The environment is independent of the scope checker: assignments create
/// missing bindings, and reads of names that were never bound fail here.
#[derive(Debug, Default)]
pub struct Evaluator {
    environment: Environment,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            environment: Environment::new(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn into_environment(self) -> Environment {
        self.environment
    }

    pub fn evaluate_program(&mut self, program: &Program) -> Result<Value, Error> {
        self.evaluate_function(&program.function)
    }

    // No call mechanism exists, so parameters are never bound.
    fn evaluate_function(&mut self, function: &FunctionDef) -> Result<Value, Error> {
        trace!("evaluating function `{}`", function.name);
        self.evaluate_compound(&function.body)
    }

    fn evaluate_compound(&mut self, compound: &Compound) -> Result<Value, Error> {
        let mut last = Value::int(0);

        for statement in compound.iter() {
            last = self.evaluate_stmt(statement)?;
        }

        Ok(last)
    }

    fn evaluate_stmt(&mut self, statement: &Stmt) -> Result<Value, Error> {
        match statement {
            Stmt::Declare {
                name,
                declared_type,
            } => {
                let value = Value::zero(*declared_type);
                self.environment.declare(name, value)?;
                debug!("declared `{}` = {}", name, value);
                Ok(value)
            }
            Stmt::Assign { target, value } => {
                let value = self.evaluate_expr(value)?;
                self.environment.assign(&target.name, value);
                debug!("assigned `{}` = {}", target.name, value);
                Ok(value)
            }
            Stmt::Compound(compound) => self.evaluate_compound(compound),
            Stmt::Empty => Ok(Value::int(0)),
        }
    }

    fn evaluate_expr(&self, expr: &Expr) -> Result<Value, Error> {
        match expr {
            Expr::NumberLiteral { kind, text } => Value::from_literal(*kind, text),
            Expr::Variable(variable) => self.environment.get(&variable.name),
            Expr::BinaryOp { op, left, right } => {
                let left = self.evaluate_expr(left)?;
                let right = self.evaluate_expr(right)?;
                left.binary(*op, right)
            }
            Expr::UnaryOp { op, operand } => Ok(self.evaluate_expr(operand)?.unary(*op)),
        }
    }
}

/// Evaluates `program` in a fresh environment.
pub fn evaluate(program: &Program) -> Result<Evaluation, Error> {
    let mut evaluator = Evaluator::new();
    let result = evaluator.evaluate_program(program)?;

    let bindings = evaluator.into_environment().into_bindings();
    debug!("evaluation finished with {} binding(s)", bindings.len());

    Ok(Evaluation { result, bindings })
}
