//! Runtime numeric values.
//!
//! A value is a number tagged with the kind it was produced as. Arithmetic
//! is carried out on `f64` regardless of the tag; the tag only decides which
//! operands may be combined and how the value prints.

use std::fmt::Display;

use crate::{
    ast::{
        expressions::{BinaryOperator, UnaryOperator},
        types::{DeclaredType, NumberKind},
    },
    errors::errors::{Error, ErrorImpl},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Value {
    kind: NumberKind,
    number: f64,
}

impl Value {
    pub fn new(kind: NumberKind, number: f64) -> Self {
        Value { kind, number }
    }

    pub fn int(number: i64) -> Self {
        Value::new(NumberKind::Int, number as f64)
    }

    pub fn float(number: f64) -> Self {
        Value::new(NumberKind::Float, number)
    }

    /// The value a freshly declared variable starts with.
    pub fn zero(declared_type: DeclaredType) -> Self {
        Value::new(declared_type.number_kind(), 0.0)
    }

    /// Parses numeral text as written in the source.
    pub fn from_literal(kind: NumberKind, text: &str) -> Result<Self, Error> {
        let parsed = match kind {
            NumberKind::Int => text.parse::<i64>().map(Value::int).ok(),
            NumberKind::Float => text.parse::<f64>().map(Value::float).ok(),
        };

        parsed.ok_or_else(|| {
            Error::unpositioned(ErrorImpl::NumberParseError {
                token: text.to_string(),
            })
        })
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn as_f64(&self) -> f64 {
        self.number
    }

    /// Applies `op` to two values of the same kind.
    ///
    /// Division by zero yields infinity or NaN rather than an error.
    pub fn binary(self, op: BinaryOperator, rhs: Value) -> Result<Value, Error> {
        if self.kind != rhs.kind {
            return Err(Error::unpositioned(ErrorImpl::TypeMatchError {
                operator: op.to_string(),
                left: self.kind.to_string(),
                right: rhs.kind.to_string(),
            }));
        }

        let (lhs, rhs) = (self.number, rhs.number);
        let number = match op {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Sub => lhs - rhs,
            BinaryOperator::Mul => lhs * rhs,
            BinaryOperator::Div => lhs / rhs,
        };

        Ok(Value::new(self.kind, number))
    }

    pub fn unary(self, op: UnaryOperator) -> Value {
        match op {
            UnaryOperator::Add => self,
            UnaryOperator::Sub => Value::new(self.kind, -self.number),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NumberKind::Int if self.number.is_finite() && self.number.fract() == 0.0 => {
                if (i64::MIN as f64..i64::MAX as f64).contains(&self.number) {
                    write!(f, "{}", self.number as i64)
                } else {
                    write!(f, "{:.0}", self.number)
                }
            }
            NumberKind::Int => write!(f, "{}", self.number),
            NumberKind::Float => write!(f, "{:?}", self.number),
        }
    }
}
