use std::collections::HashMap;

use crate::errors::errors::{Error, ErrorImpl};

use super::value::Value;

/// The evaluator's flat name → value store, kept in insertion order.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Inserts a new binding; an existing binding of `name` is an error.
    pub fn declare(&mut self, name: &str, value: Value) -> Result<(), Error> {
        if self.index.contains_key(name) {
            return Err(Error::unpositioned(ErrorImpl::VariableAlreadyBound {
                variable: name.to_string(),
            }));
        }

        self.index.insert(name.to_string(), self.bindings.len());
        self.bindings.push((name.to_string(), value));

        Ok(())
    }

    /// Stores `value` under `name`, creating the binding if it is absent.
    pub fn assign(&mut self, name: &str, value: Value) {
        match self.index.get(name) {
            Some(&slot) => self.bindings[slot].1 = value,
            None => {
                self.index.insert(name.to_string(), self.bindings.len());
                self.bindings.push((name.to_string(), value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<Value, Error> {
        self.index
            .get(name)
            .map(|&slot| self.bindings[slot].1)
            .ok_or_else(|| {
                Error::unpositioned(ErrorImpl::VariableNotBound {
                    variable: name.to_string(),
                })
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.bindings.iter()
    }

    pub fn into_bindings(self) -> Vec<(String, Value)> {
        self.bindings
    }
}
