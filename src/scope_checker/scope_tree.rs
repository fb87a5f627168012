use std::collections::HashMap;

use log::debug;

use crate::{
    ast::types::DeclaredType,
    errors::errors::{Error, ErrorImpl},
};

/// Index of a scope inside its [`ScopeTree`].
pub type ScopeId = usize;

pub const GLOBAL_SCOPE: &str = "GLOBAL";

/// A declaration record tracked by the scope tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub declared_type: DeclaredType,
    pub assigned: bool,
    pub value: Option<String>,
}

impl Symbol {
    pub fn new(declared_type: DeclaredType) -> Self {
        Symbol {
            declared_type,
            assigned: false,
            value: None,
        }
    }
}

#[derive(Debug)]
pub struct Scope {
    pub name: String,
    symbols: HashMap<String, Symbol>,
    parent: Option<ScopeId>,
    children: HashMap<String, ScopeId>,
}

impl Scope {
    fn new(name: String, parent: Option<ScopeId>) -> Self {
        Scope {
            name,
            symbols: HashMap::new(),
            parent,
            children: HashMap::new(),
        }
    }

    pub fn get_symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn child(&self, name: &str) -> Option<ScopeId> {
        self.children.get(name).copied()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}

/// Arena of nested scopes with a movable current-scope cursor.
///
/// Scopes refer to their parent by index. Lookups walk from the current
/// scope outward through its ancestors, never into children or siblings.
#[derive(Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    pub fn new() -> Self {
        ScopeTree {
            scopes: vec![Scope::new(String::from(GLOBAL_SCOPE), None)],
            current: 0,
        }
    }

    pub fn root(&self) -> &Scope {
        &self.scopes[0]
    }

    pub fn current_id(&self) -> ScopeId {
        self.current
    }

    pub fn current_scope(&self) -> &Scope {
        &self.scopes[self.current]
    }

    pub fn get_scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Finds the nearest scope, starting at the current one, that declares `name`.
    fn resolve(&self, name: &str) -> Option<ScopeId> {
        let mut cursor = Some(self.current);

        while let Some(id) = cursor {
            let scope = &self.scopes[id];
            if scope.symbols.contains_key(name) {
                return Some(id);
            }
            cursor = scope.parent;
        }

        None
    }

    /// Looks `name` up through the current scope and its ancestors.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.resolve(name)
            .and_then(|id| self.scopes[id].get_symbol(name))
    }

    /// Looks `name` up in the current scope only.
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        self.current_scope().get_symbol(name)
    }

    /// Declares `name` in the current scope.
    pub fn define(&mut self, name: &str, declared_type: DeclaredType) -> Result<(), Error> {
        if self.lookup_local(name).is_some() {
            return Err(Error::unpositioned(ErrorImpl::VariableAlreadyDeclared {
                variable: name.to_string(),
            }));
        }

        debug!(
            "defined `{}` as {} in scope `{}`",
            name,
            declared_type,
            self.current_scope().name
        );

        let current = self.current;
        self.scopes[current]
            .symbols
            .insert(name.to_string(), Symbol::new(declared_type));

        Ok(())
    }

    /// Records `value` on the nearest visible declaration of `name`.
    pub fn bind(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        let value = value.into();
        debug!("bound `{}` to {}", name, value);
        self.symbol_mut(name)?.value = Some(value);
        self.mark_assigned(name)
    }

    /// Flags the nearest visible declaration of `name` as assigned.
    pub fn mark_assigned(&mut self, name: &str) -> Result<(), Error> {
        self.symbol_mut(name)?.assigned = true;
        Ok(())
    }

    fn symbol_mut(&mut self, name: &str) -> Result<&mut Symbol, Error> {
        let not_declared = || {
            Error::unpositioned(ErrorImpl::VariableNotDeclared {
                variable: name.to_string(),
            })
        };

        let id = self.resolve(name).ok_or_else(not_declared)?;
        self.scopes[id].symbols.get_mut(name).ok_or_else(not_declared)
    }

    /// Creates a named child of the current scope without entering it.
    pub fn add_scope(&mut self, name: &str) -> Result<ScopeId, Error> {
        if self.current_scope().child(name).is_some() {
            return Err(Error::unpositioned(ErrorImpl::ScopeAlreadyExists {
                scope: name.to_string(),
            }));
        }

        let id = self.scopes.len();
        self.scopes.push(Scope::new(name.to_string(), Some(self.current)));

        let current = self.current;
        self.scopes[current].children.insert(name.to_string(), id);

        Ok(id)
    }

    /// Moves the cursor into the named child of the current scope.
    pub fn enter_scope(&mut self, name: &str) -> Result<(), Error> {
        match self.current_scope().child(name) {
            Some(id) => {
                self.current = id;
                Ok(())
            }
            None => Err(Error::unpositioned(ErrorImpl::UnknownScope {
                scope: name.to_string(),
            })),
        }
    }

    /// Moves the cursor back to the parent of the current scope.
    pub fn exit_scope(&mut self) -> Result<(), Error> {
        match self.current_scope().parent() {
            Some(parent) => {
                self.current = parent;
                Ok(())
            }
            None => Err(Error::unpositioned(ErrorImpl::ExitRootScope)),
        }
    }
}
