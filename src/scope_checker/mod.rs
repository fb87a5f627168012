//! Static scope checking module.
//!
//! This module walks the AST once before evaluation and rejects programs
//! that are statically invalid:
//!
//! - A variable read or assigned without a visible declaration
//! - A variable declared twice in the same scope
//!
//! Declarations are recorded in a tree of named scopes stored in an arena.
//! The grammar has no construct that opens a scope, so only the global scope
//! is populated; entering and exiting child scopes is available on the tree
//! for block-scoped extensions.

pub mod scope_checker;
pub mod scope_tree;
