/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// The tree is a set of closed enums owned top-down; every pass matches on
/// them exhaustively. `Display` on any node prints the canonical source form.
///
/// Submodules:
/// - expressions: Definitions for the expression variants and operators
/// - statements: Statements, the function definition and the program root
/// - types: The declared types and numeral kinds
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
