//! Code generation error types.

use thiserror::Error;

/// Error raised while lowering the AST to assembly.
///
/// Name resolution happens at generation time, so these are the compiler's
/// only semantic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    /// An identifier was referenced but never declared in a live scope.
    #[error("undeclared identifier `{name}` on line {line}")]
    Undeclared {
        /// The unresolved name.
        name: String,
        /// 1-based line of the reference.
        line: u32,
    },

    /// A `let` reuses the name of a variable that is still live.
    #[error("identifier `{name}` already declared, on line {line}")]
    Redeclared {
        /// The duplicated name.
        name: String,
        /// 1-based line of the offending `let`.
        line: u32,
    },
}
