//! Parse error types.

use hydroc_util::ArenaError;
use thiserror::Error;

/// Error raised during parsing.
///
/// Parse failures are fatal and non-recoverable; the parser reports the
/// first error and stops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A required token or construct was missing.
    #[error("expected {what} on line {line}")]
    Expected {
        /// What was required, e.g. "`;`" or "expression".
        what: String,
        /// 1-based source line the error is reported against.
        line: u32,
    },

    /// Leftover tokens that begin no statement.
    #[error("expected statement on line {line}")]
    NoStatement {
        /// 1-based line of the first unparseable token.
        line: u32,
    },

    /// The AST outgrew the arena budget.
    #[error(transparent)]
    Arena(#[from] ArenaError),
}
