//! Lexical error types.

use thiserror::Error;

/// Error raised during tokenization.
///
/// All lexical errors are fatal; the tokenizer stops at the first one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A byte that begins no token.
    #[error("unexpected character `{ch}` on line {line}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// 1-based source line.
        line: u32,
    },

    /// A `/*` comment with no closing `*/` before end of input.
    #[error("unterminated block comment starting on line {line}")]
    UnterminatedBlockComment {
        /// 1-based line where the comment opened.
        line: u32,
    },
}
