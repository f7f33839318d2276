//! hydroc-lex - Lexical analysis for the Hydrogen language.
//!
//! The tokenizer turns Hydrogen source text into a flat token sequence in a
//! single left-to-right pass with greedy longest match and two bytes of
//! lookahead (needed only to recognize `//` and `/*`). Every token carries
//! the 1-based line of its first character; lexemes are zero-copy slices of
//! the source, so nothing downstream needs to own string data.

pub mod cursor;
#[cfg(test)]
mod edge_cases;
pub mod error;
pub mod token;
pub mod tokenizer;

pub use cursor::Cursor;
pub use error::LexError;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
