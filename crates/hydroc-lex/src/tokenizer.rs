//! Single-pass tokenizer.
//!
//! The scanner tries its rules in a fixed order: alphanumeric runs (keyword
//! or identifier), digit runs, the two comment forms, single-byte
//! punctuation, whitespace, and finally the error case. Matches are greedy;
//! lookahead never exceeds two bytes.

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Tokenizer for Hydrogen source text.
///
/// # Example
///
/// ```
/// use hydroc_lex::{Tokenizer, TokenKind};
///
/// let tokens = Tokenizer::new("exit(0);").tokenize().unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Exit);
/// assert_eq!(tokens[1].kind, TokenKind::LParen);
/// assert_eq!(tokens[2].lexeme, Some("0"));
/// ```
pub struct Tokenizer<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer borrowing `source` for the scan.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Consumes the source and produces the token sequence.
    ///
    /// Stops at the first lexical error; there is no recovery.
    pub fn tokenize(mut self) -> Result<Vec<Token<'src>>, LexError> {
        let mut tokens = Vec::new();

        while let Some(byte) = self.cursor.peek(0) {
            let line = self.cursor.line();

            if byte.is_ascii_alphabetic() {
                tokens.push(self.lex_word(line));
            } else if byte.is_ascii_digit() {
                tokens.push(self.lex_int_lit(line));
            } else if byte == b'/' && self.cursor.peek(1) == Some(b'/') {
                self.skip_line_comment();
            } else if byte == b'/' && self.cursor.peek(1) == Some(b'*') {
                self.skip_block_comment(line)?;
            } else if let Some(kind) = TokenKind::punctuation(byte) {
                self.cursor.advance();
                tokens.push(Token {
                    kind,
                    line,
                    lexeme: None,
                });
            } else if byte.is_ascii_whitespace() {
                // advance() bumps the line counter when this is a newline.
                self.cursor.advance();
            } else {
                return Err(LexError::UnexpectedChar {
                    ch: byte as char,
                    line,
                });
            }
        }

        Ok(tokens)
    }

    /// Reads an alphanumeric run and classifies it as keyword or identifier.
    fn lex_word(&mut self, line: u32) -> Token<'src> {
        let start = self.cursor.position();
        self.cursor.advance();
        while matches!(self.cursor.peek(0), Some(b) if b.is_ascii_alphanumeric()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        match TokenKind::keyword(text) {
            Some(kind) => Token {
                kind,
                line,
                lexeme: None,
            },
            None => Token {
                kind: TokenKind::Ident,
                line,
                lexeme: Some(text),
            },
        }
    }

    /// Reads a maximal run of decimal digits.
    fn lex_int_lit(&mut self, line: u32) -> Token<'src> {
        let start = self.cursor.position();
        self.cursor.advance();
        while matches!(self.cursor.peek(0), Some(b) if b.is_ascii_digit()) {
            self.cursor.advance();
        }
        Token {
            kind: TokenKind::IntLit,
            line,
            lexeme: Some(self.cursor.slice_from(start)),
        }
    }

    /// Discards `//` up to, but not including, the next newline.
    fn skip_line_comment(&mut self) {
        while matches!(self.cursor.peek(0), Some(b) if b != b'\n') {
            self.cursor.advance();
        }
    }

    /// Discards `/* ... */`, including the terminator.
    ///
    /// Block comments do not nest. A comment still open at end of input is
    /// rejected, reported at the line where it opened.
    fn skip_block_comment(&mut self, open_line: u32) -> Result<(), LexError> {
        self.cursor.advance();
        self.cursor.advance();
        loop {
            match (self.cursor.peek(0), self.cursor.peek(1)) {
                (Some(b'*'), Some(b'/')) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return Ok(());
                }
                (None, _) => {
                    return Err(LexError::UnterminatedBlockComment { line: open_line })
                }
                _ => self.cursor.advance(),
            }
        }
    }
}
