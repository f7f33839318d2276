//! Token definitions.

use std::fmt;

/// The kind of a lexical token.
///
/// Keywords and punctuation carry no payload; `Ident` and `IntLit` tokens
/// keep their text in [`Token::lexeme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// "exit" - process exit statement keyword.
    Exit,
    /// "let" - variable binding keyword.
    Let,
    /// "if" - conditional keyword.
    If,
    /// "elif" - chained conditional keyword.
    Elif,
    /// "else" - terminal conditional branch keyword.
    Else,
    /// An identifier: `[A-Za-z][A-Za-z0-9]*` that is not a keyword.
    Ident,
    /// An integer literal: a run of decimal digits.
    IntLit,
    /// ";"
    Semicolon,
    /// "="
    Eq,
    /// "("
    LParen,
    /// ")"
    RParen,
    /// "{"
    LBrace,
    /// "}"
    RBrace,
    /// "+"
    Plus,
    /// "-"
    Minus,
    /// "*"
    Star,
    /// "/"
    Slash,
}

impl TokenKind {
    /// Classifies an alphanumeric run, returning the keyword kind it names.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "exit" => Some(TokenKind::Exit),
            "let" => Some(TokenKind::Let),
            "if" => Some(TokenKind::If),
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            _ => None,
        }
    }

    /// Maps a single punctuation byte to its token kind.
    pub fn punctuation(byte: u8) -> Option<TokenKind> {
        match byte {
            b';' => Some(TokenKind::Semicolon),
            b'=' => Some(TokenKind::Eq),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b'{' => Some(TokenKind::LBrace),
            b'}' => Some(TokenKind::RBrace),
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Star),
            b'/' => Some(TokenKind::Slash),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Exit => "exit",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::Ident => "identifier",
            TokenKind::IntLit => "integer literal",
            TokenKind::Semicolon => ";",
            TokenKind::Eq => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
        };
        write!(f, "{text}")
    }
}

/// A single token, stamped with the line of its first character.
///
/// Lexemes are slices of the original source, so tokens are `Copy` and the
/// AST nodes that embed them never own heap data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// 1-based source line of the token's first character.
    pub line: u32,
    /// Source text, present only for `Ident` and `IntLit`.
    pub lexeme: Option<&'src str>,
}

impl<'src> Token<'src> {
    /// Lexeme text of an `Ident` or `IntLit` token.
    ///
    /// Empty for the token kinds that carry no lexeme.
    pub fn text(&self) -> &'src str {
        self.lexeme.unwrap_or("")
    }
}
