//! hydroc-par - Recursive-descent parser for the Hydrogen language.
//!
//! The parser walks the token sequence with a stateful cursor and builds an
//! arena-allocated AST. Statement dispatch peeks at most three tokens ahead;
//! expressions are parsed by precedence climbing (see [`expr`]). Failure is
//! fatal: the first error is reported and parsing stops, with no panic-mode
//! recovery.
//!
//! # Example
//!
//! ```
//! use hydroc_lex::Tokenizer;
//! use hydroc_par::{Parser, ARENA_CAPACITY};
//! use hydroc_util::Arena;
//!
//! let tokens = Tokenizer::new("exit(0);").tokenize().unwrap();
//! let arena = Arena::with_capacity(ARENA_CAPACITY);
//! let prog = Parser::new(tokens, &arena).parse_prog().unwrap();
//! assert_eq!(prog.stmts.len(), 1);
//! ```

pub mod ast;
#[cfg(test)]
mod edge_cases;
pub mod error;
pub mod expr;

pub use ast::{BinExpr, BinOp, Expr, IfPred, IfStmt, Prog, Scope, Stmt, Term};
pub use error::ParseError;

use hydroc_lex::{Token, TokenKind};
use hydroc_util::Arena;

/// Arena budget the parser reserves up front for the AST.
pub const ARENA_CAPACITY: usize = 4 * 1024 * 1024;

/// Parser over a token sequence.
///
/// All AST nodes are allocated from the arena handed to [`Parser::new`];
/// the returned tree borrows that arena and stays valid until it is
/// dropped.
pub struct Parser<'ast> {
    /// Token stream from the tokenizer.
    tokens: Vec<Token<'ast>>,
    /// Current position in the token stream.
    position: usize,
    /// Line of the last consumed token, for error reporting.
    last_line: u32,
    /// Arena that owns every AST node.
    arena: &'ast Arena,
}

impl<'ast> Parser<'ast> {
    /// Creates a parser over `tokens`, allocating nodes from `arena`.
    pub fn new(tokens: Vec<Token<'ast>>, arena: &'ast Arena) -> Self {
        Self {
            tokens,
            position: 0,
            last_line: 1,
            arena,
        }
    }

    /// Parses the whole program.
    ///
    /// Statements are consumed until the tokens are exhausted; any residue
    /// that begins no statement is an error.
    pub fn parse_prog(mut self) -> Result<Prog<'ast>, ParseError> {
        let mut stmts = Vec::new();
        while let Some(tok) = self.peek(0) {
            match self.parse_stmt()? {
                Some(stmt) => stmts.push(stmt),
                None => return Err(ParseError::NoStatement { line: tok.line }),
            }
        }
        Ok(Prog { stmts })
    }

    /// Parses one statement, or returns `Ok(None)` when the lookahead does
    /// not begin one.
    ///
    /// The caller decides whether absence is an error: `parse_prog` rejects
    /// residue, `parse_scope` takes it as the end of the block.
    pub fn parse_stmt(&mut self) -> Result<Option<&'ast Stmt<'ast>>, ParseError> {
        let Some(tok) = self.peek(0) else {
            return Ok(None);
        };

        let stmt = match tok.kind {
            TokenKind::Exit if self.peek_kind(1) == Some(TokenKind::LParen) => {
                self.consume();
                self.consume();
                let value = self.parse_expr(0)?;
                self.expect(TokenKind::RParen)?;
                self.expect(TokenKind::Semicolon)?;
                Stmt::Exit(value)
            }
            TokenKind::Let
                if self.peek_kind(1) == Some(TokenKind::Ident)
                    && self.peek_kind(2) == Some(TokenKind::Eq) =>
            {
                self.consume();
                let name = self.consume();
                self.consume();
                let value = self.parse_expr(0)?;
                self.expect(TokenKind::Semicolon)?;
                Stmt::Let { name, value }
            }
            TokenKind::Ident if self.peek_kind(1) == Some(TokenKind::Eq) => {
                let name = self.consume();
                self.consume();
                let value = self.parse_expr(0)?;
                self.expect(TokenKind::Semicolon)?;
                Stmt::Assign { name, value }
            }
            TokenKind::LBrace => Stmt::Scope(self.parse_scope()?),
            TokenKind::If => {
                self.consume();
                self.expect(TokenKind::LParen)?;
                let cond = self.parse_expr(0)?;
                self.expect(TokenKind::RParen)?;
                let then_scope = self.parse_scope()?;
                let pred = self.parse_if_pred()?;
                let if_stmt = self.arena.alloc(IfStmt {
                    cond,
                    then_scope,
                    pred,
                })?;
                Stmt::If(if_stmt)
            }
            _ => return Ok(None),
        };

        let stmt = self.arena.alloc(stmt)?;
        Ok(Some(stmt))
    }

    /// Parses a braced block: `{` statements `}`.
    pub fn parse_scope(&mut self) -> Result<&'ast Scope<'ast>, ParseError> {
        if self.try_consume(TokenKind::LBrace).is_none() {
            return Err(ParseError::Expected {
                what: "scope".to_string(),
                line: self.error_line(),
            });
        }
        let mut stmts = Vec::new();
        while let Some(stmt) = self.parse_stmt()? {
            stmts.push(stmt);
        }
        self.expect(TokenKind::RBrace)?;

        let stmts: &'ast [&'ast Stmt<'ast>] = self.arena.alloc_slice(&stmts)?;
        let scope = self.arena.alloc(Scope { stmts })?;
        Ok(scope)
    }

    /// Parses the elif/else continuation of an `if`, if one follows.
    pub fn parse_if_pred(&mut self) -> Result<Option<&'ast IfPred<'ast>>, ParseError> {
        if self.try_consume(TokenKind::Elif).is_some() {
            self.expect(TokenKind::LParen)?;
            let cond = self.parse_expr(0)?;
            self.expect(TokenKind::RParen)?;
            let body = self.parse_scope()?;
            let next = self.parse_if_pred()?;
            let pred = self.arena.alloc(IfPred::Elif { cond, body, next })?;
            return Ok(Some(pred));
        }
        if self.try_consume(TokenKind::Else).is_some() {
            let body = self.parse_scope()?;
            let pred = self.arena.alloc(IfPred::Else { body })?;
            return Ok(Some(pred));
        }
        Ok(None)
    }

    /// Returns the token `offset` positions past the cursor, if any.
    pub(crate) fn peek(&self, offset: usize) -> Option<Token<'ast>> {
        self.tokens.get(self.position + offset).copied()
    }

    /// Kind of the token `offset` positions past the cursor.
    pub(crate) fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.peek(offset).map(|tok| tok.kind)
    }

    /// Consumes the current token and advances the cursor.
    ///
    /// Only called after `peek` has established a token is present.
    pub(crate) fn consume(&mut self) -> Token<'ast> {
        let tok = self.tokens[self.position];
        self.position += 1;
        self.last_line = tok.line;
        tok
    }

    /// Consumes the current token when it has the given kind.
    pub(crate) fn try_consume(&mut self, kind: TokenKind) -> Option<Token<'ast>> {
        if self.peek_kind(0) == Some(kind) {
            Some(self.consume())
        } else {
            None
        }
    }

    /// Requires a token of the given kind, erroring against the last
    /// consumed token's line otherwise.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token<'ast>, ParseError> {
        self.try_consume(kind).ok_or_else(|| ParseError::Expected {
            what: format!("`{kind}`"),
            line: self.last_line,
        })
    }

    /// Line to report a missing-construct error against: the current
    /// token's line, or the last consumed token's at end of input.
    pub(crate) fn error_line(&self) -> u32 {
        self.peek(0).map(|tok| tok.line).unwrap_or(self.last_line)
    }
}
