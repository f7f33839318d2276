//! Expression parsing by precedence climbing.
//!
//! A single function carries a minimum-precedence parameter instead of one
//! function per precedence level. The loop consumes operators whose
//! precedence is at least the minimum and parses each right-hand side with
//! `precedence + 1`, which makes every operator left-associative.
//!
//! # Operator precedence (higher binds tighter)
//!
//! | Level | Operators |
//! |-------|-----------|
//! | 0     | `+`, `-`  |
//! | 1     | `*`, `/`  |

use hydroc_lex::TokenKind;

use crate::ast::{BinExpr, BinOp, Expr, Term};
use crate::error::ParseError;
use crate::Parser;

impl<'ast> Parser<'ast> {
    /// Parses an expression whose operators all have precedence of at
    /// least `min_prec`.
    ///
    /// Entry points pass `0` to accept any expression.
    pub fn parse_expr(&mut self, min_prec: u8) -> Result<&'ast Expr<'ast>, ParseError> {
        let term = self.parse_term()?;
        let mut lhs: &'ast Expr<'ast> = self.arena.alloc(Expr::Term(term))?;

        while let Some(tok) = self.peek(0) {
            let Some(op) = BinOp::from_kind(tok.kind) else {
                break;
            };
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.consume();

            let rhs = self.parse_expr(prec + 1)?;
            let bin = self.arena.alloc(BinExpr { op, lhs, rhs })?;
            lhs = self.arena.alloc(Expr::Bin(bin))?;
        }

        Ok(lhs)
    }

    /// Parses a primary expression: an integer literal, an identifier, or
    /// a parenthesized expression.
    pub fn parse_term(&mut self) -> Result<&'ast Term<'ast>, ParseError> {
        let term = match self.peek_kind(0) {
            Some(TokenKind::IntLit) => Term::IntLit(self.consume()),
            Some(TokenKind::Ident) => Term::Ident(self.consume()),
            Some(TokenKind::LParen) => {
                self.consume();
                let inner = self.parse_expr(0)?;
                self.expect(TokenKind::RParen)?;
                Term::Paren(inner)
            }
            _ => {
                return Err(ParseError::Expected {
                    what: "expression".to_string(),
                    line: self.error_line(),
                })
            }
        };
        let term = self.arena.alloc(term)?;
        Ok(term)
    }
}
