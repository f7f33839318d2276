//! AST node definitions.
//!
//! Every node lives in the compilation's [`Arena`](hydroc_util::Arena) and
//! is referenced through `&'ast` borrows, so the tree is a DAG of stable
//! arena pointers rather than a recursive value type. Node payloads are
//! `Copy` data and borrowed string slices only; the arena never runs
//! destructors.

use hydroc_lex::{Token, TokenKind};

/// A primary expression.
#[derive(Debug, Clone, Copy)]
pub enum Term<'ast> {
    /// An integer literal token.
    IntLit(Token<'ast>),
    /// An identifier token referencing a variable.
    Ident(Token<'ast>),
    /// A parenthesized subexpression.
    Paren(&'ast Expr<'ast>),
}

/// Binary operators, all over 64-bit unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Maps an operator token to its binary operator, if it is one.
    pub fn from_kind(kind: TokenKind) -> Option<BinOp> {
        match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            _ => None,
        }
    }

    /// Binding strength for precedence climbing.
    ///
    /// `*` and `/` bind tighter than `+` and `-`; all four operators are
    /// left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 0,
            BinOp::Mul | BinOp::Div => 1,
        }
    }
}

/// A binary expression.
#[derive(Debug, Clone, Copy)]
pub struct BinExpr<'ast> {
    pub op: BinOp,
    pub lhs: &'ast Expr<'ast>,
    pub rhs: &'ast Expr<'ast>,
}

/// An expression: a term or a binary operation.
#[derive(Debug, Clone, Copy)]
pub enum Expr<'ast> {
    Term(&'ast Term<'ast>),
    Bin(&'ast BinExpr<'ast>),
}

/// A statement.
#[derive(Debug, Clone, Copy)]
pub enum Stmt<'ast> {
    /// `exit(expr);` - terminate the process with the expression's value.
    Exit(&'ast Expr<'ast>),
    /// `let name = expr;` - bind a new variable.
    Let {
        name: Token<'ast>,
        value: &'ast Expr<'ast>,
    },
    /// `name = expr;` - overwrite an existing variable.
    Assign {
        name: Token<'ast>,
        value: &'ast Expr<'ast>,
    },
    /// `{ ... }` - a block scope used as a statement.
    Scope(&'ast Scope<'ast>),
    /// `if (expr) { ... }` with an optional elif/else chain.
    If(&'ast IfStmt<'ast>),
}

/// An ordered block of statements with its own variable scope.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'ast> {
    pub stmts: &'ast [&'ast Stmt<'ast>],
}

/// An `if` statement head.
#[derive(Debug, Clone, Copy)]
pub struct IfStmt<'ast> {
    pub cond: &'ast Expr<'ast>,
    pub then_scope: &'ast Scope<'ast>,
    pub pred: Option<&'ast IfPred<'ast>>,
}

/// The continuation of an `if` chain.
///
/// Chains are right-linear: an `Elif` may carry the next predicate, an
/// `Else` always terminates the chain.
#[derive(Debug, Clone, Copy)]
pub enum IfPred<'ast> {
    Elif {
        cond: &'ast Expr<'ast>,
        body: &'ast Scope<'ast>,
        next: Option<&'ast IfPred<'ast>>,
    },
    Else {
        body: &'ast Scope<'ast>,
    },
}

/// The program root: top-level statements in source order.
///
/// The root is owned by the caller; everything it references lives in the
/// arena the parser was given.
#[derive(Debug)]
pub struct Prog<'ast> {
    pub stmts: Vec<&'ast Stmt<'ast>>,
}
