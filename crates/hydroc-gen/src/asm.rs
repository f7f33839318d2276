//! Assembly generator.
//!
//! Single pass over the AST, emitting NASM text as it goes. The generator
//! keeps a compile-time model of the runtime stack: `stack_size` counts the
//! 8-byte slots currently pushed, each live variable records the slot depth
//! at which its value was pushed, and a scope stack remembers how many
//! variables were live at each block entry so block exit can truncate.
//!
//! Binary operands are evaluated right-hand side first so the left operand
//! ends up on top of the stack.

use hydroc_lex::Token;
use hydroc_par::{BinOp, Expr, IfPred, IfStmt, Prog, Scope, Stmt, Term};

use crate::error::GenError;

/// A live variable and the stack slot holding its value.
struct Var<'ast> {
    name: &'ast str,
    stack_loc: usize,
}

/// NASM code generator for a parsed program.
///
/// Counters reset with every instance; generating the same program twice
/// yields byte-identical output, label numbering included.
pub struct Generator<'ast> {
    prog: Prog<'ast>,
    output: String,
    /// Slots currently pushed on the runtime stack.
    stack_size: usize,
    /// Live variables, in declaration order.
    vars: Vec<Var<'ast>>,
    /// Variable-list length at each open scope's entry.
    scopes: Vec<usize>,
    label_count: usize,
}

impl<'ast> Generator<'ast> {
    /// Creates a generator that takes ownership of the program root.
    pub fn new(prog: Prog<'ast>) -> Self {
        Self {
            prog,
            output: String::new(),
            stack_size: 0,
            vars: Vec::new(),
            scopes: Vec::new(),
            label_count: 0,
        }
    }

    /// Lowers the whole program and returns the assembly text.
    ///
    /// The output starts with the `_start` header and always ends with a
    /// fallback `exit(0)` so programs that never call `exit` still
    /// terminate cleanly.
    pub fn generate(mut self) -> Result<String, GenError> {
        self.output.push_str("global _start\n_start:\n");

        for stmt in std::mem::take(&mut self.prog.stmts) {
            self.gen_stmt(stmt)?;
        }

        self.emit("mov rax, 60");
        self.emit("mov rdi, 0");
        self.emit("syscall");
        Ok(self.output)
    }

    fn gen_term(&mut self, term: &'ast Term<'ast>) -> Result<(), GenError> {
        match *term {
            Term::IntLit(tok) => {
                self.emit(&format!("mov rax, {}", tok.text()));
                self.push("rax");
                Ok(())
            }
            Term::Ident(tok) => {
                let Some(stack_loc) = self.lookup(tok.text()) else {
                    return Err(undeclared(&tok));
                };
                // A slot at or above the current stack top has not been
                // pushed yet; the only way to reach it is a `let` reading
                // itself in its own initializer.
                if stack_loc >= self.stack_size {
                    return Err(undeclared(&tok));
                }
                let offset = (self.stack_size - stack_loc - 1) * 8;
                self.push(&format!("QWORD [rsp + {offset}]"));
                Ok(())
            }
            Term::Paren(inner) => self.gen_expr(inner),
        }
    }

    fn gen_expr(&mut self, expr: &'ast Expr<'ast>) -> Result<(), GenError> {
        match *expr {
            Expr::Term(term) => self.gen_term(term),
            Expr::Bin(bin) => {
                // rhs first, so lhs ends up on top for the pops below.
                self.gen_expr(bin.rhs)?;
                self.gen_expr(bin.lhs)?;
                self.pop("rax");
                self.pop("rbx");
                match bin.op {
                    BinOp::Add => self.emit("add rax, rbx"),
                    BinOp::Sub => self.emit("sub rax, rbx"),
                    BinOp::Mul => self.emit("mul rbx"),
                    BinOp::Div => {
                        // div takes rdx:rax; rdx must not carry stale bits.
                        self.emit("xor rdx, rdx");
                        self.emit("div rbx");
                    }
                }
                self.push("rax");
                Ok(())
            }
        }
    }

    fn gen_scope(&mut self, scope: &'ast Scope<'ast>) -> Result<(), GenError> {
        self.begin_scope();
        for &stmt in scope.stmts {
            self.gen_stmt(stmt)?;
        }
        self.end_scope();
        Ok(())
    }

    fn gen_if_pred(&mut self, pred: &'ast IfPred<'ast>, end_label: &str) -> Result<(), GenError> {
        match *pred {
            IfPred::Elif { cond, body, next } => {
                self.emit(";; elif");
                self.gen_expr(cond)?;
                self.pop("rax");
                let label = self.create_label();
                self.emit("test rax, rax");
                self.emit(&format!("jz {label}"));
                self.gen_scope(body)?;
                self.emit(&format!("jmp {end_label}"));
                // Defined even for a trailing elif, so the jz above always
                // has a target; without a successor it falls through to the
                // end label.
                self.output.push_str(&format!("{label}:\n"));
                if let Some(next) = next {
                    self.gen_if_pred(next, end_label)?;
                }
                Ok(())
            }
            IfPred::Else { body } => {
                self.emit(";; else");
                self.gen_scope(body)
            }
        }
    }

    fn gen_stmt(&mut self, stmt: &'ast Stmt<'ast>) -> Result<(), GenError> {
        match *stmt {
            Stmt::Exit(value) => {
                self.emit(";; exit");
                self.gen_expr(value)?;
                self.emit("mov rax, 60");
                self.pop("rdi");
                self.emit("syscall");
                self.emit(";; /exit");
                Ok(())
            }
            Stmt::Let { name, value } => {
                self.emit(";; let");
                if self.lookup(name.text()).is_some() {
                    return Err(redeclared(&name));
                }
                // Registered before the initializer lowers; its pushed
                // value becomes the variable's storage slot.
                self.vars.push(Var {
                    name: name.text(),
                    stack_loc: self.stack_size,
                });
                self.gen_expr(value)?;
                self.emit(";; /let");
                Ok(())
            }
            Stmt::Assign { name, value } => {
                let Some(stack_loc) = self.lookup(name.text()) else {
                    return Err(undeclared(&name));
                };
                self.gen_expr(value)?;
                self.pop("rax");
                let offset = (self.stack_size - stack_loc - 1) * 8;
                self.emit(&format!("mov [rsp + {offset}], rax"));
                Ok(())
            }
            Stmt::Scope(scope) => {
                self.emit(";; scope");
                self.gen_scope(scope)?;
                self.emit(";; /scope");
                Ok(())
            }
            Stmt::If(if_stmt) => self.gen_if(if_stmt),
        }
    }

    fn gen_if(&mut self, if_stmt: &'ast IfStmt<'ast>) -> Result<(), GenError> {
        self.emit(";; if");
        self.gen_expr(if_stmt.cond)?;
        self.pop("rax");
        let label = self.create_label();
        self.emit("test rax, rax");
        self.emit(&format!("jz {label}"));
        self.gen_scope(if_stmt.then_scope)?;
        if let Some(pred) = if_stmt.pred {
            let end_label = self.create_label();
            self.emit(&format!("jmp {end_label}"));
            self.output.push_str(&format!("{label}:\n"));
            self.gen_if_pred(pred, &end_label)?;
            self.output.push_str(&format!("{end_label}:\n"));
        } else {
            self.output.push_str(&format!("{label}:\n"));
        }
        self.emit(";; /if");
        Ok(())
    }

    /// Emits one indented line of assembly.
    fn emit(&mut self, text: &str) {
        self.output.push_str("    ");
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Pushes an operand and accounts for the new slot.
    fn push(&mut self, operand: &str) {
        self.emit(&format!("push {operand}"));
        self.stack_size += 1;
    }

    /// Pops into a register and releases the slot.
    fn pop(&mut self, reg: &str) {
        self.emit(&format!("pop {reg}"));
        self.stack_size -= 1;
    }

    /// Finds the slot of a live variable, scanning most recent first.
    fn lookup(&self, name: &str) -> Option<usize> {
        self.vars
            .iter()
            .rev()
            .find(|var| var.name == name)
            .map(|var| var.stack_loc)
    }

    fn begin_scope(&mut self) {
        self.scopes.push(self.vars.len());
    }

    /// Drops the variables declared since the matching `begin_scope` and
    /// rolls the runtime stack back past their slots.
    fn end_scope(&mut self) {
        let saved = self.scopes.pop().unwrap_or(0);
        let pop_count = self.vars.len() - saved;
        if pop_count != 0 {
            self.emit(&format!("add rsp, {}", pop_count * 8));
        }
        self.stack_size -= pop_count;
        self.vars.truncate(saved);
    }

    /// Returns a fresh `label{N}` name; labels are never reused.
    fn create_label(&mut self) -> String {
        let label = format!("label{}", self.label_count);
        self.label_count += 1;
        label
    }
}

fn undeclared(tok: &Token<'_>) -> GenError {
    GenError::Undeclared {
        name: tok.text().to_string(),
        line: tok.line,
    }
}

fn redeclared(tok: &Token<'_>) -> GenError {
    GenError::Redeclared {
        name: tok.text().to_string(),
        line: tok.line,
    }
}
