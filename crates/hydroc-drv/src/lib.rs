//! hydroc-drv - Compiler driver for the Hydrogen language.
//!
//! The pipeline is synchronous and strictly staged: tokenizer, then parser,
//! then code generator, each fully consuming its input before the next
//! begins. The AST arena lives inside one [`compile`] call and is released
//! on every path, success or error; no state survives between invocations.
//!
//! # Example
//!
//! ```
//! let asm = hydroc_drv::compile("exit(0);").unwrap();
//! assert!(asm.starts_with("global _start\n_start:\n"));
//! ```

use hydroc_gen::{GenError, Generator};
use hydroc_lex::{LexError, Tokenizer};
use hydroc_par::{ParseError, Parser, ARENA_CAPACITY};
use hydroc_util::Arena;
use thiserror::Error;

/// Any failure the compilation pipeline can surface.
///
/// Each variant displays as the underlying phase error: a single line with
/// the originating source line number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    /// The tokenizer rejected the source.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The parser rejected the token sequence.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The code generator rejected the program.
    #[error(transparent)]
    Gen(#[from] GenError),
}

/// Compiles Hydrogen source text to NASM assembly text.
///
/// Pure with respect to the outside world: file handling, process exit and
/// assembler invocation belong to the caller.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = Tokenizer::new(source).tokenize()?;
    let arena = Arena::with_capacity(ARENA_CAPACITY);
    let prog = Parser::new(tokens, &arena).parse_prog()?;
    let asm = Generator::new(prog).generate()?;
    Ok(asm)
}
