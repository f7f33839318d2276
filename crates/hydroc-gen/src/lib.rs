//! hydroc-gen - NASM x86-64 code generation for the Hydrogen language.
//!
//! The generator lowers a parsed program to NASM assembly text for Linux
//! (System V, `_start` entry, `syscall` exit). Expressions are evaluated on
//! the native stack: every expression leaves exactly one value pushed, and
//! every statement balances its own pushes and pops. Variables are stack
//! slots addressed relative to `rsp`.

pub mod asm;
#[cfg(test)]
mod edge_cases;
pub mod error;

pub use asm::Generator;
pub use error::GenError;
