//! hydroc-util - Foundation types shared by the compiler phases.
//!
//! This crate carries the pieces that are not tied to any single phase:
//! the bump arena that owns the AST for the lifetime of a compilation, and
//! the diagnostic types the driver uses to report fatal errors.

pub mod arena;
pub mod diagnostic;

pub use arena::{Arena, ArenaError};
pub use diagnostic::{Diagnostic, Level};
