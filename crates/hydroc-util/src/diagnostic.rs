//! Diagnostic types for error reporting.
//!
//! Compilation failures are fatal and reported as a single line on stderr.
//! The driver wraps phase errors in a [`Diagnostic`] before printing so all
//! output shares one format.

use std::fmt;

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use hydroc_util::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// A fatal error; compilation stops.
    Error,
    /// A non-fatal notice; compilation continues.
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A one-line diagnostic message.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity of the message.
    pub level: Level,
    /// Human-readable message, including the source line where one exists.
    pub message: String,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}
