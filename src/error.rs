//! Crate-level error types.

use std::fmt;

/// Errors produced by the strider crate.
///
/// The per-frame core never fails; only the options layer and the viewer
/// event loop surface errors.
#[derive(Debug)]
pub enum StriderError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML / JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for StriderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for StriderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StriderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
