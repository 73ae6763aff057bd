// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the crate.
///
/// The error surface is deliberately small: flash messages are a best-effort
/// UI affordance, so misuse of the runtime API degrades to no-ops instead of
/// failing. Only theme-file handling can report a problem to the caller.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Theme(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Theme(e) => write!(f, "Theme Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Theme(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
