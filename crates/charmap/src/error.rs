use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("syntax at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// The file parsed but describes an impossible character set.
    #[error("invalid charmap: {0}")]
    Invalid(String),

    /// A serialized locale table is malformed, or no table can be built.
    #[error("locale table: {0}")]
    Table(String),
}

impl Error {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
