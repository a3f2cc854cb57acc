//! Error types with rich diagnostics using miette
//!
//! Only missing resources and backend failures are errors. Ambiguous
//! decoding, oversized text and odd line counts degrade silently.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while building a card sheet
#[derive(Error, Diagnostic, Debug)]
pub enum SheetError {
    #[error("input file does not exist: {}", path.display())]
    #[diagnostic(
        code(cardsheet::input::missing),
        help("pass the path of a text file with one card field per line")
    )]
    MissingInput { path: PathBuf },

    #[error("background image does not exist: {}", path.display())]
    #[diagnostic(
        code(cardsheet::background::missing),
        help("place a background image next to the executable or pass --background")
    )]
    MissingBackground { path: PathBuf },

    #[error("failed to read {}", path.display())]
    #[diagnostic(code(cardsheet::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(cardsheet::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode background image {}: {message}", path.display())]
    #[diagnostic(code(cardsheet::background::decode))]
    ImageDecode { path: PathBuf, message: String },

    #[error("cannot load font {}: {message}", path.display())]
    #[diagnostic(code(cardsheet::font::load))]
    FontLoad { path: PathBuf, message: String },

    #[error("PDF backend error: {message}")]
    #[diagnostic(code(cardsheet::pdf))]
    Pdf { message: String },

    #[error("invalid configuration for {field}: {reason}")]
    #[diagnostic(code(cardsheet::config::invalid))]
    InvalidConfig { field: &'static str, reason: String },
}

impl SheetError {
    /// Build an `InvalidConfig` from a numeric validation failure
    pub fn numeric(field: &'static str, err: NumericError) -> Self {
        SheetError::InvalidConfig {
            field,
            reason: err.to_string(),
        }
    }
}

pub type Result<T, E = SheetError> = std::result::Result<T, E>;
