//! Line source: turns the raw input file into the ordered field sequence.
//!
//! Fields alternate top text / bottom text. Decoding is UTF-8 unless the
//! lossy decode produced a replacement character, in which case the whole
//! buffer is re-read as Latin-1. No BOM handling.

use std::path::PathBuf;

use crate::errors::{Result, SheetError};

/// Anything that can supply the decoded field sequence
pub trait LineSource {
    fn lines(&self) -> Result<Vec<String>>;
}

/// A text file on disk
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineSource for TextFile {
    fn lines(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Err(SheetError::MissingInput { path: self.path.clone() });
        }
        let bytes = std::fs::read(&self.path).map_err(|source| SheetError::Read {
            path: self.path.clone(),
            source,
        })?;
        let lines = split_lines(&decode_text(&bytes));
        crate::log::debug!(path = %self.path.display(), count = lines.len(), "read input lines");
        Ok(lines)
    }
}

impl LineSource for Vec<String> {
    fn lines(&self) -> Result<Vec<String>> {
        Ok(self.clone())
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1 when UTF-8 decoding
/// introduces U+FFFD anywhere in the text.
pub fn decode_text(bytes: &[u8]) -> String {
    let utf8 = String::from_utf8_lossy(bytes);
    if utf8.contains('\u{FFFD}') {
        // Latin-1 maps every byte to the code point of the same value
        bytes.iter().map(|&b| char::from(b)).collect()
    } else {
        utf8.into_owned()
    }
}

/// Split on `\n` or `\r\n`, dropping the single empty element left by a
/// terminating newline. Interior empty lines are kept.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut pieces: Vec<&str> = text.split('\n').collect();
    let last = pieces.len() - 1;
    for piece in &mut pieces[..last] {
        let p = *piece;
        *piece = p.strip_suffix('\r').unwrap_or(p);
    }
    if pieces.last() == Some(&"") {
        pieces.pop();
    }
    pieces.into_iter().map(str::to_owned).collect()
}
