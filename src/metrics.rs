//! Font metrics and word wrapping for text measurement.
//!
//! Layout never asks the PDF backend how wide a string is; both surfaces
//! measure through the same [`FontMetrics`], so a dry run and a real PDF
//! make identical font-size decisions.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use enum_dispatch::enum_dispatch;
use rusttype::{Font, Scale};

use crate::errors::{Result, SheetError};
use crate::types::Length;

/// Helvetica advance widths (1/1000 em) for ASCII 0x20..=0x7E, from the
/// standard Helvetica AFM.
#[rustfmt::skip]
pub const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191,
    333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556,
    556, 556, 278, 278, 584, 584, 584, 556,
   1015, 667, 667, 722, 722, 667, 611, 778,
    722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944,
    667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556,
    556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722,
    500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica advance widths for Latin-1 0xA0..=0xFF (the WinAnsi upper half
/// the builtin font is encoded with).
#[rustfmt::skip]
pub const HELVETICA_LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Width used for characters outside both tables
const FALLBACK_WIDTH: u16 = 556;
/// Helvetica ascender (em)
const HELVETICA_ASCENT: f64 = 0.718;
/// Helvetica line height (em): ascender - descender + line gap
const HELVETICA_LINE_HEIGHT: f64 = 1.156;

/// Measurements a layout needs from a font
#[enum_dispatch]
pub trait TextMeasure {
    /// Advance width of a single-line string at `size` points
    fn advance(&self, text: &str, size: f64) -> Length;

    /// Distance from the top of a line to its baseline
    fn ascent(&self, size: f64) -> Length;

    /// Vertical distance between consecutive baselines
    fn line_height(&self, size: f64) -> Length;
}

/// Metrics of the built-in Helvetica face
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMetrics;

impl TextMeasure for BuiltinMetrics {
    fn advance(&self, text: &str, size: f64) -> Length {
        let units: u32 = text
            .chars()
            .map(|c| match c {
                ' '..='~' => HELVETICA_WIDTHS[(c as usize) - 0x20] as u32,
                '\u{A0}'..='\u{FF}' => HELVETICA_LATIN1_WIDTHS[(c as usize) - 0xA0] as u32,
                _ => FALLBACK_WIDTH as u32,
            })
            .sum();
        Length(units as f64 * size / 1000.0)
    }

    fn ascent(&self, size: f64) -> Length {
        Length(HELVETICA_ASCENT * size)
    }

    fn line_height(&self, size: f64) -> Length {
        Length(HELVETICA_LINE_HEIGHT * size)
    }
}

/// Metrics read from a TrueType file; also keeps the bytes for embedding.
#[derive(Clone)]
pub struct TrueTypeMetrics {
    path: PathBuf,
    bytes: Arc<Vec<u8>>,
    font: Font<'static>,
}

impl TrueTypeMetrics {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| SheetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, bytes)
    }

    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(bytes.clone()).ok_or_else(|| SheetError::FontLoad {
            path: path.to_path_buf(),
            message: "not a TrueType/OpenType font".to_string(),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            bytes: Arc::new(bytes),
            font,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw font file, for embedding into the output document
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for TrueTypeMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeMetrics")
            .field("path", &self.path)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl TrueTypeMetrics {
    /// Font units to points at `size` (size is the em height)
    fn em(&self, size: f64) -> f64 {
        size / self.font.units_per_em() as f64
    }
}

impl TextMeasure for TrueTypeMetrics {
    fn advance(&self, text: &str, size: f64) -> Length {
        // rusttype scales to ascent - descent, not to the em square
        let v = self.font.v_metrics_unscaled();
        let scale = Scale::uniform((self.em(size) * (v.ascent - v.descent) as f64) as f32);
        let width: f32 = text
            .chars()
            .map(|c| self.font.glyph(c).scaled(scale).h_metrics().advance_width)
            .sum();
        Length(width as f64)
    }

    fn ascent(&self, size: f64) -> Length {
        Length(self.font.v_metrics_unscaled().ascent as f64 * self.em(size))
    }

    fn line_height(&self, size: f64) -> Length {
        let v = self.font.v_metrics_unscaled();
        Length((v.ascent - v.descent + v.line_gap) as f64 * self.em(size))
    }
}

/// The face used for card text
#[enum_dispatch(TextMeasure)]
#[derive(Debug, Clone)]
pub enum FontMetrics {
    Builtin(BuiltinMetrics),
    TrueType(TrueTypeMetrics),
}

impl Default for FontMetrics {
    fn default() -> Self {
        FontMetrics::Builtin(BuiltinMetrics)
    }
}

/// System fonts tried after the one shipped next to the executable
pub const SYSTEM_FONT_CANDIDATES: [&str; 3] = [
    "/System/Library/Fonts/Supplemental/PartyLET-plain.ttf",
    "/System/Library/Fonts/Supplemental/Chalkduster.ttf",
    "/System/Library/Fonts/Supplemental/Comic Sans MS.ttf",
];

/// Pick the card face.
///
/// An explicit path must load. Otherwise the first candidate that exists and
/// parses wins; with none, text falls back to the built-in Helvetica.
pub fn discover_font(explicit: Option<&Path>, candidates: &[PathBuf]) -> Result<FontMetrics> {
    if let Some(path) = explicit {
        let metrics = TrueTypeMetrics::load(path)?;
        crate::log::info!(path = %path.display(), "using font");
        return Ok(metrics.into());
    }

    for path in candidates.iter().filter(|p| p.is_file()) {
        match TrueTypeMetrics::load(path) {
            Ok(metrics) => {
                crate::log::info!(path = %path.display(), "using font");
                return Ok(metrics.into());
            }
            Err(_err) => {
                crate::log::warn!(path = %path.display(), error = %_err, "skipping unusable font");
            }
        }
    }

    crate::log::warn!("no custom font found, falling back to Helvetica");
    Ok(FontMetrics::default())
}

/// Greedy word wrap into lines no wider than `width`.
///
/// Words wider than a line are broken between characters. Non-empty input
/// always yields at least one line.
pub fn wrap(text: &str, width: Length, size: f64, metrics: &impl TextMeasure) -> Vec<String> {
    let fits = |s: &str| metrics.advance(s, size) <= width;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() {
            let candidate = format!("{current} {word}");
            if fits(&candidate) {
                current = candidate;
                continue;
            }
            lines.push(std::mem::take(&mut current));
        }

        if fits(word) {
            current = word.to_string();
            continue;
        }

        for c in word.chars() {
            current.push(c);
            if !fits(&current) && current.chars().count() > 1 {
                current.pop();
                lines.push(std::mem::take(&mut current));
                current.push(c);
            }
        }
    }

    if !current.is_empty() || (lines.is_empty() && !text.is_empty()) {
        lines.push(current);
    }
    lines
}

/// Height of `text` wrapped to `width` at `size`
pub fn wrapped_height(text: &str, width: Length, size: f64, metrics: &impl TextMeasure) -> Length {
    let lines = wrap(text, width, size, metrics).len();
    metrics.line_height(size) * lines as f64
}
