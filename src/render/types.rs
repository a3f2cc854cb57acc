//! Core types for card rendering

use crate::types::{Angle, Length, PtPt, Rect, Scalar, SizePt};

use super::geometry::Geometry;

/// RGB color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };
}

/// Horizontal alignment of wrapped lines within the text width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// A box in coordinates relative to the card (unit square scaled by card
/// width and height independently). `x` may be negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub x: Scalar,
    pub y: Scalar,
    pub w: Scalar,
    pub h: Scalar,
}

impl TextBox {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        TextBox { x: Scalar(x), y: Scalar(y), w: Scalar(w), h: Scalar(h) }
    }

    pub const fn from_array(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// Card-relative rectangle for a card of the given size
    pub fn resolve(&self, card: SizePt) -> Rect {
        Rect::new(self.x * card.w, self.y * card.h, self.w * card.w, self.h * card.h)
    }
}

/// How one of the two text fields is placed on a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub text_box: TextBox,
    pub color: Color,
    /// Horizontal shift as a fraction of card width (negative = left)
    pub shift: Scalar,
    /// Rotation about the box's own center
    pub rotation: Angle,
    pub align: Align,
}

/// One line of text, fully placed on the page.
///
/// `origin` is the baseline start in page coordinates (top-left origin,
/// y down) after rotation has been applied; glyphs advance along
/// `rotation` from there.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub origin: PtPt,
    pub size: f64,
    pub color: Color,
    pub rotation: Angle,
}

/// Line stroke style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: Length,
    pub color: Color,
}

/// Result of fitting a text into a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedText {
    pub size: f64,
    pub measured_height: Length,
}

/// What was drawn for one card; `None` means the field was empty
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderedCard {
    pub upper: Option<FittedText>,
    pub lower: Option<FittedText>,
}

/// A card placed on the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedCard {
    /// Index into the card sequence
    pub index: usize,
    /// Zero-based page number
    pub page: usize,
    pub column: usize,
    pub row: usize,
    /// Top-left corner on the page
    pub origin: PtPt,
    pub rendered: RenderedCard,
}

/// Outcome of laying out a whole sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
    pub cards: usize,
    pub pages: usize,
    pub geometry: Geometry,
    pub placements: Vec<PlacedCard>,
}
