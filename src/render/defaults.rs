//! Default sizes and settings (lengths in points unless noted)

use crate::types::{Length, Size};

/// A4 landscape
pub const PAGE_SIZE: Size<Length> = Size { w: Length::mm(297.0), h: Length::mm(210.0) };
pub const MARGIN: Length = Length::mm(10.0);
pub const GUTTER: Length = Length::mm(6.0);
pub const COLUMNS: usize = 3;
pub const ROWS: usize = 3;

/// Card size for fixed-size mode (landscape card)
pub const FIXED_CARD: Size<Length> = Size { w: Length::mm(88.0), h: Length::mm(63.0) };

/// Upper text box, in fractions of card width/height: x, y, w, h
pub const UPPER_BOX: [f64; 4] = [0.40, 0.14, 0.54, 0.20];
/// Lower text box; x is negative so the box bleeds past the left edge
pub const LOWER_BOX: [f64; 4] = [-0.02, 0.66, 0.54, 0.20];
/// Horizontal text shifts, in fractions of card width
pub const UPPER_SHIFT: f64 = 0.06;
pub const LOWER_SHIFT: f64 = -0.04;

/// Padding as a fraction of the box width (each side)
pub const PADDING_X: f64 = 0.06;
/// Padding as a fraction of the box height (each side)
pub const PADDING_Y: f64 = 0.12;

/// Starting font size is this fraction of the padded box height
pub const MAX_FONT_FACTOR: f64 = 0.75;
pub const MIN_FONT_SIZE: f64 = 6.0;

pub const CUT_TICK: Length = Length::mm(4.0);
pub const CUT_STROKE: Length = Length::pt(0.5);
