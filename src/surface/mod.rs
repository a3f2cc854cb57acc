//! Drawing surfaces
//!
//! The layout engine talks to output through [`Surface`]. Coordinates are
//! page points with the origin at the top-left and y growing downward;
//! every call carries its own style, so nothing depends on earlier calls.
//!
//! - `recording`: in-memory op log, used by tests and dry runs
//! - `pdf`: multi-page PDF output via printpdf

pub mod pdf;
pub mod recording;

pub use pdf::{Background, PdfSurface};
pub use recording::{DrawOp, RecordingSurface};

use crate::errors::Result;
use crate::metrics::{FontMetrics, wrapped_height};
use crate::render::types::{Stroke, TextRun};
use crate::types::{Length, PtPt, Rect, SizePt};

/// Drawing primitives the card layout needs
pub trait Surface {
    /// Size of every page
    fn page_size(&self) -> SizePt;

    /// Width / height of the card background
    fn background_aspect(&self) -> f64;

    /// Metrics of the face text is drawn with
    fn metrics(&self) -> &FontMetrics;

    /// Height of `text` wrapped to `width` at `size` points
    fn measure_height(&self, text: &str, size: f64, width: Length) -> Length {
        wrapped_height(text, width, size, self.metrics())
    }

    /// Draw the background image stretched over `rect`
    fn draw_image(&mut self, rect: Rect) -> Result<()>;

    /// Draw one placed line of text
    fn draw_text(&mut self, run: &TextRun) -> Result<()>;

    fn stroke_line(&mut self, from: PtPt, to: PtPt, stroke: &Stroke) -> Result<()>;

    /// Start the next page; drawing continues there
    fn new_page(&mut self) -> Result<()>;
}
