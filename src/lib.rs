//! Printable card sheets from a text file.
//!
//! Lines are shuffled, paired into cards (upper and lower text), fitted into
//! fixed boxes over a background image and tiled onto A4 landscape pages,
//! optionally with trim marks.
//!
//! ```no_run
//! use std::path::Path;
//! use cardsheet::{Background, LineSource, PdfSurface, SheetConfig, TextFile, render_sheet};
//!
//! # fn main() -> cardsheet::Result<()> {
//! let lines = TextFile::new("cards.txt").lines()?;
//! let background = Background::load(Path::new("background.png"))?;
//! let config = SheetConfig::default();
//! let mut surface = PdfSurface::new("Cards", cardsheet::render::defaults::PAGE_SIZE, background, Default::default())?;
//! let mut rng = config.rng();
//! render_sheet(lines, config, &mut surface, &mut rng)?;
//! surface.finish(Path::new("cards.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod log;
pub mod metrics;
pub mod render;
pub mod shuffle;
pub mod source;
pub mod surface;
pub mod types;

pub use errors::{Result, SheetError};
pub use metrics::{FontMetrics, discover_font};
pub use render::{CardSize, SheetConfig, SheetSummary, render_sheet};
pub use source::{LineSource, TextFile};
pub use surface::{Background, PdfSurface, RecordingSurface, Surface};
