//! Card sheet layout
//!
//! This module is organized into submodules:
//! - `defaults`: Fixed sizes, boxes and font limits
//! - `types`: Colors, text boxes, styles and the layout results
//! - `context`: `SheetConfig` and the `RenderContext` shared by the renderers
//! - `geometry`: Card size, grid placement and the rotation transform
//! - `fit`: Font size search
//! - `card`: One card's background and text fields
//! - `cutmarks`: Trim guides
//!
//! [`render_sheet`] ties them together: shuffle, pair, then tile cards onto
//! as many pages as needed.

pub mod card;
pub mod context;
pub mod cutmarks;
pub mod defaults;
pub mod fit;
pub mod geometry;
pub mod types;

// Re-export commonly used items
pub use context::{CardSize, RenderContext, SheetConfig};
pub use geometry::{Geometry, GridSpec, SizingMode};
pub use types::*;

use rand::Rng;

use crate::errors::Result;
use crate::shuffle::{CardText, cards, shuffle};
use crate::surface::Surface;

use card::CardRenderer;
use cutmarks::CutMarkRenderer;

/// Tiles cards row-major onto pages of a fixed grid
pub struct PageComposer<'a> {
    ctx: &'a RenderContext,
}

impl<'a> PageComposer<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    /// Place every card, starting a new page whenever the grid is full.
    ///
    /// The surface must already be on a fresh first page. Cut marks, when
    /// enabled, are drawn after each page's cards, the last page included.
    pub fn compose<'t, S, I>(&self, surface: &mut S, cards: I) -> Result<Vec<PlacedCard>>
    where
        S: Surface + ?Sized,
        I: IntoIterator<Item = CardText<'t>>,
    {
        let geometry = &self.ctx.geometry;
        let per_page = geometry.cards_per_page();
        let renderer = CardRenderer::new(self.ctx);
        let mut placements = Vec::new();

        for (index, text) in cards.into_iter().enumerate() {
            let page = index / per_page;
            let slot = index % per_page;
            if slot == 0 && page > 0 {
                self.finish_page(surface, page - 1)?;
                surface.new_page()?;
            }

            let (column, row) = geometry.cell(slot);
            let origin = geometry.cell_origin(column, row);
            let rendered = renderer.render(surface, origin, text)?;
            placements.push(PlacedCard { index, page, column, row, origin, rendered });
        }

        if let Some(last) = placements.last() {
            self.finish_page(surface, last.page)?;
        }
        Ok(placements)
    }

    fn finish_page<S: Surface + ?Sized>(&self, surface: &mut S, _page: usize) -> Result<()> {
        if self.ctx.config.cut_marks {
            let _ticks = CutMarkRenderer::new(self.ctx).render(surface)?;
            crate::log::debug!(page = _page, ticks = _ticks, "drew cut marks");
        }
        crate::log::debug!(page = _page, "page complete");
        Ok(())
    }
}

/// Lay out a whole sheet onto `surface`.
///
/// `lines` are shuffled with `rng`, then consecutive pairs become the upper
/// and lower text of each card. Geometry is resolved once from the surface's
/// page size and background aspect ratio.
pub fn render_sheet<S, R>(
    mut lines: Vec<String>,
    config: SheetConfig,
    surface: &mut S,
    rng: &mut R,
) -> Result<SheetSummary>
where
    S: Surface + ?Sized,
    R: Rng,
{
    let ctx = RenderContext::new(config, surface.page_size(), surface.background_aspect())?;
    shuffle(&mut lines, rng);

    let cards = cards(&lines);
    let count = cards.len();
    crate::log::debug!(lines = lines.len(), cards = count, "composing sheet");

    let placements = PageComposer::new(&ctx).compose(surface, cards)?;

    Ok(SheetSummary {
        cards: count,
        pages: ctx.geometry.page_count(count).max(1),
        geometry: ctx.geometry,
        placements,
    })
}
