//! Trim guides drawn once per page over the card grid

use crate::errors::Result;
use crate::surface::Surface;
use crate::types::{Length, Point, PtPt};

use super::context::RenderContext;
use super::geometry::Geometry;

/// Two cut positions closer than this are the same line
const SAME_LINE: f64 = 1e-6;

/// One straight tick mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub from: PtPt,
    pub to: PtPt,
}

/// Card edges along one axis: every start and end, sorted, shared edges merged
fn cut_lines(start: Length, card: Length, gutter: Length, count: usize) -> Vec<Length> {
    let mut lines: Vec<Length> = (0..count)
        .flat_map(|i| {
            let lo = start + (card + gutter) * i as f64;
            [lo, lo + card]
        })
        .collect();
    lines.sort_by(|a, b| a.raw().total_cmp(&b.raw()));
    lines.dedup_by(|a, b| (a.raw() - b.raw()).abs() < SAME_LINE);
    lines
}

/// Card spans along one axis, for edge midpoints
fn spans(start: Length, card: Length, gutter: Length, count: usize) -> impl Iterator<Item = (Length, Length)> {
    (0..count).map(move |i| {
        let lo = start + (card + gutter) * i as f64;
        (lo, lo + card)
    })
}

/// Tick marks for one page's grid.
///
/// Every intersection of cut lines gets a tick of length `tick` in each of
/// the four axis directions that stays within the grid, so perimeter ticks
/// point inward and nothing is drawn outside. Each card edge on the grid's
/// perimeter also gets an inward tick at its midpoint.
pub fn cut_ticks(geometry: &Geometry, tick: Length) -> Vec<Tick> {
    let card = geometry.card;
    let xs = cut_lines(geometry.offset.x, card.w, geometry.gutter, geometry.columns);
    let ys = cut_lines(geometry.offset.y, card.h, geometry.gutter, geometry.rows);
    let grid = geometry.grid_rect();
    let inside = |p: PtPt| {
        p.x.raw() >= grid.left().raw() - SAME_LINE
            && p.x.raw() <= grid.right().raw() + SAME_LINE
            && p.y.raw() >= grid.top().raw() - SAME_LINE
            && p.y.raw() <= grid.bottom().raw() + SAME_LINE
    };

    let mut ticks = Vec::new();
    for &y in &ys {
        for &x in &xs {
            let from = Point::new(x, y);
            for (dx, dy) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)] {
                let to = Point::new(x + tick * dx, y + tick * dy);
                if inside(to) {
                    ticks.push(Tick { from, to });
                }
            }
        }
    }

    for (lo, hi) in spans(geometry.offset.x, card.w, geometry.gutter, geometry.columns) {
        let mid = (lo + hi) / 2.0;
        for (edge, dir) in [(grid.top(), 1.0), (grid.bottom(), -1.0)] {
            ticks.push(Tick {
                from: Point::new(mid, edge),
                to: Point::new(mid, edge + tick * dir),
            });
        }
    }
    for (lo, hi) in spans(geometry.offset.y, card.h, geometry.gutter, geometry.rows) {
        let mid = (lo + hi) / 2.0;
        for (edge, dir) in [(grid.left(), 1.0), (grid.right(), -1.0)] {
            ticks.push(Tick {
                from: Point::new(edge, mid),
                to: Point::new(edge + tick * dir, mid),
            });
        }
    }

    ticks
}

/// Strokes the trim guides of the current page
pub struct CutMarkRenderer<'a> {
    ctx: &'a RenderContext,
}

impl<'a> CutMarkRenderer<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    /// Draw all ticks; returns how many were stroked
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<usize> {
        let ticks = cut_ticks(&self.ctx.geometry, self.ctx.config.cut_tick);
        for tick in &ticks {
            surface.stroke_line(tick.from, tick.to, &self.ctx.config.cut_stroke)?;
        }
        Ok(ticks.len())
    }
}
