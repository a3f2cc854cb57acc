//! Sheet geometry: card size, grid placement and the text rotation transform

use glam::{DVec2, dvec2};

use crate::types::{Angle, Length, Point, PtPt, Rect, Size, SizePt};

/// How the card size is chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingMode {
    /// Card aspect follows the background image (width / height); the card
    /// is as large as the margins, gutters and grid allow.
    AspectFit { aspect_ratio: f64 },
    /// Constant card size, no gutter, grid centered on the whole page.
    FixedSize { card: SizePt },
}

/// Resolved sheet geometry, computed once per sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub card: SizePt,
    /// Top-left corner of the grid on the page
    pub offset: PtPt,
    pub columns: usize,
    pub rows: usize,
    pub gutter: Length,
}

/// Inputs to [`Geometry::resolve`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub page: SizePt,
    pub margin: Length,
    pub gutter: Length,
    pub columns: usize,
    pub rows: usize,
    pub mode: SizingMode,
}

impl Geometry {
    /// Compute card size and grid offset. Pure arithmetic: callers guarantee
    /// `columns, rows >= 1` and a positive aspect ratio.
    pub fn resolve(spec: &GridSpec) -> Geometry {
        let columns = spec.columns as f64;
        let rows = spec.rows as f64;

        let geometry = match spec.mode {
            SizingMode::AspectFit { aspect_ratio } => {
                let available = Size::new(
                    spec.page.w - spec.margin * 2.0,
                    spec.page.h - spec.margin * 2.0,
                );
                let by_width = (available.w - spec.gutter * (columns - 1.0)) / columns;
                let by_height = (available.h - spec.gutter * (rows - 1.0)) / rows * aspect_ratio;
                let width = by_width.min(by_height);
                let card = Size::new(width, width / aspect_ratio);

                let mut geometry = Geometry {
                    card,
                    offset: Point::new(Length::ZERO, Length::ZERO),
                    columns: spec.columns,
                    rows: spec.rows,
                    gutter: spec.gutter,
                };
                let total = geometry.grid_size();
                geometry.offset = Point::new(
                    spec.margin + (available.w - total.w) / 2.0,
                    spec.margin + (available.h - total.h) / 2.0,
                );
                geometry
            }
            SizingMode::FixedSize { card } => {
                let mut geometry = Geometry {
                    card,
                    offset: Point::new(Length::ZERO, Length::ZERO),
                    columns: spec.columns,
                    rows: spec.rows,
                    gutter: Length::ZERO,
                };
                let total = geometry.grid_size();
                geometry.offset = Point::new(
                    (spec.page.w - total.w) / 2.0,
                    (spec.page.h - total.h) / 2.0,
                );
                geometry
            }
        };

        crate::log::debug!(
            card_w = %geometry.card.w,
            card_h = %geometry.card.h,
            offset_x = %geometry.offset.x,
            offset_y = %geometry.offset.y,
            "resolved sheet geometry"
        );
        geometry
    }

    pub fn cards_per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Pages needed for `cards` cards
    pub fn page_count(&self, cards: usize) -> usize {
        cards.div_ceil(self.cards_per_page())
    }

    /// Total extent of the grid including inner gutters
    pub fn grid_size(&self) -> SizePt {
        Size::new(
            self.card.w * self.columns as f64 + self.gutter * (self.columns as f64 - 1.0),
            self.card.h * self.rows as f64 + self.gutter * (self.rows as f64 - 1.0),
        )
    }

    pub fn grid_rect(&self) -> Rect {
        let size = self.grid_size();
        Rect::new(self.offset.x, self.offset.y, size.w, size.h)
    }

    /// Row-major cell of the `slot`-th card on a page
    pub fn cell(&self, slot: usize) -> (usize, usize) {
        (slot % self.columns, slot / self.columns)
    }

    /// Top-left corner of the card at `column`, `row`
    pub fn cell_origin(&self, column: usize, row: usize) -> PtPt {
        Point::new(
            self.offset.x + (self.card.w + self.gutter) * column as f64,
            self.offset.y + (self.card.h + self.gutter) * row as f64,
        )
    }
}

fn to_vec(p: PtPt) -> DVec2 {
    // page space is y-down; work in y-up so positive angles turn counter-clockwise
    dvec2(p.x.raw(), -p.y.raw())
}

fn from_vec(v: DVec2) -> PtPt {
    Point::new(Length(v.x), Length(-v.y))
}

/// Rotate `p` about `center` by `angle` (counter-clockwise as seen on the page)
pub fn rotate_about(p: PtPt, center: PtPt, angle: Angle) -> PtPt {
    if angle.is_zero() {
        return p;
    }
    let c = to_vec(center);
    let rotated = DVec2::from_angle(angle.to_radians()).rotate(to_vec(p) - c);
    from_vec(c + rotated)
}
