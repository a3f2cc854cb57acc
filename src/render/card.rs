//! Card renderer: background plus the two text fields of one card

use crate::errors::Result;
use crate::metrics::{TextMeasure, wrap};
use crate::shuffle::CardText;
use crate::surface::Surface;
use crate::types::{Length, Offset, Point, PtPt, Rect};

use super::context::RenderContext;
use super::fit::fit_text;
use super::geometry::rotate_about;
use super::types::{Align, FieldStyle, FittedText, RenderedCard, TextRun};

/// Padded text area of a field, relative to the card's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextArea {
    /// The unpadded box; rotation happens about its center
    pub bounds: Rect,
    /// Where text starts (after padding and shift)
    pub origin: PtPt,
    pub width: Length,
    pub height: Length,
}

/// Draws cards using the geometry and field styles of a [`RenderContext`]
pub struct CardRenderer<'a> {
    ctx: &'a RenderContext,
}

impl<'a> CardRenderer<'a> {
    pub fn new(ctx: &'a RenderContext) -> Self {
        Self { ctx }
    }

    /// Padded, shifted text area for a field
    pub fn text_area(&self, style: &FieldStyle) -> TextArea {
        let card = self.ctx.geometry.card;
        let bounds = style.text_box.resolve(card);
        let padding_x = bounds.size.w * self.ctx.config.padding_x;
        let padding_y = bounds.size.h * self.ctx.config.padding_y;
        let shift = style.shift * card.w;

        TextArea {
            bounds,
            origin: Point::new(bounds.left() + padding_x + shift, bounds.top() + padding_y),
            width: bounds.size.w - padding_x * 2.0 - shift.abs(),
            height: bounds.size.h - padding_y * 2.0,
        }
    }

    /// Draw the background and both fields of `text` with the card's
    /// top-left corner at `origin`.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        origin: PtPt,
        text: CardText<'_>,
    ) -> Result<RenderedCard> {
        let card = self.ctx.geometry.card;
        surface.draw_image(Rect::new(origin.x, origin.y, card.w, card.h))?;

        let upper = self.render_field(surface, origin, text.top, &self.ctx.config.upper)?;
        let lower = self.render_field(surface, origin, text.bottom, &self.ctx.config.lower)?;
        Ok(RenderedCard { upper, lower })
    }

    /// Fit and draw one field. Empty text draws nothing.
    fn render_field<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        card_origin: PtPt,
        text: &str,
        style: &FieldStyle,
    ) -> Result<Option<FittedText>> {
        if text.is_empty() {
            return Ok(None);
        }
        let (fitted, runs) = self.layout_field(surface, card_origin, text, style);
        for run in &runs {
            surface.draw_text(run)?;
        }
        Ok(Some(fitted))
    }

    /// Choose the font size and place every wrapped line of a field on the page
    pub fn layout_field<S: Surface + ?Sized>(
        &self,
        surface: &S,
        card_origin: PtPt,
        text: &str,
        style: &FieldStyle,
    ) -> (FittedText, Vec<TextRun>) {
        let config = &self.ctx.config;
        let area = self.text_area(style);

        let fitted = fit_text(
            |size| surface.measure_height(text, size, area.width),
            area.height,
            area.height.raw() * config.max_font_factor,
            config.min_font_size,
        );

        let metrics = surface.metrics();
        let to_page = Offset::new(card_origin.x, card_origin.y);
        let center = area.bounds.center() + to_page;
        let line_height = metrics.line_height(fitted.size);
        let ascent = metrics.ascent(fitted.size);
        let top = area.origin.y + (area.height - fitted.measured_height) / 2.0;

        let runs = wrap(text, area.width, fitted.size, metrics)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let slack = area.width - metrics.advance(&line, fitted.size);
                let dx = match style.align {
                    Align::Left => Length::ZERO,
                    Align::Center => slack / 2.0,
                    Align::Right => slack,
                };
                let baseline = Point::new(
                    area.origin.x + dx,
                    top + line_height * i as f64 + ascent,
                ) + to_page;
                TextRun {
                    text: line,
                    origin: rotate_about(baseline, center, style.rotation),
                    size: fitted.size,
                    color: style.color,
                    rotation: style.rotation,
                }
            })
            .collect();

        (fitted, runs)
    }
}
