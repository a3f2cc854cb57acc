//! A surface that only records what would have been drawn

use crate::errors::Result;
use crate::metrics::FontMetrics;
use crate::render::types::{Stroke, TextRun};
use crate::types::{PtPt, Rect, SizePt};

use super::Surface;

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Image(Rect),
    Text(TextRun),
    Line { from: PtPt, to: PtPt, stroke: Stroke },
}

/// Records drawing calls page by page
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    page: SizePt,
    aspect: f64,
    metrics: FontMetrics,
    pages: Vec<Vec<DrawOp>>,
}

impl RecordingSurface {
    /// A surface with one empty page, a background of the given aspect
    /// ratio and the built-in font
    pub fn new(page: SizePt, aspect: f64) -> Self {
        Self {
            page,
            aspect,
            metrics: FontMetrics::default(),
            pages: vec![Vec::new()],
        }
    }

    pub fn with_metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn pages(&self) -> &[Vec<DrawOp>] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Ops on page `page` (empty for pages that do not exist)
    pub fn ops(&self, page: usize) -> &[DrawOp] {
        self.pages.get(page).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn images(&self, page: usize) -> impl Iterator<Item = &Rect> {
        self.ops(page).iter().filter_map(|op| match op {
            DrawOp::Image(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn text_runs(&self, page: usize) -> impl Iterator<Item = &TextRun> {
        self.ops(page).iter().filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            _ => None,
        })
    }

    pub fn line_count(&self, page: usize) -> usize {
        self.ops(page).iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
    }

    fn current(&mut self) -> &mut Vec<DrawOp> {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }
}

impl Surface for RecordingSurface {
    fn page_size(&self) -> SizePt {
        self.page
    }

    fn background_aspect(&self) -> f64 {
        self.aspect
    }

    fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    fn draw_image(&mut self, rect: Rect) -> Result<()> {
        self.current().push(DrawOp::Image(rect));
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<()> {
        self.current().push(DrawOp::Text(run.clone()));
        Ok(())
    }

    fn stroke_line(&mut self, from: PtPt, to: PtPt, stroke: &Stroke) -> Result<()> {
        self.current().push(DrawOp::Line { from, to, stroke: *stroke });
        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        self.pages.push(Vec::new());
        Ok(())
    }
}
