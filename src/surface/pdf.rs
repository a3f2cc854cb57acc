//! PDF output via printpdf
//!
//! Page coordinates are flipped here: printpdf measures y upward from the
//! bottom of the page.
//!
//! printpdf 0.7 has no public way to reference one image XObject from many
//! placements, so every card embeds its own copy of the background. Output
//! grows by roughly one decoded background per card; release builds of
//! printpdf Flate-compress the copies, debug builds store them raw.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

use image::{Rgba, RgbImage};
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Pt, Px, Rgb, TextMatrix,
};

use crate::errors::{Result, SheetError};
use crate::metrics::FontMetrics;
use crate::render::types::{Color, Stroke, TextRun};
use crate::types::{Length, PtPt, Rect, SizePt};

use super::Surface;

const LAYER: &str = "Cards";

/// The card background, decoded once and flattened onto white
#[derive(Debug, Clone)]
pub struct Background {
    pixels: Arc<RgbImage>,
}

impl Background {
    /// Load and decode the image at `path`. A missing file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SheetError::MissingBackground { path: path.to_path_buf() });
        }
        let decoded = image::open(path).map_err(|e| SheetError::ImageDecode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(Self::from_rgba(&decoded.to_rgba8()))
    }

    fn from_rgba(rgba: &image::RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        let mut pixels = RgbImage::new(width, height);
        for (x, y, pixel) in rgba.enumerate_pixels() {
            let Rgba([r, g, b, a]) = *pixel;
            let alpha = a as f32 / 255.0;
            let over_white = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)) as u8;
            pixels.put_pixel(x, y, image::Rgb([over_white(r), over_white(g), over_white(b)]));
        }
        Self { pixels: Arc::new(pixels) }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Pixel width / height
    pub fn aspect_ratio(&self) -> f64 {
        let (w, h) = self.dimensions();
        w as f64 / h as f64
    }

    /// A fresh XObject for one placement; printpdf takes ownership of the
    /// pixel buffer, so each placement gets its own copy.
    fn xobject(&self) -> ImageXObject {
        let (width, height) = self.dimensions();
        ImageXObject {
            width: Px(width as usize),
            height: Px(height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: self.pixels.as_raw().to_vec(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        }
    }
}

/// A multi-page PDF being written
pub struct PdfSurface {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    metrics: FontMetrics,
    background: Background,
    page: SizePt,
}

fn mm(len: Length) -> Mm {
    Mm(len.to_mm() as f32)
}

fn pdf_color(color: Color) -> printpdf::Color {
    printpdf::Color::Rgb(Rgb::new(color.r as f32, color.g as f32, color.b as f32, None))
}

impl PdfSurface {
    /// Open a document with one empty page. Text uses the TrueType face in
    /// `metrics` when there is one, Helvetica otherwise.
    pub fn new(title: &str, page: SizePt, background: Background, metrics: FontMetrics) -> Result<Self> {
        let (doc, page_index, layer_index) = PdfDocument::new(title, mm(page.w), mm(page.h), LAYER);
        let layer = doc.get_page(page_index).get_layer(layer_index);

        let font = match &metrics {
            FontMetrics::TrueType(tt) => doc.add_external_font(tt.bytes()).map_err(|e| SheetError::FontLoad {
                path: tt.path().to_path_buf(),
                message: e.to_string(),
            })?,
            FontMetrics::Builtin(_) => doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| SheetError::Pdf { message: e.to_string() })?,
        };

        Ok(Self { doc, layer, font, metrics, background, page })
    }

    /// Flip a page point into printpdf's bottom-up space
    fn flip(&self, p: PtPt) -> (Length, Length) {
        (p.x, self.page.h - p.y)
    }

    /// Write the finished document to `path`
    pub fn finish(self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| SheetError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| SheetError::Pdf { message: e.to_string() })
    }
}

impl Surface for PdfSurface {
    fn page_size(&self) -> SizePt {
        self.page
    }

    fn background_aspect(&self) -> f64 {
        self.background.aspect_ratio()
    }

    fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    fn draw_image(&mut self, rect: Rect) -> Result<()> {
        let (px_w, px_h) = self.background.dimensions();
        // dpi that makes the image exactly rect.w wide
        let dpi = px_w as f64 * 72.0 / rect.size.w.raw();
        let natural_h = px_h as f64 * 72.0 / dpi;
        let (x, bottom) = self.flip(rect.origin);
        let y = bottom - rect.size.h;

        Image::from(self.background.xobject()).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(mm(x)),
                translate_y: Some(mm(y)),
                dpi: Some(dpi as f32),
                scale_y: Some((rect.size.h.raw() / natural_h) as f32),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn draw_text(&mut self, run: &TextRun) -> Result<()> {
        let (x, y) = self.flip(run.origin);
        self.layer.begin_text_section();
        self.layer.set_font(&self.font, run.size as f32);
        self.layer.set_fill_color(pdf_color(run.color));
        self.layer.set_text_matrix(TextMatrix::TranslateRotate(
            Pt(x.raw() as f32),
            Pt(y.raw() as f32),
            run.rotation.0 as f32,
        ));
        self.layer.write_text(run.text.clone(), &self.font);
        self.layer.end_text_section();
        Ok(())
    }

    fn stroke_line(&mut self, from: PtPt, to: PtPt, stroke: &Stroke) -> Result<()> {
        let (x1, y1) = self.flip(from);
        let (x2, y2) = self.flip(to);
        self.layer.set_outline_color(pdf_color(stroke.color));
        self.layer.set_outline_thickness(stroke.width.raw() as f32);
        self.layer.add_line(printpdf::Line {
            points: vec![
                (printpdf::Point::new(mm(x1), mm(y1)), false),
                (printpdf::Point::new(mm(x2), mm(y2)), false),
            ],
            is_closed: false,
        });
        Ok(())
    }

    fn new_page(&mut self) -> Result<()> {
        let (page, layer) = self.doc.add_page(mm(self.page.w), mm(self.page.h), LAYER);
        self.layer = self.doc.get_page(page).get_layer(layer);
        Ok(())
    }
}
