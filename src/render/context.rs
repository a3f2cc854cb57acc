//! Sheet configuration and the rendering context built from it

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::errors::{Result, SheetError};
use crate::types::{Angle, Length, Scalar, SizePt};

use super::defaults;
use super::geometry::{Geometry, GridSpec, SizingMode};
use super::types::{Align, Color, FieldStyle, Stroke, TextBox};

/// How card dimensions are chosen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardSize {
    /// Follow the background image's aspect ratio
    MatchBackground,
    /// Constant physical size
    Fixed(SizePt),
}

/// Everything about a sheet that is fixed before any card is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub margin: Length,
    pub gutter: Length,
    pub columns: usize,
    pub rows: usize,
    pub card_size: CardSize,
    pub cut_marks: bool,
    pub upper: FieldStyle,
    pub lower: FieldStyle,
    /// Horizontal padding per side, as a fraction of box width
    pub padding_x: Scalar,
    /// Vertical padding per side, as a fraction of box height
    pub padding_y: Scalar,
    pub max_font_factor: f64,
    pub min_font_size: f64,
    pub cut_tick: Length,
    pub cut_stroke: Stroke,
    /// Shuffle seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            margin: defaults::MARGIN,
            gutter: defaults::GUTTER,
            columns: defaults::COLUMNS,
            rows: defaults::ROWS,
            card_size: CardSize::MatchBackground,
            cut_marks: false,
            upper: FieldStyle {
                text_box: TextBox::from_array(defaults::UPPER_BOX),
                color: Color::BLACK,
                shift: Scalar(defaults::UPPER_SHIFT),
                rotation: Angle::ZERO,
                align: Align::Left,
            },
            lower: FieldStyle {
                text_box: TextBox::from_array(defaults::LOWER_BOX),
                color: Color::WHITE,
                shift: Scalar(defaults::LOWER_SHIFT),
                rotation: Angle::HALF_TURN,
                align: Align::Left,
            },
            padding_x: Scalar(defaults::PADDING_X),
            padding_y: Scalar(defaults::PADDING_Y),
            max_font_factor: defaults::MAX_FONT_FACTOR,
            min_font_size: defaults::MIN_FONT_SIZE,
            cut_tick: defaults::CUT_TICK,
            cut_stroke: Stroke { width: defaults::CUT_STROKE, color: Color::BLACK },
            seed: None,
        }
    }
}

impl SheetConfig {
    /// Constant-size cards with trim marks and no gutter
    pub fn fixed_size() -> Self {
        Self {
            card_size: CardSize::Fixed(defaults::FIXED_CARD),
            gutter: Length::ZERO,
            cut_marks: true,
            ..Self::default()
        }
    }

    /// Reject shapes the geometry arithmetic cannot handle
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(SheetError::InvalidConfig { field: "columns", reason: "must be at least 1".into() });
        }
        if self.rows == 0 {
            return Err(SheetError::InvalidConfig { field: "rows", reason: "must be at least 1".into() });
        }
        Length::try_non_negative(self.margin.raw()).map_err(|e| SheetError::numeric("margin", e))?;
        Length::try_non_negative(self.gutter.raw()).map_err(|e| SheetError::numeric("gutter", e))?;
        Length::try_non_negative(self.cut_tick.raw()).map_err(|e| SheetError::numeric("cut_tick", e))?;
        Length::try_positive(self.min_font_size).map_err(|e| SheetError::numeric("min_font_size", e))?;
        if let CardSize::Fixed(card) = self.card_size {
            Length::try_positive(card.w.raw()).map_err(|e| SheetError::numeric("card width", e))?;
            Length::try_positive(card.h.raw()).map_err(|e| SheetError::numeric("card height", e))?;
        }
        Ok(())
    }

    /// Geometry inputs for a page of `page` size and a background of
    /// `aspect_ratio` (width / height)
    pub fn grid_spec(&self, page: SizePt, aspect_ratio: f64) -> Result<GridSpec> {
        let mode = match self.card_size {
            CardSize::MatchBackground => {
                Length::try_positive(aspect_ratio)
                    .map_err(|e| SheetError::numeric("background aspect ratio", e))?;
                SizingMode::AspectFit { aspect_ratio }
            }
            CardSize::Fixed(card) => SizingMode::FixedSize { card },
        };
        Ok(GridSpec {
            page,
            margin: self.margin,
            gutter: self.gutter,
            columns: self.columns,
            rows: self.rows,
            mode,
        })
    }

    /// The shuffle's random source
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Resolved state shared by every renderer during one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub config: SheetConfig,
    pub geometry: Geometry,
}

impl RenderContext {
    /// Validate `config` and resolve geometry once, up front
    pub fn new(config: SheetConfig, page: SizePt, aspect_ratio: f64) -> Result<Self> {
        config.validate()?;
        let geometry = Geometry::resolve(&config.grid_spec(page, aspect_ratio)?);
        Ok(Self { config, geometry })
    }
}
