//! Strongly-typed numeric primitives for cardsheet (zero-cost newtypes).
//!
//! All page geometry is expressed in PDF points (1/72 inch). Physical
//! measurements enter through [`Length::mm`] and never as raw `f64`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Points per millimetre (72 / 25.4).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in PDF points
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length from points (const-friendly, unchecked).
    #[inline]
    pub const fn pt(val: f64) -> Length {
        Length(val)
    }

    /// Create a Length from millimetres.
    #[inline]
    pub const fn mm(val: f64) -> Length {
        Length(val * 72.0 / 25.4)
    }

    /// Create a Length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a strictly positive Length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_non_negative(val)?;
        if len.0 == 0.0 {
            Err(NumericError::Zero)
        } else {
            Ok(len)
        }
    }

    /// Create a non-negative Length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_new(val)?;
        if len.0 < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }

    /// Convert back to millimetres (for the PDF backend's `Mm` unit).
    #[inline]
    pub fn to_mm(self) -> f64 {
        self.0 / PT_PER_MM
    }

    /// Get the absolute value
    #[inline]
    pub fn abs(self) -> Length {
        Length(self.0.abs())
    }

    /// Get the minimum of two lengths
    #[inline]
    pub fn min(self, other: Length) -> Length {
        Length(self.0.min(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

impl Neg for Length {
    type Output = Length;
    fn neg(self) -> Length { Length(-self.0) }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// Unitless scalar (for fractions of a card, ratios, etc.)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar(pub f64);

/// Scalar * Length = Length (scaling a length)
impl Mul<Length> for Scalar {
    type Output = Length;
    fn mul(self, rhs: Length) -> Length {
        Length(self.0 * rhs.0)
    }
}

/// Length * Scalar = Length (scaling a length)
impl Mul<Scalar> for Length {
    type Output = Length;
    fn mul(self, rhs: Scalar) -> Length {
        Length(self.0 * rhs.0)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);
    pub const HALF_TURN: Angle = Angle(180.0);

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self { Point { x, y } }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size<T> {
    pub w: T,
    pub h: T,
}

impl<T> Size<T> {
    pub fn new(w: T, h: T) -> Self { Size { w, h } }
}

/// A displacement/offset vector (not an absolute position)
/// Use this for translations; Point + Offset = Point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset<T> {
    pub dx: T,
    pub dy: T,
}

impl<T> Offset<T> {
    pub fn new(dx: T, dy: T) -> Self {
        Offset { dx, dy }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size (y grows downward)
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub origin: PtPt,
    pub size: Size<Length>,
}

impl Rect {
    pub fn new(x: Length, y: Length, w: Length, h: Length) -> Self {
        Rect { origin: Point::new(x, y), size: Size::new(w, h) }
    }

    pub fn left(&self) -> Length { self.origin.x }
    pub fn top(&self) -> Length { self.origin.y }
    pub fn right(&self) -> Length { self.origin.x + self.size.w }
    pub fn bottom(&self) -> Length { self.origin.y + self.size.h }

    /// Get the center point
    pub fn center(&self) -> PtPt {
        Point {
            x: self.origin.x + self.size.w / 2.0,
            y: self.origin.y + self.size.h / 2.0,
        }
    }
}

/// Add an offset to a point to get a new point
impl Add<Offset<Length>> for Point<Length> {
    type Output = Point<Length>;
    fn add(self, rhs: Offset<Length>) -> Point<Length> {
        Point {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

/// Subtract two points to get an offset
impl Sub<Point<Length>> for Point<Length> {
    type Output = Offset<Length>;
    fn sub(self, rhs: Point<Length>) -> Offset<Length> {
        Offset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

/// Convenient aliases
pub type PtPt = Point<Length>;
pub type SizePt = Size<Length>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Length tests ====================

    #[test]
    fn length_try_new_valid() {
        assert!(Length::try_new(1.0).is_ok());
        assert!(Length::try_new(0.0).is_ok());
        assert!(Length::try_new(-1.0).is_ok());
    }

    #[test]
    fn length_try_new_rejects_nan() {
        assert_eq!(Length::try_new(f64::NAN), Err(NumericError::NaN));
    }

    #[test]
    fn length_try_new_rejects_infinity() {
        assert_eq!(Length::try_new(f64::INFINITY), Err(NumericError::Infinite));
        assert_eq!(Length::try_new(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn length_try_positive_rejects_zero_and_negative() {
        assert_eq!(Length::try_positive(0.0), Err(NumericError::Zero));
        assert_eq!(Length::try_positive(-2.0), Err(NumericError::Negative));
        assert!(Length::try_positive(0.5).is_ok());
    }

    #[test]
    fn length_from_mm() {
        // 25.4mm is exactly one inch
        assert!((Length::mm(25.4).raw() - 72.0).abs() < 1e-9);
        assert!((Length::mm(10.0).to_mm() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn length_arithmetic() {
        let a = Length(3.0);
        let b = Length(2.0);

        assert_eq!(a + b, Length(5.0));
        assert_eq!(a - b, Length(1.0));
        assert_eq!(a * 2.0, Length(6.0));
        assert_eq!(a / 2.0, Length(1.5));
        assert_eq!(-a, Length(-3.0));
    }

    #[test]
    fn length_min_and_abs() {
        assert_eq!(Length(3.0).min(Length(5.0)), Length(3.0));
        assert_eq!(Length(-2.5).abs(), Length(2.5));
    }

    #[test]
    fn scalar_mul_length() {
        let s = Scalar(2.0);
        let l = Length(3.0);
        assert_eq!(s * l, Length(6.0));
        assert_eq!(l * s, Length(6.0));
    }

    // ==================== Point/Offset/Rect tests ====================

    #[test]
    fn point_plus_offset_gives_point() {
        let p = Point::new(Length(1.0), Length(2.0));
        let o = Offset::new(Length(3.0), Length(4.0));
        let result = p + o;
        assert_eq!(result.x, Length(4.0));
        assert_eq!(result.y, Length(6.0));
    }

    #[test]
    fn point_minus_point_gives_offset() {
        let p1 = Point::new(Length(5.0), Length(7.0));
        let p2 = Point::new(Length(2.0), Length(3.0));
        let offset = p1 - p2;
        assert_eq!(offset.dx, Length(3.0));
        assert_eq!(offset.dy, Length(4.0));
    }

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(Length(10.0), Length(20.0), Length(4.0), Length(6.0));
        assert_eq!(r.right(), Length(14.0));
        assert_eq!(r.bottom(), Length(26.0));
        assert_eq!(r.center(), Point::new(Length(12.0), Length(23.0)));
    }
}
