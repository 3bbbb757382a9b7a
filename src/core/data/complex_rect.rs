use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFinite { min: Complex, max: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite { min, max } => {
                write!(
                    f,
                    "complex rect bounds must be finite: real [{}, {}], imag [{}, {}]",
                    min.real, max.real, min.imag, max.imag
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane with strictly ordered bounds.
///
/// `min` holds the smallest real and imaginary parts, `max` the largest. Both
/// axes have a strictly positive extent, which keeps the pixel mapping
/// invertible.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ComplexRectError::NonFinite { min, max });
        }

        let width = max.real - min.real;
        let height = max.imag - min.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    /// Builds a rect from two opposite corners given in any order.
    pub fn from_corners(a: Complex, b: Complex) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex::new(a.real.min(b.real), a.imag.min(b.imag)),
            Complex::new(a.real.max(b.real), a.imag.max(b.imag)),
        )
    }

    pub fn min(&self) -> Complex {
        self.min
    }

    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }

    pub fn center(&self) -> Complex {
        Complex::new(
            (self.min.real + self.max.real) / 2.0,
            (self.min.imag + self.max.imag) / 2.0,
        )
    }

    /// Real extent over imaginary extent.
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.min.real <= point.real
            && self.min.imag <= point.imag
            && self.max.real >= point.real
            && self.max.imag >= point.imag
    }
}

impl fmt::Display for ComplexRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "real [{}, {}] imag [{}, {}]",
            self.min.real, self.max.real, self.min.imag, self.max.imag
        )
    }
}
