use crate::core::data::complex::Complex;

/// The escape-time families this crate renders.
///
/// Variants differ only in how a plane point seeds the orbit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalVariant {
    #[default]
    Mandelbrot,
    Julia {
        constant: Complex,
    },
}

impl FractalVariant {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    /// Returns `(c, z0)` for the orbit of `point`.
    pub fn seed(self, point: Complex) -> (Complex, Complex) {
        match self {
            Self::Mandelbrot => (point, Complex::ZERO),
            Self::Julia { constant } => (constant, point),
        }
    }
}

impl std::fmt::Display for FractalVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mandelbrot => f.write_str(self.display_name()),
            Self::Julia { constant } => write!(
                f,
                "{} (c = {} + {}i)",
                self.display_name(),
                constant.real,
                constant.imag
            ),
        }
    }
}
