use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::{EscapeTimeKernel, EscapeTimeKernelError};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::fractal_variant::FractalVariant;
use std::error::Error;
use std::fmt;

pub const DEFAULT_PIXEL_WIDTH: u32 = 1000;
pub const DEFAULT_PIXEL_HEIGHT: u32 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    PixelRect(PixelRectError),
    InitialBounds(ComplexRectError),
    MissingJuliaConstant,
    Kernel(EscapeTimeKernelError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "invalid output size: {}", err),
            Self::InitialBounds(err) => write!(f, "invalid initial bounds: {}", err),
            Self::MissingJuliaConstant => write!(f, "a Julia fractal needs a constant"),
            Self::Kernel(err) => write!(f, "invalid fractal parameters: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::InitialBounds(err) => Some(err),
            Self::Kernel(err) => Some(err),
            Self::MissingJuliaConstant => None,
        }
    }
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<ComplexRectError> for ConfigError {
    fn from(err: ComplexRectError) -> Self {
        Self::InitialBounds(err)
    }
}

impl From<EscapeTimeKernelError> for ConfigError {
    fn from(err: EscapeTimeKernelError) -> Self {
        Self::Kernel(err)
    }
}

/// Unvalidated real and imaginary bounds of the first view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneBounds {
    pub min_real: f64,
    pub max_real: f64,
    pub min_imag: f64,
    pub max_imag: f64,
}

impl Default for PlaneBounds {
    fn default() -> Self {
        Self {
            min_real: -2.0,
            max_real: 2.0,
            min_imag: -2.0,
            max_imag: 2.0,
        }
    }
}

impl PlaneBounds {
    pub fn to_complex_rect(self) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::new(
            Complex::new(self.min_real, self.min_imag),
            Complex::new(self.max_real, self.max_imag),
        )
    }
}

/// Construction-time options of a fractal session.
///
/// Nothing here is defaulted silently once set: [`FractalConfig::validate`]
/// rejects a zero size, bad bounds and a Julia variant without a usable
/// constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalConfig {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub variant: FractalKinds,
    /// Only read when `variant` is Julia.
    pub julia_constant: Option<Complex>,
    pub initial_bounds: PlaneBounds,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            pixel_width: DEFAULT_PIXEL_WIDTH,
            pixel_height: DEFAULT_PIXEL_HEIGHT,
            variant: FractalKinds::Mandelbrot,
            julia_constant: None,
            initial_bounds: PlaneBounds::default(),
        }
    }
}

impl FractalConfig {
    #[must_use]
    pub fn julia(constant: Complex) -> Self {
        Self {
            variant: FractalKinds::Julia,
            julia_constant: Some(constant),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.viewport()?;
        self.kernel()?;

        Ok(())
    }

    pub fn viewport(&self) -> Result<Viewport, ConfigError> {
        let pixel_rect = PixelRect::new(self.pixel_width, self.pixel_height)?;
        let region = self.initial_bounds.to_complex_rect()?;

        Ok(Viewport::new(region, pixel_rect))
    }

    pub fn fractal_variant(&self) -> Result<FractalVariant, ConfigError> {
        match self.variant {
            FractalKinds::Mandelbrot => Ok(FractalVariant::Mandelbrot),
            FractalKinds::Julia => self
                .julia_constant
                .map(|constant| FractalVariant::Julia { constant })
                .ok_or(ConfigError::MissingJuliaConstant),
        }
    }

    pub fn kernel(&self) -> Result<EscapeTimeKernel, ConfigError> {
        Ok(EscapeTimeKernel::new(self.fractal_variant()?)?)
    }
}
