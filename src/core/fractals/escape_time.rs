use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_variant::FractalVariant;
use std::error::Error;
use std::fmt;

pub const MAX_ITERATIONS: u32 = 1024;
pub const ESCAPE_RADIUS: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NumericFault {
    NonFiniteInput { c: Complex, z0: Complex },
    NonFiniteOrbit { iteration: u32 },
}

impl fmt::Display for NumericFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteInput { c, z0 } => write!(
                f,
                "non-finite orbit input c = {} + {}i, z0 = {} + {}i",
                c.real, c.imag, z0.real, z0.imag
            ),
            Self::NonFiniteOrbit { iteration } => {
                write!(f, "orbit became non-finite at iteration {}", iteration)
            }
        }
    }
}

impl Error for NumericFault {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EscapeTimeKernelError {
    ZeroMaxIterations,
    InvalidEscapeRadius(f64),
    NonFiniteJuliaConstant(Complex),
}

impl fmt::Display for EscapeTimeKernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::InvalidEscapeRadius(radius) => {
                write!(f, "escape radius must be positive and finite, got {}", radius)
            }
            Self::NonFiniteJuliaConstant(c) => {
                write!(f, "julia constant must be finite, got {} + {}i", c.real, c.imag)
            }
        }
    }
}

impl Error for EscapeTimeKernelError {}

/// Counts the steps of `z <- z*z + c` taken from `z0` before `|z|` reaches
/// `escape_radius`, capped at `max_iterations`.
///
/// A result equal to `max_iterations` means the orbit stayed bounded.
pub fn iterate(
    c: Complex,
    z0: Complex,
    max_iterations: u32,
    escape_radius: f64,
) -> Result<u32, NumericFault> {
    if !c.is_finite() || !z0.is_finite() {
        return Err(NumericFault::NonFiniteInput { c, z0 });
    }

    let mut z = z0;
    let mut iterations = 0;

    while iterations < max_iterations {
        let modulus = z.modulus();

        if modulus.is_nan() {
            return Err(NumericFault::NonFiniteOrbit {
                iteration: iterations,
            });
        }

        if modulus >= escape_radius {
            break;
        }

        z = z * z + c;
        iterations += 1;
    }

    Ok(iterations)
}

/// Escape-time iteration for one fractal variant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeKernel {
    variant: FractalVariant,
    max_iterations: u32,
    escape_radius: f64,
}

impl EscapeTimeKernel {
    pub fn new(variant: FractalVariant) -> Result<Self, EscapeTimeKernelError> {
        Self::with_limits(variant, MAX_ITERATIONS, ESCAPE_RADIUS)
    }

    pub fn with_limits(
        variant: FractalVariant,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, EscapeTimeKernelError> {
        if max_iterations == 0 {
            return Err(EscapeTimeKernelError::ZeroMaxIterations);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(EscapeTimeKernelError::InvalidEscapeRadius(escape_radius));
        }

        if let FractalVariant::Julia { constant } = variant {
            if !constant.is_finite() {
                return Err(EscapeTimeKernelError::NonFiniteJuliaConstant(constant));
            }
        }

        Ok(Self {
            variant,
            max_iterations,
            escape_radius,
        })
    }

    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}

impl FractalAlgorithm for EscapeTimeKernel {
    type Success = u32;
    type Failure = NumericFault;

    fn compute(&self, point: Complex) -> Result<Self::Success, Self::Failure> {
        let (c, z0) = self.variant.seed(point);

        iterate(c, z0, self.max_iterations, self.escape_radius)
    }
}
