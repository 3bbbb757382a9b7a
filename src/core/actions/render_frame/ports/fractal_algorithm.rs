use crate::core::data::complex::Complex;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, point: Complex) -> Result<Self::Success, Self::Failure>;
}
