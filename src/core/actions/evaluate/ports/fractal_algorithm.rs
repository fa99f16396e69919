use crate::core::data::complex::Complex;

/// Per-sample computation plugged into the grid generators.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, c: Complex) -> Self::Output;
}
