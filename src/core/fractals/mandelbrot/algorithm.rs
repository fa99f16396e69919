use std::num::NonZeroU32;

use crate::core::actions::evaluate::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;

// |z| < 2, compared squared
const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts the iterations of `z ← z² + c`, starting from `z = 0`, whose
/// result stays inside the escape radius. Stops at the first result that
/// leaves it, so a point that escapes on step `k + 1` records `k` and a point
/// that never escapes records `max_iter`.
///
/// Overflow needs no special case: an infinite or NaN `z` fails the
/// comparison and counts as escaped.
#[must_use]
pub fn escape_count(c: Complex, max_iter: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iter {
        z = z.square_add(c);

        if !(z.magnitude_squared() < ESCAPE_RADIUS_SQUARED) {
            return iteration;
        }
    }

    max_iter
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iter: NonZeroU32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iter: NonZeroU32) -> Self {
        Self { max_iter }
    }

    #[must_use]
    pub fn max_iter(&self) -> u32 {
        self.max_iter.get()
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = u32;

    fn compute(&self, c: Complex) -> Self::Output {
        escape_count(c, self.max_iter.get())
    }
}
