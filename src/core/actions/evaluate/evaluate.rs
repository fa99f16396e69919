use std::num::NonZeroU32;

use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::evaluate::generate_fractal_parallel_rayon::{
    generate_fractal_parallel_rayon, generate_fractal_parallel_rayon_cancelable,
};
use crate::core::actions::evaluate::generate_fractal_serial::generate_fractal_serial;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::viewport::{Bounds, Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::sample_grid::SampleGrid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    #[error("dimensions must be positive: {width}x{height}, max_iter {max_iter}")]
    InvalidDimension {
        width: u32,
        height: u32,
        max_iter: u32,
    },
    #[error("invalid viewport: {0}")]
    InvalidViewport(#[from] ViewportError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

struct Evaluation {
    grid: SampleGrid,
    algorithm: MandelbrotAlgorithm,
}

impl Evaluation {
    fn prepare(
        bounds: Bounds,
        width: u32,
        height: u32,
        max_iter: u32,
    ) -> Result<Self, EvaluateError> {
        let budget = NonZeroU32::new(max_iter).filter(|_| width > 0 && height > 0).ok_or(
            EvaluateError::InvalidDimension {
                width,
                height,
                max_iter,
            },
        )?;
        let viewport = Viewport::try_from(bounds)?;

        Ok(Self {
            grid: SampleGrid::new(viewport, width, height),
            algorithm: MandelbrotAlgorithm::new(budget),
        })
    }

    fn into_grid(self, counts: Vec<u32>) -> EscapeGrid {
        EscapeGrid::from_evaluation(
            self.grid.width(),
            self.grid.height(),
            self.algorithm.max_iter(),
            counts,
        )
    }
}

/// Samples `height × width` points of `viewport` and records the escape
/// count of each, in row-major order. Rows are computed in parallel.
///
/// Dimensions are checked before the viewport, and both before any sample is
/// computed. A `Viewport` passes the viewport check by construction; raw
/// [`Bounds`] are checked here.
pub fn evaluate(
    viewport: impl Into<Bounds>,
    width: u32,
    height: u32,
    max_iter: u32,
) -> Result<EscapeGrid, EvaluateError> {
    let evaluation = Evaluation::prepare(viewport.into(), width, height, max_iter)?;
    let counts = generate_fractal_parallel_rayon(evaluation.grid, &evaluation.algorithm);

    Ok(evaluation.into_grid(counts))
}

/// Single-threaded [`evaluate`]. Produces a bit-identical grid.
pub fn evaluate_serial(
    viewport: impl Into<Bounds>,
    width: u32,
    height: u32,
    max_iter: u32,
) -> Result<EscapeGrid, EvaluateError> {
    let evaluation = Evaluation::prepare(viewport.into(), width, height, max_iter)?;
    let counts = generate_fractal_serial(evaluation.grid, &evaluation.algorithm);

    Ok(evaluation.into_grid(counts))
}

/// [`evaluate`] that gives up with [`EvaluateError::Cancelled`] once `cancel`
/// fires. A run that is not cancelled returns the same grid as `evaluate`.
pub fn evaluate_cancelable<C: CancelToken>(
    viewport: impl Into<Bounds>,
    width: u32,
    height: u32,
    max_iter: u32,
    cancel: &C,
) -> Result<EscapeGrid, EvaluateError> {
    let evaluation = Evaluation::prepare(viewport.into(), width, height, max_iter)?;
    let counts =
        generate_fractal_parallel_rayon_cancelable(evaluation.grid, &evaluation.algorithm, cancel)?;

    Ok(evaluation.into_grid(counts))
}
