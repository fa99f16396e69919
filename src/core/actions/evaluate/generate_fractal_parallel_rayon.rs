use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_SAMPLES, CancelToken, Cancelled};
use crate::core::actions::evaluate::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::util::sample_grid::SampleGrid;

/// Generates the grid in parallel using rayon's work-stealing scheduler,
/// one task per row.
///
/// Each sample depends only on its own coordinates, so the result is
/// identical to [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg>(grid: SampleGrid, algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    let width = grid.width();

    let rows: Vec<Vec<Alg::Output>> = (0..grid.height())
        .into_par_iter()
        .map(|row| {
            (0..width)
                .map(|col| algorithm.compute(grid.point(row, col)))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}

/// Like [`generate_fractal_parallel_rayon`], but polls `cancel` at the start
/// of each row and every [`CANCEL_CHECK_INTERVAL_SAMPLES`] samples within a
/// row, aborting the whole generation once it reports cancellation.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    grid: SampleGrid,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Output>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
    C: CancelToken,
{
    let width = grid.width();

    let rows: Result<Vec<Vec<Alg::Output>>, Cancelled> = (0..grid.height())
        .into_par_iter()
        .map(|row| {
            let mut samples = Vec::with_capacity(width as usize);

            for col in 0..width {
                if col as usize % CANCEL_CHECK_INTERVAL_SAMPLES == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                samples.push(algorithm.compute(grid.point(row, col)));
            }

            Ok(samples)
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}
