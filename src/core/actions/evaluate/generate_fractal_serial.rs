use crate::core::actions::evaluate::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::util::sample_grid::SampleGrid;

/// Row-major, single-threaded generation. The reference every parallel
/// generator has to agree with.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    grid: SampleGrid,
    algorithm: &Alg,
) -> Vec<Alg::Output> {
    (0..grid.height())
        .flat_map(|row| (0..grid.width()).map(move |col| grid.point(row, col)))
        .map(|c| algorithm.compute(c))
        .collect()
}
