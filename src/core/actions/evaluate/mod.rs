#[allow(clippy::module_inception)]
pub mod evaluate;
pub mod generate_fractal_parallel_rayon;
pub mod generate_fractal_serial;
pub mod ports;
