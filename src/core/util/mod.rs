pub mod sample_grid;
