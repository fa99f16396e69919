use std::path::Path;

use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::data::escape_grid::EscapeGrid;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to colour escape grid: {0}")]
    Colour(#[from] GeneratePixelBufferError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Hands a finished escape grid to something that persists or displays it.
pub trait FilePresenterPort {
    fn present(&self, grid: &EscapeGrid, filepath: &Path) -> Result<(), PresentError>;
}
