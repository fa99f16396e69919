use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::fractals::mandelbrot::colour_maps::errors::ColourMapError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(#[from] ColourMapError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Maps every escape count of `grid` to a colour, keeping the grid's
/// row-major layout.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    grid: &EscapeGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer = Vec::with_capacity(grid.counts().len() * 3);

    for &count in grid.counts() {
        let Colour { r, g, b } = mapper.map(count)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(grid.width(), grid.height(), buffer)?)
}
