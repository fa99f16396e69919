use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::colour_maps::factory::colour_map_factory;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

/// Colours an escape grid and writes it as a binary PPM image.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {
    colour_map: ColourMapKind,
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new(colour_map: ColourMapKind) -> Self {
        Self { colour_map }
    }

    #[must_use]
    pub fn colour_map(&self) -> ColourMapKind {
        self.colour_map
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, grid: &EscapeGrid, filepath: &Path) -> Result<(), PresentError> {
        let mapper = colour_map_factory(self.colour_map, grid.max_iter());
        let buffer = generate_pixel_buffer(grid, &mapper)?;

        let mut file = BufWriter::new(File::create(filepath)?);
        write_ppm(&mut file, &buffer)?;
        file.flush()?;

        Ok(())
    }
}

fn write_ppm(out: &mut impl Write, buffer: &PixelBuffer) -> std::io::Result<()> {
    // P6: binary RGB, then width, height and max colour value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", buffer.width(), buffer.height())?;
    writeln!(out, "255")?;
    out.write_all(buffer.buffer())
}
