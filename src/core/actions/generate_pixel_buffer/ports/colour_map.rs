use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::errors::ColourMapError;

pub trait ColourMap: Send + Sync {
    fn map(&self, count: u32) -> Result<Colour, ColourMapError>;

    fn display_name(&self) -> &str;
}

impl ColourMap for Box<dyn ColourMap> {
    fn map(&self, count: u32) -> Result<Colour, ColourMapError> {
        (**self).map(count)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
