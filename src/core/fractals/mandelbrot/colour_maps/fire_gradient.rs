use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::errors::{ColourMapError, check_count};
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

/// Black → red → orange → yellow → white, with bounded points painted black.
#[derive(Debug)]
pub struct FireGradient {
    max_iter: u32,
}

impl FireGradient {
    #[must_use]
    pub fn new(max_iter: u32) -> Self {
        Self { max_iter }
    }
}

impl ColourMap for FireGradient {
    fn map(&self, count: u32) -> Result<Colour, ColourMapError> {
        check_count(count, self.max_iter)?;

        if count == self.max_iter {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(count) / f64::from(self.max_iter);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Ok(Colour { r, g, b })
    }

    fn display_name(&self) -> &str {
        ColourMapKind::FireGradient.display_name()
    }
}
