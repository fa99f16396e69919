use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_maps::cool_warm::CoolWarm;
use crate::core::fractals::mandelbrot::colour_maps::fire_gradient::FireGradient;
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKind, max_iter: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKind::CoolWarm => Box::new(CoolWarm::new(max_iter)),
        ColourMapKind::FireGradient => Box::new(FireGradient::new(max_iter)),
    }
}
