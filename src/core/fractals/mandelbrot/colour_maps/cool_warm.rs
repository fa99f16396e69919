use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::errors::{ColourMapError, check_count};
use crate::core::fractals::mandelbrot::colour_maps::kinds::ColourMapKind;

const COOL: Colour = Colour {
    r: 59,
    g: 76,
    b: 192,
};
const NEUTRAL: Colour = Colour {
    r: 221,
    g: 221,
    b: 221,
};
const WARM: Colour = Colour {
    r: 180,
    g: 4,
    b: 38,
};

/// Diverging blue → grey → red scale over `count / max_iter`. Bounded points
/// sit at the warm end rather than being special-cased.
#[derive(Debug)]
pub struct CoolWarm {
    max_iter: u32,
}

impl CoolWarm {
    #[must_use]
    pub fn new(max_iter: u32) -> Self {
        Self { max_iter }
    }
}

impl ColourMap for CoolWarm {
    fn map(&self, count: u32) -> Result<Colour, ColourMapError> {
        check_count(count, self.max_iter)?;

        if self.max_iter == 0 {
            return Ok(WARM);
        }

        let t = f64::from(count) / f64::from(self.max_iter);

        let colour = if t < 0.5 {
            COOL.lerp(NEUTRAL, t * 2.0)
        } else {
            NEUTRAL.lerp(WARM, (t - 0.5) * 2.0)
        };

        Ok(colour)
    }

    fn display_name(&self) -> &str {
        ColourMapKind::CoolWarm.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        let map = CoolWarm::new(100);

        assert_eq!(map.map(0).unwrap(), COOL);
        assert_eq!(map.map(50).unwrap(), NEUTRAL);
        assert_eq!(map.map(100).unwrap(), WARM);
    }

    #[test]
    fn test_red_channel_rises_through_lower_half() {
        let map = CoolWarm::new(100);

        let low = map.map(10).unwrap();
        let high = map.map(40).unwrap();

        assert!(high.r > low.r);
        assert!(high.b > low.b);
    }

    #[test]
    fn test_count_above_max_is_rejected() {
        assert!(CoolWarm::new(5).map(6).is_err());
    }
}
