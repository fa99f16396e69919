use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Evenly spaced sample positions over a viewport, endpoints included on
/// both axes. Column 0 sits on `real_min`, the last column on `real_max`;
/// row 0 sits on `imag_min`, the last row on `imag_max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleGrid {
    viewport: Viewport,
    width: u32,
    height: u32,
}

impl SampleGrid {
    /// `width` and `height` are expected to be at least 1; the evaluator
    /// checks that before building one.
    #[must_use]
    pub fn new(viewport: Viewport, width: u32, height: u32) -> Self {
        Self {
            viewport,
            width,
            height,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    fn real_at(&self, col: u32) -> f64 {
        linspace_at(
            self.viewport.real_min(),
            self.viewport.real_max(),
            self.width,
            col,
        )
    }

    #[must_use]
    fn imag_at(&self, row: u32) -> f64 {
        linspace_at(
            self.viewport.imag_min(),
            self.viewport.imag_max(),
            self.height,
            row,
        )
    }

    #[must_use]
    pub fn point(&self, row: u32, col: u32) -> Complex {
        Complex {
            real: self.real_at(col),
            imag: self.imag_at(row),
        }
    }
}

fn linspace_at(min: f64, max: f64, count: u32, index: u32) -> f64 {
    if count <= 1 || index == 0 {
        return min;
    }

    if index >= count - 1 {
        return max;
    }

    let step = (max - min) / f64::from(count - 1);

    min + f64::from(index) * step
}
