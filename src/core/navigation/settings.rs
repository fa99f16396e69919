use crate::core::navigation::errors::NavigationError;

const DEFAULT_ZOOM_IN_FACTOR: f64 = 0.5;
const DEFAULT_ZOOM_OUT_FACTOR: f64 = 2.0;
const DEFAULT_PAN_FRACTION: f64 = 0.1;

/// Step sizes used by commands that carry no explicit amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    zoom_in_factor: f64,
    zoom_out_factor: f64,
    pan_fraction: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            pan_fraction: DEFAULT_PAN_FRACTION,
        }
    }
}

impl NavigationSettings {
    pub fn new(
        zoom_in_factor: f64,
        zoom_out_factor: f64,
        pan_fraction: f64,
    ) -> Result<Self, NavigationError> {
        check_zoom_in_factor(zoom_in_factor)?;
        check_zoom_out_factor(zoom_out_factor)?;
        check_pan_fraction(pan_fraction)?;

        Ok(Self {
            zoom_in_factor,
            zoom_out_factor,
            pan_fraction,
        })
    }

    #[must_use]
    pub fn zoom_in_factor(&self) -> f64 {
        self.zoom_in_factor
    }

    #[must_use]
    pub fn zoom_out_factor(&self) -> f64 {
        self.zoom_out_factor
    }

    #[must_use]
    pub fn pan_fraction(&self) -> f64 {
        self.pan_fraction
    }
}

pub(crate) fn check_zoom_in_factor(factor: f64) -> Result<(), NavigationError> {
    if factor.is_finite() && factor > 0.0 && factor < 1.0 {
        return Ok(());
    }

    Err(NavigationError::InvalidFactor {
        factor,
        expected: "in (0, 1) to zoom in",
    })
}

pub(crate) fn check_zoom_out_factor(factor: f64) -> Result<(), NavigationError> {
    if factor.is_finite() && factor > 1.0 {
        return Ok(());
    }

    Err(NavigationError::InvalidFactor {
        factor,
        expected: "greater than 1 to zoom out",
    })
}

pub(crate) fn check_pan_fraction(fraction: f64) -> Result<(), NavigationError> {
    if fraction.is_finite() && fraction > 0.0 {
        return Ok(());
    }

    Err(NavigationError::InvalidFraction { fraction })
}
