use tracing::debug;

use crate::core::data::viewport::{Axis, Bounds, Viewport};
use crate::core::navigation::command::{NavigationCommand, PanDirection};
use crate::core::navigation::errors::NavigationError;
use crate::core::navigation::settings::{
    NavigationSettings, check_pan_fraction, check_zoom_in_factor, check_zoom_out_factor,
};

/// Owns the current viewport of one exploration session and turns
/// navigation commands into the next one.
///
/// The viewport is only ever replaced whole. A rejected command returns the
/// error and leaves the current viewport as it was, so the session carries
/// on from the last good state.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator {
    viewport: Viewport,
    settings: NavigationSettings,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(NavigationSettings::default())
    }
}

impl Navigator {
    #[must_use]
    pub fn new(settings: NavigationSettings) -> Self {
        Self {
            viewport: Viewport::default(),
            settings,
        }
    }

    #[must_use]
    pub fn with_viewport(viewport: Viewport, settings: NavigationSettings) -> Self {
        Self { viewport, settings }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn apply(&mut self, command: NavigationCommand) -> Result<Viewport, NavigationError> {
        match command {
            NavigationCommand::ZoomIn(region) => self.zoom_in(region),
            NavigationCommand::ZoomInCentered => {
                self.zoom_in_centered(self.settings.zoom_in_factor())
            }
            NavigationCommand::ZoomOut => self.zoom_out_centered(self.settings.zoom_out_factor()),
            NavigationCommand::Pan(direction) => {
                self.pan(direction, self.settings.pan_fraction())
            }
            NavigationCommand::Reset => Ok(self.reset()),
            NavigationCommand::SetBounds(bounds) => self.set_bounds(bounds),
        }
    }

    /// Replaces the viewport with `region`, usually a selection inside the
    /// current one.
    pub fn zoom_in(&mut self, region: Bounds) -> Result<Viewport, NavigationError> {
        let viewport = Viewport::try_from(region).map_err(NavigationError::InvalidRegion)?;

        Ok(self.replace(viewport))
    }

    /// Shrinks both spans by `factor` about the current center.
    pub fn zoom_in_centered(&mut self, factor: f64) -> Result<Viewport, NavigationError> {
        check_zoom_in_factor(factor)?;

        self.scale_about_center(factor)
    }

    /// Grows both spans by `factor` about the current center.
    pub fn zoom_out_centered(&mut self, factor: f64) -> Result<Viewport, NavigationError> {
        check_zoom_out_factor(factor)?;

        self.scale_about_center(factor)
    }

    /// Shifts both bounds of the direction's axis by `fraction` of that
    /// axis' span. The other axis is left alone.
    pub fn pan(
        &mut self,
        direction: PanDirection,
        fraction: f64,
    ) -> Result<Viewport, NavigationError> {
        check_pan_fraction(fraction)?;

        let current = self.viewport;
        let axis = direction.axis();
        let shift = direction.sign() * fraction * current.span(axis);

        let next = match axis {
            Axis::Real => Viewport::new(
                current.real_min() + shift,
                current.real_max() + shift,
                current.imag_min(),
                current.imag_max(),
            ),
            Axis::Imaginary => Viewport::new(
                current.real_min(),
                current.real_max(),
                current.imag_min() + shift,
                current.imag_max() + shift,
            ),
        }
        .map_err(NavigationError::InvalidViewport)?;

        Ok(self.replace(next))
    }

    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<Viewport, NavigationError> {
        let viewport = Viewport::try_from(bounds).map_err(NavigationError::InvalidViewport)?;

        Ok(self.replace(viewport))
    }

    pub fn reset(&mut self) -> Viewport {
        self.replace(Viewport::default())
    }

    fn scale_about_center(&mut self, factor: f64) -> Result<Viewport, NavigationError> {
        let current = self.viewport;

        let next = Viewport::from_center(
            current.center(),
            current.real_span() * factor,
            current.imag_span() * factor,
        )
        .map_err(NavigationError::InvalidViewport)?;

        Ok(self.replace(next))
    }

    fn replace(&mut self, next: Viewport) -> Viewport {
        debug!(from = %self.viewport, to = %next, "viewport replaced");

        self.viewport = next;
        next
    }
}
