use std::fmt;

use crate::core::data::viewport::{Axis, Bounds};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Real,
            Self::Up | Self::Down => Axis::Imaginary,
        }
    }

    /// +1 when the bounds move towards larger values on [`Self::axis`].
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Right | Self::Up => 1.0,
            Self::Left | Self::Down => -1.0,
        }
    }
}

impl fmt::Display for PanDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };

        f.write_str(name)
    }
}

/// One discrete user action. Consumed once by
/// [`Navigator::apply`](super::navigator::Navigator::apply).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NavigationCommand {
    /// Zoom to an explicit region, typically a drag selection.
    ZoomIn(Bounds),
    /// Zoom about the current center by the configured factor.
    ZoomInCentered,
    ZoomOut,
    Pan(PanDirection),
    Reset,
    SetBounds(Bounds),
}
