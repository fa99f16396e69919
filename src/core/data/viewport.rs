use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::complex::Complex;

const DEFAULT_REAL_MIN: f64 = -2.0;
const DEFAULT_REAL_MAX: f64 = 1.0;
const DEFAULT_IMAG_MIN: f64 = -1.5;
const DEFAULT_IMAG_MAX: f64 = 1.5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imaginary,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Imaginary => write!(f, "imaginary"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("{axis} bounds must be strictly ordered: min {min} >= max {max}")]
    Unordered { axis: Axis, min: f64, max: f64 },
    #[error("{axis} bounds must be finite: min {min}, max {max}")]
    NonFinite { axis: Axis, min: f64, max: f64 },
}

/// Four raw bounds as they arrive from outside: selections, typed-in values,
/// stored records. Nothing is checked until it becomes a [`Viewport`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(real_min: f64, real_max: f64, imag_min: f64, imag_max: f64) -> Self {
        Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        }
    }
}

impl From<Viewport> for Bounds {
    fn from(viewport: Viewport) -> Self {
        viewport.bounds
    }
}

impl From<&Viewport> for Bounds {
    fn from(viewport: &Viewport) -> Self {
        viewport.bounds
    }
}

/// A rectangle of the complex plane whose bounds are finite and strictly
/// ordered on both axes. Every way of building one goes through that check,
/// so a `Viewport` in hand is always sampleable.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Bounds", into = "Bounds")]
pub struct Viewport {
    bounds: Bounds,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(
                DEFAULT_REAL_MIN,
                DEFAULT_REAL_MAX,
                DEFAULT_IMAG_MIN,
                DEFAULT_IMAG_MAX,
            ),
        }
    }
}

impl TryFrom<Bounds> for Viewport {
    type Error = ViewportError;

    fn try_from(bounds: Bounds) -> Result<Self, Self::Error> {
        check_axis(Axis::Real, bounds.real_min, bounds.real_max)?;
        check_axis(Axis::Imaginary, bounds.imag_min, bounds.imag_max)?;

        Ok(Self { bounds })
    }
}

fn check_axis(axis: Axis, min: f64, max: f64) -> Result<(), ViewportError> {
    // the span has to be finite too, or sampling divides infinity
    if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
        return Err(ViewportError::NonFinite { axis, min, max });
    }

    if min >= max {
        return Err(ViewportError::Unordered { axis, min, max });
    }

    Ok(())
}

impl Viewport {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, ViewportError> {
        Self::try_from(Bounds::new(real_min, real_max, imag_min, imag_max))
    }

    /// Builds the viewport of the given spans centred on `center`.
    pub fn from_center(
        center: Complex,
        real_span: f64,
        imag_span: f64,
    ) -> Result<Self, ViewportError> {
        let half_real = real_span / 2.0;
        let half_imag = imag_span / 2.0;

        Self::new(
            center.real - half_real,
            center.real + half_real,
            center.imag - half_imag,
            center.imag + half_imag,
        )
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.bounds.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.bounds.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.bounds.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.bounds.imag_max
    }

    #[must_use]
    pub fn real_span(&self) -> f64 {
        self.bounds.real_max - self.bounds.real_min
    }

    #[must_use]
    pub fn imag_span(&self) -> f64 {
        self.bounds.imag_max - self.bounds.imag_min
    }

    #[must_use]
    pub fn span(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Real => self.real_span(),
            Axis::Imaginary => self.imag_span(),
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.bounds.real_min + self.real_span() / 2.0,
            imag: self.bounds.imag_min + self.imag_span() / 2.0,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "real [{}, {}] imag [{}, {}]",
            self.bounds.real_min, self.bounds.real_max, self.bounds.imag_min, self.bounds.imag_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::default();

        assert_eq!(viewport.bounds(), Bounds::new(-2.0, 1.0, -1.5, 1.5));
        assert_eq!(viewport.real_span(), 3.0);
        assert_eq!(viewport.imag_span(), 3.0);
        assert_eq!(viewport.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_viewport_new_valid() {
        let viewport = Viewport::new(-2.5, 1.0, -1.0, 1.0).unwrap();

        assert_eq!(viewport.real_min(), -2.5);
        assert_eq!(viewport.real_max(), 1.0);
        assert_eq!(viewport.real_span(), 3.5);
        assert_eq!(viewport.imag_span(), 2.0);
    }

    #[test]
    fn test_viewport_bounds_must_be_strictly_ordered() {
        assert_eq!(
            Viewport::new(1.0, 1.0, -1.5, 1.5),
            Err(ViewportError::Unordered {
                axis: Axis::Real,
                min: 1.0,
                max: 1.0
            })
        );
        assert_eq!(
            Viewport::new(1.0, -1.0, -1.5, 1.5),
            Err(ViewportError::Unordered {
                axis: Axis::Real,
                min: 1.0,
                max: -1.0
            })
        );
        assert_eq!(
            Viewport::new(-2.0, 1.0, 0.5, 0.5),
            Err(ViewportError::Unordered {
                axis: Axis::Imaginary,
                min: 0.5,
                max: 0.5
            })
        );
        assert_eq!(
            Viewport::new(-2.0, 1.0, 2.0, -2.0),
            Err(ViewportError::Unordered {
                axis: Axis::Imaginary,
                min: 2.0,
                max: -2.0
            })
        );
    }

    #[test]
    fn test_viewport_rejects_non_finite_bounds() {
        assert!(matches!(
            Viewport::new(f64::NAN, 1.0, -1.0, 1.0),
            Err(ViewportError::NonFinite {
                axis: Axis::Real,
                ..
            })
        ));
        assert!(matches!(
            Viewport::new(-1.0, 1.0, f64::NEG_INFINITY, 1.0),
            Err(ViewportError::NonFinite {
                axis: Axis::Imaginary,
                ..
            })
        ));
        assert!(matches!(
            Viewport::new(-f64::MAX, f64::MAX, -1.0, 1.0),
            Err(ViewportError::NonFinite {
                axis: Axis::Real,
                ..
            })
        ));
    }

    #[test]
    fn test_viewport_from_center() {
        let viewport = Viewport::from_center(Complex::new(-0.5, 0.0), 1.5, 1.5).unwrap();

        assert_eq!(viewport.bounds(), Bounds::new(-1.25, 0.25, -0.75, 0.75));
    }

    #[test]
    fn test_viewport_error_message_names_axis() {
        let err = Viewport::new(1.0, 1.0, -1.5, 1.5).unwrap_err();

        assert_eq!(
            err.to_string(),
            "real bounds must be strictly ordered: min 1 >= max 1"
        );
    }

    #[test]
    fn test_viewport_deserialize_validates() {
        let ok: Viewport = serde_json::from_str(
            r#"{"real_min":-1.0,"real_max":1.0,"imag_min":-1.0,"imag_max":1.0}"#,
        )
        .unwrap();
        let bad = serde_json::from_str::<Viewport>(
            r#"{"real_min":1.0,"real_max":-1.0,"imag_min":-1.0,"imag_max":1.0}"#,
        );

        assert_eq!(ok.real_span(), 2.0);
        assert!(bad.is_err());
    }
}
