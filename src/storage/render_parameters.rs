use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::data::viewport::Bounds;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 800;
const DEFAULT_MAX_ITER: u32 = 100;

/// The plain record the evaluator is driven from. Where it came from (flags,
/// a stored row, defaults) does not matter past this point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderParameters {
    pub width: u32,
    pub height: u32,
    pub max_iter: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iter: DEFAULT_MAX_ITER,
            bounds: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderLimitsError {
    #[error("{name} range is inverted: min {min} > max {max}")]
    Inverted { name: &'static str, min: u32, max: u32 },
}

/// Allowed ranges for user-supplied parameters, matching the explorer's
/// slider ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    min_dimension: u32,
    max_dimension: u32,
    min_iterations: u32,
    max_iterations: u32,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            min_dimension: 400,
            max_dimension: 1600,
            min_iterations: 10,
            max_iterations: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    pub parameters: RenderParameters,
    pub changed: bool,
}

impl RenderLimits {
    pub fn new(
        min_dimension: u32,
        max_dimension: u32,
        min_iterations: u32,
        max_iterations: u32,
    ) -> Result<Self, RenderLimitsError> {
        check_range("dimension", min_dimension, max_dimension)?;
        check_range("iteration", min_iterations, max_iterations)?;

        Ok(Self {
            min_dimension,
            max_dimension,
            min_iterations,
            max_iterations,
        })
    }

    /// Clamps width, height and max_iter into range, each on its own.
    /// Bounds pass through untouched.
    #[must_use]
    pub fn clamp(&self, parameters: RenderParameters) -> Clamped {
        let clamped = RenderParameters {
            width: parameters
                .width
                .clamp(self.min_dimension, self.max_dimension),
            height: parameters
                .height
                .clamp(self.min_dimension, self.max_dimension),
            max_iter: parameters
                .max_iter
                .clamp(self.min_iterations, self.max_iterations),
            bounds: parameters.bounds,
        };

        Clamped {
            changed: clamped != parameters,
            parameters: clamped,
        }
    }
}

fn check_range(name: &'static str, min: u32, max: u32) -> Result<(), RenderLimitsError> {
    if min > max {
        return Err(RenderLimitsError::Inverted { name, min, max });
    }

    Ok(())
}
