use thiserror::Error;

use crate::core::data::viewport::ViewportError;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NavigationError {
    #[error("invalid zoom region: {0}")]
    InvalidRegion(ViewportError),
    #[error("invalid viewport: {0}")]
    InvalidViewport(ViewportError),
    #[error("zoom factor {factor} must be {expected}")]
    InvalidFactor { factor: f64, expected: &'static str },
    #[error("pan fraction {fraction} must be finite and greater than 0")]
    InvalidFraction { fraction: f64 },
}
