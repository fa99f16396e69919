//! Textual forms accepted on the command line.

use std::str::FromStr;

use thiserror::Error;

use crate::core::data::viewport::Bounds;
use crate::core::navigation::{NavigationCommand, PanDirection};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationCommandParseError {
    #[error(
        "unknown navigation command '{0}', expected zoom-in[=r0,r1,i0,i1], zoom-out, pan=DIR, reset or bounds=r0,r1,i0,i1"
    )]
    UnknownCommand(String),
    #[error("'{command}' needs an argument")]
    MissingArgument { command: &'static str },
    #[error("'{command}' takes no argument, got '{argument}'")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
    #[error("unknown pan direction '{0}', expected left, right, up or down")]
    UnknownDirection(String),
    #[error("bounds must be r0,r1,i0,i1, got '{0}'")]
    InvalidBounds(String),
}

/// Parses `"r0,r1,i0,i1"` into raw bounds. Ordering is checked later, by
/// whoever turns the bounds into a viewport.
pub fn parse_bounds(s: &str) -> Result<Bounds, NavigationCommandParseError> {
    let invalid = || NavigationCommandParseError::InvalidBounds(s.to_string());

    let values = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    match values.as_slice() {
        &[real_min, real_max, imag_min, imag_max] => {
            Ok(Bounds::new(real_min, real_max, imag_min, imag_max))
        }
        _ => Err(invalid()),
    }
}

impl FromStr for PanDirection {
    type Err = NavigationCommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(NavigationCommandParseError::UnknownDirection(
                other.to_string(),
            )),
        }
    }
}

impl FromStr for NavigationCommand {
    type Err = NavigationCommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, argument) = match s.split_once('=') {
            Some((name, argument)) => (name.trim(), Some(argument)),
            None => (s.trim(), None),
        };

        match (name.to_ascii_lowercase().as_str(), argument) {
            ("zoom-in", Some(region)) => Ok(Self::ZoomIn(parse_bounds(region)?)),
            ("zoom-in", None) => Ok(Self::ZoomInCentered),
            ("zoom-out", None) => Ok(Self::ZoomOut),
            ("reset", None) => Ok(Self::Reset),
            ("pan", Some(direction)) => Ok(Self::Pan(direction.parse()?)),
            ("bounds", Some(bounds)) => Ok(Self::SetBounds(parse_bounds(bounds)?)),
            ("pan", None) => Err(NavigationCommandParseError::MissingArgument { command: "pan" }),
            ("bounds", None) => Err(NavigationCommandParseError::MissingArgument {
                command: "bounds",
            }),
            ("zoom-out", Some(argument)) => Err(NavigationCommandParseError::UnexpectedArgument {
                command: "zoom-out",
                argument: argument.to_string(),
            }),
            ("reset", Some(argument)) => Err(NavigationCommandParseError::UnexpectedArgument {
                command: "reset",
                argument: argument.to_string(),
            }),
            _ => Err(NavigationCommandParseError::UnknownCommand(s.to_string())),
        }
    }
}
