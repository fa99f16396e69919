use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour map '{0}', expected one of: cool-warm, fire")]
pub struct UnknownColourMap(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKind {
    #[default]
    CoolWarm,
    FireGradient,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::CoolWarm, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CoolWarm => "Cool-warm",
            Self::FireGradient => "Fire gradient",
        }
    }
}

impl fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColourMapKind {
    type Err = UnknownColourMap;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cool-warm" | "coolwarm" => Ok(Self::CoolWarm),
            "fire" | "fire-gradient" => Ok(Self::FireGradient),
            other => Err(UnknownColourMap(other.to_string())),
        }
    }
}
