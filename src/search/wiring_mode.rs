use std::{fmt, str::FromStr};

use clap::ValueEnum;

use crate::error::WaypointError;

/// How the demonstration graph connects its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WiringMode {
    /// Connect points closer than the neighbor distance, up to a per-node cap.
    #[default]
    Radius,
    /// Connect uniformly drawn pairs of points.
    Random,
}

impl FromStr for WiringMode {
    type Err = WaypointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "radius" => Ok(WiringMode::Radius),
            "random" => Ok(WiringMode::Random),
            other => Err(WaypointError::InvalidWiringMode(other.to_string())),
        }
    }
}

impl fmt::Display for WiringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringMode::Radius => write!(f, "radius"),
            WiringMode::Random => write!(f, "random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_modes() {
        assert_eq!("radius".parse::<WiringMode>().unwrap(), WiringMode::Radius);
        assert_eq!("random".parse::<WiringMode>().unwrap(), WiringMode::Random);
    }

    #[test]
    fn test_parse_unknown_mode() {
        let err = "grid".parse::<WiringMode>().unwrap_err();
        assert!(matches!(err, WaypointError::InvalidWiringMode(ref s) if s == "grid"));
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in [WiringMode::Radius, WiringMode::Random] {
            assert_eq!(mode.to_string().parse::<WiringMode>().unwrap(), mode);
        }
    }
}
