//! Normalized pointer interaction records.
//!
//! Platform adapters translate raw pointer events into [`InteractionRecord`]s
//! expressed in the frame's own pixel space before handing them to the
//! zoom controller.

use crate::core::data::pixel_coordinate::PixelCoordinate;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    /// Any other button, numbered the way browsers number them
    /// (1 middle, 3 back, 4 forward).
    Other(u16),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    Press,
    Release,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    pub col: u32,
    pub row: u32,
    pub button: PointerButton,
    pub phase: Phase,
}

impl InteractionRecord {
    #[must_use]
    pub fn pixel(&self) -> PixelCoordinate {
        PixelCoordinate {
            col: self.col,
            row: self.row,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointerButtonError {
    Unknown(String),
}

impl fmt::Display for ParsePointerButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(value) => write!(
                f,
                "unknown pointer button '{}', expected primary, secondary or a button number",
                value
            ),
        }
    }
}

impl Error for ParsePointerButtonError {}

impl FromStr for PointerButton {
    type Err = ParsePointerButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" | "left" | "0" => Ok(Self::Primary),
            "secondary" | "right" | "2" => Ok(Self::Secondary),
            "middle" => Ok(Self::Other(1)),
            other => other
                .parse::<u16>()
                .map(Self::Other)
                .map_err(|_| ParsePointerButtonError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_from_record() {
        let record = InteractionRecord {
            col: 12,
            row: 34,
            button: PointerButton::Primary,
            phase: Phase::Release,
        };

        assert_eq!(record.pixel(), PixelCoordinate { col: 12, row: 34 });
    }

    #[test]
    fn test_parse_named_buttons() {
        assert_eq!("primary".parse(), Ok(PointerButton::Primary));
        assert_eq!("Left".parse(), Ok(PointerButton::Primary));
        assert_eq!("secondary".parse(), Ok(PointerButton::Secondary));
        assert_eq!("right".parse(), Ok(PointerButton::Secondary));
        assert_eq!("middle".parse(), Ok(PointerButton::Other(1)));
    }

    #[test]
    fn test_parse_numbered_buttons() {
        assert_eq!("0".parse(), Ok(PointerButton::Primary));
        assert_eq!("2".parse(), Ok(PointerButton::Secondary));
        assert_eq!("4".parse(), Ok(PointerButton::Other(4)));
    }

    #[test]
    fn test_parse_unknown_button() {
        assert_eq!(
            "thumb".parse::<PointerButton>(),
            Err(ParsePointerButtonError::Unknown("thumb".to_string()))
        );
    }
}
