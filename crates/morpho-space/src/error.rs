//! Error types for space and group operations.

use morpho_core::Coord;
use std::fmt;

/// Errors arising from space/group construction or coordinate
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate or offset falls outside the declared extent.
    ///
    /// The morphology operators recover from this locally: an offset
    /// whose source coordinate is out of bounds simply contributes
    /// nothing. Callers of `resolve` see it directly.
    OutOfBounds {
        /// The offending coordinate or offset.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a space or group with zero elements.
    EmptySpace,
    /// A size parameter exceeds what `i32` coordinates can address.
    DimensionTooLarge {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum accepted value.
        max: u32,
    },
    /// A product composition is structurally invalid.
    InvalidComposition {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord:?} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "space must have at least one element"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds the maximum of {max}")
            }
            Self::InvalidComposition { reason } => {
                write!(f, "invalid composition: {reason}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn display_out_of_bounds() {
        let e = SpaceError::OutOfBounds {
            coord: smallvec![7],
            bounds: "[0, 5)".to_string(),
        };
        assert_eq!(e.to_string(), "coordinate [7] out of bounds: [0, 5)");
    }

    #[test]
    fn display_empty_space() {
        assert_eq!(
            SpaceError::EmptySpace.to_string(),
            "space must have at least one element"
        );
    }
}
