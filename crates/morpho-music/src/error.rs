//! Errors from musical container construction.

use morpho_ops::MorphError;
use morpho_space::SpaceError;
use std::error::Error;
use std::fmt;

/// Errors raised while building a [`ChromaRoll`](crate::ChromaRoll) or
/// [`ChordKernel`](crate::ChordKernel).
#[derive(Clone, Debug, PartialEq)]
pub enum MusicError {
    /// A grid did not supply exactly twelve pitch-class rows.
    WrongRowCount {
        /// How many rows the caller supplied.
        found: usize,
    },
    /// A row's length disagrees with the first row's.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// The length established by the first row.
        expected: usize,
        /// The offending row's length.
        found: usize,
    },
    /// Rows must hold at least one column.
    EmptyGrid,
    /// A cell held a numeric code outside `0..=2`.
    InvalidCode {
        /// Zero-based row of the offending cell.
        row: usize,
        /// Zero-based column of the offending cell.
        step: usize,
        /// The code that failed to decode.
        code: u8,
    },
    /// A chord interval lies outside the twelve pitch classes.
    IntervalOutOfRange {
        /// The offending semitone interval.
        interval: usize,
    },
    /// The underlying space or group rejected its dimensions.
    Space(SpaceError),
    /// The underlying container rejected the assembled array.
    Morph(MorphError),
}

impl fmt::Display for MusicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount { found } => {
                write!(f, "expected 12 pitch-class rows, got {found}")
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} holds {found} steps but the grid is {expected} wide"
            ),
            Self::EmptyGrid => write!(f, "grid must hold at least one time step"),
            Self::InvalidCode { row, step, code } => {
                write!(f, "invalid level code {code} at row {row}, step {step}")
            }
            Self::IntervalOutOfRange { interval } => {
                write!(f, "chord interval {interval} exceeds the 12 pitch classes")
            }
            Self::Space(e) => write!(f, "space error: {e}"),
            Self::Morph(e) => write!(f, "container error: {e}"),
        }
    }
}

impl Error for MusicError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Morph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for MusicError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<MorphError> for MusicError {
    fn from(e: MorphError) -> Self {
        Self::Morph(e)
    }
}
