//! Chord-shaped structuring elements.

use crate::error::MusicError;
use crate::roll::{decode_grid, render_rows, PITCH_CLASSES};
use morpho_lattices::{RhythmLevel, RhythmicLattice};
use morpho_ops::StructuringElement;
use morpho_space::{CyclicShifts, Group, ProductGroup, Translations};
use std::sync::Arc;

/// Semitone intervals of a major triad above its root.
pub const MAJOR_TRIAD: [usize; 3] = [0, 4, 7];

/// Semitone intervals of a minor triad above its root.
pub const MINOR_TRIAD: [usize; 3] = [0, 3, 7];

/// A rhythmic structuring element over
/// `CyclicShifts(12) × Translations(depth)`.
///
/// The pitch axis is the chord shape (which semitone offsets above the
/// root must sound); the time axis is the duration profile (how the
/// demand decays over successive steps). Cells at `Rest` demand
/// nothing and pass everything.
#[derive(Clone, Debug, PartialEq)]
pub struct ChordKernel {
    element: StructuringElement<RhythmicLattice>,
    depth: usize,
}

impl ChordKernel {
    /// Build a kernel from twelve rows of numeric level codes, one row
    /// per semitone offset above the root and one column per step.
    pub fn from_codes(rows: &[Vec<u8>]) -> Result<Self, MusicError> {
        let (depth, data) = decode_grid(rows)?;
        Self::from_levels(depth, data)
    }

    /// Build a kernel demanding an [`Onset`](RhythmLevel::Onset) at
    /// each interval on the first step and a
    /// [`SoftOnset`](RhythmLevel::SoftOnset) sustain on the remaining
    /// `depth - 1` steps.
    ///
    /// Intervals are semitones above the root and must lie in `0..12`;
    /// `depth` must be at least one.
    pub fn from_intervals(intervals: &[usize], depth: usize) -> Result<Self, MusicError> {
        if depth == 0 {
            return Err(MusicError::EmptyGrid);
        }
        let mut data = vec![RhythmLevel::Rest; PITCH_CLASSES * depth];
        for &interval in intervals {
            if interval >= PITCH_CLASSES {
                return Err(MusicError::IntervalOutOfRange { interval });
            }
            data[interval * depth] = RhythmLevel::Onset;
            for step in 1..depth {
                data[interval * depth + step] = RhythmLevel::SoftOnset;
            }
        }
        Self::from_levels(depth, data)
    }

    /// A major-triad kernel with the given duration profile.
    pub fn major(depth: usize) -> Result<Self, MusicError> {
        Self::from_intervals(&MAJOR_TRIAD, depth)
    }

    /// A minor-triad kernel with the given duration profile.
    pub fn minor(depth: usize) -> Result<Self, MusicError> {
        Self::from_intervals(&MINOR_TRIAD, depth)
    }

    fn from_levels(depth: usize, data: Vec<RhythmLevel>) -> Result<Self, MusicError> {
        let len = u32::try_from(depth).unwrap_or(u32::MAX);
        let group: Arc<dyn Group> = Arc::new(ProductGroup::new(vec![
            Box::new(CyclicShifts::new(PITCH_CLASSES as u32)?),
            Box::new(Translations::new(len)?),
        ])?);
        let element =
            StructuringElement::new(group, RhythmicLattice, &[PITCH_CLASSES, depth], data)?;
        Ok(Self { element, depth })
    }

    /// Number of time steps the kernel spans.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The underlying structuring element.
    pub fn element(&self) -> &StructuringElement<RhythmicLattice> {
        &self.element
    }

    /// Glyph rendering, one line per semitone offset: `-`, `·`, `x`.
    pub fn render(&self) -> String {
        render_rows(self.element.data(), self.depth, |level| match level {
            RhythmLevel::Rest => '-',
            RhythmLevel::SoftOnset => '·',
            RhythmLevel::Onset => 'x',
        })
    }
}
