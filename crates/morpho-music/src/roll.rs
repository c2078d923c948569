//! Pitch-class × time rhythmic images.

use crate::error::MusicError;
use crate::kernel::ChordKernel;
use morpho_lattices::{BooleanLattice, RhythmLevel, RhythmicLattice};
use morpho_ops::{dilation, erosion, Image, MorphError};
use morpho_space::{Circle, Line, ProductSpace, Space};
use std::sync::Arc;

/// Number of pitch classes on the chroma circle.
pub const PITCH_CLASSES: usize = 12;

/// Decode a twelve-row grid of numeric codes into a flat row-major
/// level array, validating row count, width, and every cell.
pub(crate) fn decode_grid(rows: &[Vec<u8>]) -> Result<(usize, Vec<RhythmLevel>), MusicError> {
    if rows.len() != PITCH_CLASSES {
        return Err(MusicError::WrongRowCount { found: rows.len() });
    }
    let steps = rows[0].len();
    if steps == 0 {
        return Err(MusicError::EmptyGrid);
    }
    let mut data = Vec::with_capacity(PITCH_CLASSES * steps);
    for (row_idx, row) in rows.iter().enumerate() {
        if row.len() != steps {
            return Err(MusicError::RaggedRow {
                row: row_idx,
                expected: steps,
                found: row.len(),
            });
        }
        for (step, &code) in row.iter().enumerate() {
            let level = RhythmLevel::from_code(code).ok_or(MusicError::InvalidCode {
                row: row_idx,
                step,
                code,
            })?;
            data.push(level);
        }
    }
    Ok((steps, data))
}

/// Render a flat row-major grid as glyph rows, one line per row.
pub(crate) fn render_rows<T>(data: &[T], steps: usize, glyph: impl Fn(&T) -> char) -> String {
    let mut out = String::with_capacity(data.len() + data.len() / steps.max(1));
    for (i, row) in data.chunks(steps).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for cell in row {
            out.push(glyph(cell));
        }
    }
    out
}

/// A rhythmic image over the cylinder `Circle(12) × Line(steps)`:
/// twelve pitch-class rows, each a sequence of onset strengths.
///
/// Row 0 is pitch class C; the pitch axis wraps, so transpositions by
/// a [`ChordKernel`] move freely around the circle while the time axis
/// stays bounded.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromaRoll {
    image: Image<RhythmicLattice>,
    steps: usize,
}

impl ChromaRoll {
    /// Build a roll from twelve rows of numeric level codes
    /// (`0` rest, `1` soft onset, `2` onset).
    ///
    /// All rows must share one nonzero length; every cell must decode.
    pub fn from_codes(rows: &[Vec<u8>]) -> Result<Self, MusicError> {
        let (steps, data) = decode_grid(rows)?;
        let len = u32::try_from(steps).unwrap_or(u32::MAX);
        let space: Arc<dyn Space> = Arc::new(ProductSpace::new(vec![
            Box::new(Circle::new(PITCH_CLASSES as u32)?),
            Box::new(Line::new(len)?),
        ])?);
        let image = Image::new(space, RhythmicLattice, &[PITCH_CLASSES, steps], data)?;
        Ok(Self { image, steps })
    }

    fn from_image(image: Image<RhythmicLattice>, steps: usize) -> Self {
        Self { image, steps }
    }

    /// Number of time steps per row.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The underlying rhythmic image.
    pub fn image(&self) -> &Image<RhythmicLattice> {
        &self.image
    }

    /// Glyph rendering, one line per pitch class: `-`, `·`, `x`.
    pub fn render(&self) -> String {
        render_rows(self.image.data(), self.steps, |level| match level {
            RhythmLevel::Rest => '-',
            RhythmLevel::SoftOnset => '·',
            RhythmLevel::Onset => 'x',
        })
    }

    /// Erode this roll by a chord kernel.
    ///
    /// The result is boolean: a cell is active exactly when the whole
    /// chord shape, rooted at that pitch class and starting at that
    /// step, is met or exceeded by the roll. Probe columns past the
    /// end of the roll are skipped rather than failing.
    pub fn erode(&self, kernel: &ChordKernel) -> Result<ChordActivations, MorphError> {
        let image = erosion(&self.image, kernel.element())?;
        Ok(ChordActivations {
            image,
            steps: self.steps,
        })
    }

    /// Morphological opening: erode by `kernel`, then stamp the chord
    /// back at every surviving root.
    ///
    /// Cells that belong to no complete chord occurrence are silenced;
    /// complete occurrences are re-rendered with the kernel's own
    /// duration profile.
    pub fn open(&self, kernel: &ChordKernel) -> Result<ChromaRoll, MorphError> {
        let activations = self.erode(kernel)?;
        let image = dilation(&activations.image, kernel.element())?;
        Ok(ChromaRoll::from_image(image, self.steps))
    }
}

/// The boolean result of eroding a [`ChromaRoll`] by a
/// [`ChordKernel`]: one cell per (root pitch class, start step).
#[derive(Clone, Debug, PartialEq)]
pub struct ChordActivations {
    image: Image<BooleanLattice>,
    steps: usize,
}

impl ChordActivations {
    /// The underlying boolean image.
    pub fn image(&self) -> &Image<BooleanLattice> {
        &self.image
    }

    /// All active `(pitch_class, step)` cells in row-major order.
    pub fn active(&self) -> Vec<(usize, usize)> {
        self.image
            .data()
            .iter()
            .enumerate()
            .filter(|(_, &v)| v)
            .map(|(i, _)| (i / self.steps, i % self.steps))
            .collect()
    }

    /// Glyph rendering, one line per pitch class: `1` active, `0` not.
    pub fn render(&self) -> String {
        render_rows(self.image.data(), self.steps, |&v| if v { '1' } else { '0' })
    }
}
