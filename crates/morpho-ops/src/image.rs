//! Space-indexed array of lattice levels.

use crate::error::MorphError;
use morpho_core::{AxisIndices, Coord, Lattice};
use morpho_space::Space;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Flatten per-axis indices into a row-major offset.
pub(crate) fn flatten(indices: &AxisIndices, sizes: &[usize]) -> usize {
    indices
        .iter()
        .zip(sizes)
        .fold(0, |flat, (i, size)| flat * size + i)
}

/// Validate a caller-declared shape against the owning domain's axis
/// sizes and the flat element count.
pub(crate) fn check_shape(
    sizes: &[usize],
    shape: &[usize],
    len: usize,
) -> Result<(), MorphError> {
    if shape != sizes {
        return Err(MorphError::ShapeMismatch {
            expected: sizes.to_vec(),
            found: shape.to_vec(),
        });
    }
    let cells: usize = sizes.iter().product();
    if len != cells {
        return Err(MorphError::ShapeMismatch {
            expected: sizes.to_vec(),
            found: vec![len],
        });
    }
    Ok(())
}

/// A total mapping from every coordinate of a space to a level of one
/// lattice, stored row-major (last axis fastest) to match the space's
/// canonical ordering.
///
/// Construction fails fast with [`MorphError::ShapeMismatch`] when the
/// declared shape disagrees with the space; element typing is enforced
/// by the `L::Level` bound at compile time. After construction the
/// only mutation is [`set`](Self::set), used by the operators to
/// populate their freshly allocated outputs.
pub struct Image<L: Lattice> {
    space: Arc<dyn Space>,
    lattice: L,
    sizes: SmallVec<[usize; 4]>,
    data: Vec<L::Level>,
}

impl<L: Lattice> Image<L> {
    /// Create an image from a flat row-major array and its declared
    /// shape.
    ///
    /// The shape must equal the space's [`axis_sizes`](Space::axis_sizes)
    /// in rank and per-axis length, and `data` must hold exactly one
    /// level per coordinate.
    pub fn new(
        space: Arc<dyn Space>,
        lattice: L,
        shape: &[usize],
        data: Vec<L::Level>,
    ) -> Result<Self, MorphError> {
        let sizes = space.axis_sizes();
        check_shape(&sizes, shape, data.len())?;
        Ok(Self {
            space,
            lattice,
            sizes,
            data,
        })
    }

    /// Create an image holding `level` at every coordinate.
    ///
    /// The operators seed their outputs this way, with the output
    /// lattice's `bot` (dilation) or `top` (erosion).
    pub fn filled(space: Arc<dyn Space>, lattice: L, level: L::Level) -> Self {
        let sizes = space.axis_sizes();
        let data = vec![level; space.cell_count()];
        Self {
            space,
            lattice,
            sizes,
            data,
        }
    }

    /// The space this image is defined over.
    pub fn space(&self) -> &dyn Space {
        self.space.as_ref()
    }

    /// A shared handle to the space, for allocating same-shaped images.
    pub fn space_handle(&self) -> Arc<dyn Space> {
        Arc::clone(&self.space)
    }

    /// The lattice of this image's values.
    pub fn lattice(&self) -> &L {
        &self.lattice
    }

    /// The per-axis shape.
    pub fn shape(&self) -> &[usize] {
        &self.sizes
    }

    /// The flat row-major level data.
    pub fn data(&self) -> &[L::Level] {
        &self.data
    }

    fn flat_index(&self, point: &Coord) -> Result<usize, MorphError> {
        let indices = self.space.resolve(point)?;
        Ok(flatten(&indices, &self.sizes))
    }

    /// The level at `point`, resolved through the owning space.
    ///
    /// Propagates [`SpaceError::OutOfBounds`](morpho_space::SpaceError)
    /// for coordinates outside the extent.
    pub fn get(&self, point: &Coord) -> Result<&L::Level, MorphError> {
        let idx = self.flat_index(point)?;
        Ok(&self.data[idx])
    }

    /// Store `level` at `point`, resolved through the owning space.
    pub fn set(&mut self, point: &Coord, level: L::Level) -> Result<(), MorphError> {
        let idx = self.flat_index(point)?;
        self.data[idx] = level;
        Ok(())
    }
}

impl<L: Lattice> fmt::Debug for Image<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("shape", &self.sizes)
            .field("lattice", &self.lattice)
            .field("data", &self.data)
            .finish()
    }
}

impl<L: Lattice> Clone for Image<L> {
    fn clone(&self) -> Self {
        Self {
            space: Arc::clone(&self.space),
            lattice: self.lattice.clone(),
            sizes: self.sizes.clone(),
            data: self.data.clone(),
        }
    }
}

/// Two images are equal when their lattices match, their spaces are
/// topologically equivalent, and their data agree cell-for-cell.
impl<L: Lattice> PartialEq for Image<L> {
    fn eq(&self, other: &Self) -> bool {
        self.lattice == other.lattice
            && self.space.topology_eq(other.space.as_ref())
            && self.data == other.data
    }
}
