//! Group-indexed array of lattice levels.

use crate::error::MorphError;
use crate::image::{check_shape, flatten};
use morpho_core::{Lattice, Offset};
use morpho_space::Group;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// A total mapping from every shift of a group to a level of one
/// lattice, stored row-major to match the group's canonical ordering.
///
/// The probe the operators sweep over an [`Image`](crate::Image): at
/// each image coordinate, each shift's level is combined with the
/// level found at the shifted coordinate. The element's lattice may
/// differ from the image's; the pairing traits decide which
/// combinations exist.
pub struct StructuringElement<L: Lattice> {
    group: Arc<dyn Group>,
    lattice: L,
    sizes: SmallVec<[usize; 4]>,
    data: Vec<L::Level>,
}

impl<L: Lattice> StructuringElement<L> {
    /// Create a structuring element from a flat row-major array and
    /// its declared shape.
    ///
    /// The shape must equal the group's [`axis_sizes`](Group::axis_sizes)
    /// in rank and per-axis length, and `data` must hold exactly one
    /// level per shift.
    pub fn new(
        group: Arc<dyn Group>,
        lattice: L,
        shape: &[usize],
        data: Vec<L::Level>,
    ) -> Result<Self, MorphError> {
        let sizes = group.axis_sizes();
        check_shape(&sizes, shape, data.len())?;
        Ok(Self {
            group,
            lattice,
            sizes,
            data,
        })
    }

    /// Create a structuring element holding `level` at every shift.
    ///
    /// Filling with the lattice's `bot` gives a blank probe to build
    /// kernels on shift by shift.
    pub fn filled(group: Arc<dyn Group>, lattice: L, level: L::Level) -> Self {
        let sizes = group.axis_sizes();
        let data = vec![level; group.shift_count()];
        Self {
            group,
            lattice,
            sizes,
            data,
        }
    }

    /// The group this element is defined over.
    pub fn group(&self) -> &dyn Group {
        self.group.as_ref()
    }

    /// The lattice of this element's values.
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

    /// The level at `shift`, resolved through the owning group.
    pub fn get(&self, shift: &Offset) -> Result<&L::Level, MorphError> {
        let indices = self.group.resolve(shift)?;
        Ok(&self.data[flatten(&indices, &self.sizes)])
    }
}

impl<L: Lattice> fmt::Debug for StructuringElement<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuringElement")
            .field("shape", &self.sizes)
            .field("lattice", &self.lattice)
            .field("data", &self.data)
            .finish()
    }
}

impl<L: Lattice> Clone for StructuringElement<L> {
    fn clone(&self) -> Self {
        Self {
            group: Arc::clone(&self.group),
            lattice: self.lattice.clone(),
            sizes: self.sizes.clone(),
            data: self.data.clone(),
        }
    }
}

impl<L: Lattice> PartialEq for StructuringElement<L> {
    fn eq(&self, other: &Self) -> bool {
        self.lattice == other.lattice
            && self.group.structure_eq(other.group.as_ref())
            && self.data == other.data
    }
}
