//! Cartesian products of spaces and of groups.
//!
//! A product holds its components by composition and delegates
//! everything component-wise. Both products enumerate with the same
//! nesting (rightmost component fastest), so a structuring element
//! over a [`ProductGroup`] lines up index-for-index with an image over
//! the matching [`ProductSpace`].

use crate::error::SpaceError;
use crate::group::Group;
use crate::space::Space;
use morpho_core::{AxisIndices, Coord, Offset};
use smallvec::SmallVec;
use std::fmt;

/// Enumerate all combinations of per-component orderings, rightmost
/// component fastest (odometer iteration).
fn odometer(orderings: &[Vec<Coord>], total_ndim: usize, total: usize) -> Vec<Coord> {
    // An empty component empties the whole product; the loop below
    // assumes every ordering has a first entry.
    if total == 0 {
        return Vec::new();
    }
    let n = orderings.len();
    let mut result = Vec::with_capacity(total);
    let mut indices = vec![0usize; n];

    loop {
        let mut coord = SmallVec::with_capacity(total_ndim);
        for (i, &idx) in indices.iter().enumerate() {
            coord.extend_from_slice(&orderings[i][idx]);
        }
        result.push(coord);

        let mut carry = true;
        for i in (0..n).rev() {
            if carry {
                indices[i] += 1;
                if indices[i] < orderings[i].len() {
                    carry = false;
                } else {
                    indices[i] = 0;
                }
            }
        }
        if carry {
            break;
        }
    }
    result
}

/// Build `dim_offsets` (`[0, d_0, d_0+d_1, ...]`) and the
/// overflow-checked element count for a product composition.
fn compose(
    ndims: &[usize],
    counts: &[usize],
) -> Result<(Vec<usize>, usize, usize), SpaceError> {
    if ndims.is_empty() {
        return Err(SpaceError::InvalidComposition {
            reason: "a product requires at least one component".to_string(),
        });
    }
    let mut dim_offsets = Vec::with_capacity(ndims.len() + 1);
    dim_offsets.push(0);
    let mut total_ndim = 0usize;
    for d in ndims {
        total_ndim += d;
        dim_offsets.push(total_ndim);
    }
    let mut total = 1usize;
    for count in counts {
        total = total
            .checked_mul(*count)
            .ok_or_else(|| SpaceError::InvalidComposition {
                reason: "total element count overflows usize".to_string(),
            })?;
    }
    Ok((dim_offsets, total_ndim, total))
}

fn split(dim_offsets: &[usize], coord: &[i32], i: usize) -> Coord {
    SmallVec::from_slice(&coord[dim_offsets[i]..dim_offsets[i + 1]])
}

/// Cartesian product of N component spaces.
///
/// - **Coordinates** are the concatenation of per-component
///   coordinates: if component `i` has `d_i` axes, the product has
///   `d_0 + d_1 + ...` axes.
/// - **Canonical ordering** nests component orderings with the
///   rightmost component as the inner loop.
/// - **Action and resolution** delegate component-wise; a product
///   coordinate is in bounds iff every sub-coordinate is.
///
/// # Examples
///
/// ```
/// use morpho_space::{Circle, Line, ProductSpace, Space};
/// use smallvec::smallvec;
///
/// // Pitch-class circle crossed with an 8-step timeline.
/// let cylinder = ProductSpace::new(vec![
///     Box::new(Circle::new(12).unwrap()),
///     Box::new(Line::new(8).unwrap()),
/// ]).unwrap();
/// assert_eq!(cylinder.cell_count(), 96);
///
/// // Pitch wraps, time does not.
/// let moved = cylinder.act(&smallvec![11, 7], &smallvec![2, 1]);
/// assert_eq!(moved.as_slice(), &[1, 8]);
/// assert!(cylinder.resolve(&moved).is_err()); // time 8 is past the end
/// ```
pub struct ProductSpace {
    components: Vec<Box<dyn Space>>,
    dim_offsets: Vec<usize>,
    total_ndim: usize,
    total_cells: usize,
}

impl fmt::Debug for ProductSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductSpace")
            .field("n_components", &self.components.len())
            .field("total_ndim", &self.total_ndim)
            .field("total_cells", &self.total_cells)
            .finish()
    }
}

impl ProductSpace {
    /// Create a product space from component spaces.
    ///
    /// Returns `Err(SpaceError::InvalidComposition)` if `components`
    /// is empty or the total cell count overflows `usize`.
    pub fn new(components: Vec<Box<dyn Space>>) -> Result<Self, SpaceError> {
        let ndims: Vec<usize> = components.iter().map(|c| c.ndim()).collect();
        let counts: Vec<usize> = components.iter().map(|c| c.cell_count()).collect();
        let (dim_offsets, total_ndim, total_cells) = compose(&ndims, &counts)?;
        Ok(Self {
            components,
            dim_offsets,
            total_ndim,
            total_cells,
        })
    }

    /// Number of component spaces.
    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// Access the i-th component space.
    pub fn component(&self, i: usize) -> &dyn Space {
        &*self.components[i]
    }
}

impl Space for ProductSpace {
    fn ndim(&self) -> usize {
        self.total_ndim
    }

    fn cell_count(&self) -> usize {
        self.total_cells
    }

    fn axis_sizes(&self) -> SmallVec<[usize; 4]> {
        let mut sizes = SmallVec::with_capacity(self.total_ndim);
        for comp in &self.components {
            sizes.extend_from_slice(&comp.axis_sizes());
        }
        sizes
    }

    fn canonical_ordering(&self) -> Vec<Coord> {
        let orderings: Vec<Vec<Coord>> = self
            .components
            .iter()
            .map(|c| c.canonical_ordering())
            .collect();
        odometer(&orderings, self.total_ndim, self.total_cells)
    }

    fn act(&self, point: &Coord, shift: &Offset) -> Coord {
        let mut out = SmallVec::with_capacity(self.total_ndim);
        for i in 0..self.components.len() {
            let p = split(&self.dim_offsets, point, i);
            let s = split(&self.dim_offsets, shift, i);
            out.extend_from_slice(&self.components[i].act(&p, &s));
        }
        out
    }

    fn resolve(&self, point: &Coord) -> Result<AxisIndices, SpaceError> {
        if point.len() != self.total_ndim {
            return Err(SpaceError::OutOfBounds {
                coord: point.clone(),
                bounds: format!("expected {} axes, got {}", self.total_ndim, point.len()),
            });
        }
        let mut out = SmallVec::with_capacity(self.total_ndim);
        for i in 0..self.components.len() {
            let p = split(&self.dim_offsets, point, i);
            out.extend_from_slice(&self.components[i].resolve(&p)?);
        }
        Ok(out)
    }

    fn topology_eq(&self, other: &dyn Space) -> bool {
        let Some(o) = (other as &dyn std::any::Any).downcast_ref::<Self>() else {
            return false;
        };
        self.components.len() == o.components.len()
            && self
                .components
                .iter()
                .zip(o.components.iter())
                .all(|(a, b)| a.topology_eq(b.as_ref()))
    }
}

/// Cartesian product of N component groups.
///
/// Mirrors [`ProductSpace`]: offsets are concatenated per-component
/// offsets, negation and resolution delegate component-wise, and the
/// canonical ordering nests with the rightmost component fastest. Pair
/// a product group with a product space of matching arity and
/// per-component dimensionality.
pub struct ProductGroup {
    components: Vec<Box<dyn Group>>,
    dim_offsets: Vec<usize>,
    total_ndim: usize,
    total_shifts: usize,
}

impl fmt::Debug for ProductGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductGroup")
            .field("n_components", &self.components.len())
            .field("total_ndim", &self.total_ndim)
            .field("total_shifts", &self.total_shifts)
            .finish()
    }
}

impl ProductGroup {
    /// Create a product group from component groups.
    ///
    /// Returns `Err(SpaceError::InvalidComposition)` if `components`
    /// is empty or the total offset count overflows `usize`.
    pub fn new(components: Vec<Box<dyn Group>>) -> Result<Self, SpaceError> {
        let ndims: Vec<usize> = components.iter().map(|c| c.ndim()).collect();
        let counts: Vec<usize> = components.iter().map(|c| c.shift_count()).collect();
        let (dim_offsets, total_ndim, total_shifts) = compose(&ndims, &counts)?;
        Ok(Self {
            components,
            dim_offsets,
            total_ndim,
            total_shifts,
        })
    }

    /// Number of component groups.
    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// Access the i-th component group.
    pub fn component(&self, i: usize) -> &dyn Group {
        &*self.components[i]
    }
}

impl Group for ProductGroup {
    fn ndim(&self) -> usize {
        self.total_ndim
    }

    fn shift_count(&self) -> usize {
        self.total_shifts
    }

    fn axis_sizes(&self) -> SmallVec<[usize; 4]> {
        let mut sizes = SmallVec::with_capacity(self.total_ndim);
        for comp in &self.components {
            sizes.extend_from_slice(&comp.axis_sizes());
        }
        sizes
    }

    fn canonical_ordering(&self) -> Vec<Offset> {
        let orderings: Vec<Vec<Offset>> = self
            .components
            .iter()
            .map(|c| c.canonical_ordering())
            .collect();
        odometer(&orderings, self.total_ndim, self.total_shifts)
    }

    fn negate(&self, shift: &Offset) -> Offset {
        let mut out = SmallVec::with_capacity(self.total_ndim);
        for i in 0..self.components.len() {
            let s = split(&self.dim_offsets, shift, i);
            out.extend_from_slice(&self.components[i].negate(&s));
        }
        out
    }

    fn resolve(&self, shift: &Offset) -> Result<AxisIndices, SpaceError> {
        if shift.len() != self.total_ndim {
            return Err(SpaceError::OutOfBounds {
                coord: shift.clone(),
                bounds: format!("expected {} axes, got {}", self.total_ndim, shift.len()),
            });
        }
        let mut out = SmallVec::with_capacity(self.total_ndim);
        for i in 0..self.components.len() {
            let s = split(&self.dim_offsets, shift, i);
            out.extend_from_slice(&self.components[i].resolve(&s)?);
        }
        Ok(out)
    }

    fn structure_eq(&self, other: &dyn Group) -> bool {
        let Some(o) = (other as &dyn std::any::Any).downcast_ref::<Self>() else {
            return false;
        };
        self.components.len() == o.components.len()
            && self
                .components
                .iter()
                .zip(o.components.iter())
                .all(|(a, b)| a.structure_eq(b.as_ref()))
    }
}
