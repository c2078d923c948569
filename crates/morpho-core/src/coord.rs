//! The [`Coord`] and [`Offset`] type aliases.

use smallvec::SmallVec;

/// A point in a morphological space.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for spaces up to
/// 4 axes, covering lines, pitch circles, and their products. Points
/// are created profusely inside the operator loops, so staying off the
/// heap matters. Higher-dimensional products spill transparently.
pub type Coord = SmallVec<[i32; 4]>;

/// A group element — a discrete offset acting on a space.
///
/// Same representation as [`Coord`]; the owning group supplies the
/// algebra (negation, enumeration order, array resolution).
pub type Offset = SmallVec<[i32; 4]>;

/// Per-axis array indices produced by coordinate resolution.
///
/// One non-negative index per axis of the owning space or group,
/// in axis order. Containers turn these into flat offsets using
/// row-major strides.
pub type AxisIndices = SmallVec<[usize; 4]>;
