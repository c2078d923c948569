//! Space and Group trait compliance test helpers.
//!
//! These functions verify that an implementation satisfies the
//! invariants required by the trait contracts. Reused across all
//! backend test modules (Line, Circle, Translations, CyclicShifts,
//! ProductSpace, ProductGroup).

use crate::group::Group;
use crate::space::Space;
use indexmap::IndexSet;

/// Assert that two calls to `canonical_ordering` return the same
/// sequence.
pub fn assert_space_ordering_deterministic(space: &dyn Space) {
    let a = space.canonical_ordering();
    let b = space.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count`
/// unique coordinates.
pub fn assert_space_ordering_complete(space: &dyn Space) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        space.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that the ordering is row-major over `axis_sizes`: the
/// resolved axis indices of the n-th coordinate, flattened with
/// last-axis-fastest strides, equal n. Image storage relies on this.
pub fn assert_space_ordering_row_major(space: &dyn Space) {
    let sizes = space.axis_sizes();
    assert_eq!(sizes.len(), space.ndim(), "axis_sizes length != ndim");
    assert_eq!(
        sizes.iter().product::<usize>(),
        space.cell_count(),
        "axis_sizes product != cell_count"
    );
    for (rank, coord) in space.canonical_ordering().iter().enumerate() {
        let idx = space
            .resolve(coord)
            .unwrap_or_else(|e| panic!("enumerated coord {coord:?} failed to resolve: {e}"));
        let mut flat = 0usize;
        for (i, size) in idx.iter().zip(sizes.iter()) {
            assert!(i < size, "axis index {i} >= axis size {size}");
            flat = flat * size + i;
        }
        assert_eq!(flat, rank, "ordering is not row-major at {coord:?}");
    }
}

/// Run all space compliance checks.
pub fn run_space_compliance(space: &dyn Space) {
    assert_space_ordering_deterministic(space);
    assert_space_ordering_complete(space);
    assert_space_ordering_row_major(space);
}

/// Assert that two calls to `canonical_ordering` return the same
/// sequence.
pub fn assert_group_ordering_deterministic(group: &dyn Group) {
    let a = group.canonical_ordering();
    let b = group.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `shift_count`
/// unique offsets.
pub fn assert_group_ordering_complete(group: &dyn Group) {
    let ordering = group.canonical_ordering();
    assert_eq!(
        ordering.len(),
        group.shift_count(),
        "canonical_ordering length ({}) != shift_count ({})",
        ordering.len(),
        group.shift_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        group.shift_count(),
        "canonical_ordering has duplicates"
    );
}

/// Assert that the ordering is row-major over `axis_sizes`, as for
/// spaces. Structuring-element storage relies on this.
pub fn assert_group_ordering_row_major(group: &dyn Group) {
    let sizes = group.axis_sizes();
    assert_eq!(sizes.len(), group.ndim(), "axis_sizes length != ndim");
    assert_eq!(
        sizes.iter().product::<usize>(),
        group.shift_count(),
        "axis_sizes product != shift_count"
    );
    for (rank, shift) in group.canonical_ordering().iter().enumerate() {
        let idx = group
            .resolve(shift)
            .unwrap_or_else(|e| panic!("enumerated shift {shift:?} failed to resolve: {e}"));
        let mut flat = 0usize;
        for (i, size) in idx.iter().zip(sizes.iter()) {
            assert!(i < size, "axis index {i} >= axis size {size}");
            flat = flat * size + i;
        }
        assert_eq!(flat, rank, "ordering is not row-major at {shift:?}");
    }
}

/// Assert that double negation returns every enumerated offset to
/// itself.
pub fn assert_group_negation_involutive(group: &dyn Group) {
    for shift in group.canonical_ordering() {
        let back = group.negate(&group.negate(&shift));
        assert_eq!(back, shift, "negation is not involutive at {shift:?}");
    }
}

/// Run all group compliance checks.
pub fn run_group_compliance(group: &dyn Group) {
    assert_group_ordering_deterministic(group);
    assert_group_ordering_complete(group);
    assert_group_ordering_row_major(group);
    assert_group_negation_involutive(group);
}

/// Assert that acting with a shift and then its negation lands on a
/// coordinate that resolves identically to the starting point, for
/// every point/shift pair.
pub fn run_action_compliance(space: &dyn Space, group: &dyn Group) {
    for point in space.canonical_ordering() {
        let home = space.resolve(&point).expect("enumerated coord resolves");
        for shift in group.canonical_ordering() {
            let there = space.act(&point, &shift);
            let back = space.act(&there, &group.negate(&shift));
            let resolved = space
                .resolve(&back)
                .unwrap_or_else(|e| panic!("round trip left the space at {point:?}+{shift:?}: {e}"));
            assert_eq!(
                resolved, home,
                "action round trip moved {point:?} under {shift:?}"
            );
        }
    }
}
