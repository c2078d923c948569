//! Criterion micro-benchmarks for the morphology operators.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use morpho_lattices::BooleanLattice;
use morpho_ops::{dilation, erosion, Image, StructuringElement};
use morpho_space::{Circle, CyclicShifts, Group, Line, ProductGroup, ProductSpace, Space, Translations};
use std::sync::Arc;

fn cylinder(pitches: u32, steps: u32) -> Arc<dyn Space> {
    Arc::new(
        ProductSpace::new(vec![
            Box::new(Circle::new(pitches).unwrap()),
            Box::new(Line::new(steps).unwrap()),
        ])
        .unwrap(),
    )
}

fn kernel_group(pitches: u32, depth: u32) -> Arc<dyn Group> {
    Arc::new(
        ProductGroup::new(vec![
            Box::new(CyclicShifts::new(pitches).unwrap()),
            Box::new(Translations::new(depth).unwrap()),
        ])
        .unwrap(),
    )
}

/// Deterministic sparse fill: roughly one cell in seven set.
fn sparse_data(cells: usize) -> Vec<bool> {
    (0..cells)
        .map(|i| (i as u64).wrapping_mul(6364136223846793007) % 7 == 0)
        .collect()
}

/// Benchmark: Erode a 12x64 cylinder roll by a 12x2 kernel (24 shifts
/// per cell, 768 cells).
fn bench_erosion_cylinder(c: &mut Criterion) {
    let space = cylinder(12, 64);
    let shape: Vec<usize> = space.axis_sizes().to_vec();
    let image = Image::new(space, BooleanLattice, &shape, sparse_data(12 * 64)).unwrap();

    let group = kernel_group(12, 2);
    let gshape: Vec<usize> = group.axis_sizes().to_vec();
    let element =
        StructuringElement::new(group, BooleanLattice, &gshape, sparse_data(24)).unwrap();

    c.bench_function("erosion_cylinder_12x64", |b| {
        b.iter(|| {
            let out = erosion(black_box(&image), black_box(&element)).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: Dilate the same roll by the same kernel.
fn bench_dilation_cylinder(c: &mut Criterion) {
    let space = cylinder(12, 64);
    let shape: Vec<usize> = space.axis_sizes().to_vec();
    let image = Image::new(space, BooleanLattice, &shape, sparse_data(12 * 64)).unwrap();

    let group = kernel_group(12, 2);
    let gshape: Vec<usize> = group.axis_sizes().to_vec();
    let element =
        StructuringElement::new(group, BooleanLattice, &gshape, sparse_data(24)).unwrap();

    c.bench_function("dilation_cylinder_12x64", |b| {
        b.iter(|| {
            let out = dilation(black_box(&image), black_box(&element)).unwrap();
            black_box(&out);
        });
    });
}

/// Benchmark: Opening (erosion then dilation) on a long line, the
/// denoising workload.
fn bench_opening_line(c: &mut Criterion) {
    let space: Arc<dyn Space> = Arc::new(Line::new(4096).unwrap());
    let shape: Vec<usize> = space.axis_sizes().to_vec();
    let image = Image::new(space, BooleanLattice, &shape, sparse_data(4096)).unwrap();

    let group: Arc<dyn Group> = Arc::new(Translations::new(4).unwrap());
    let element =
        StructuringElement::new(group, BooleanLattice, &[4], vec![true; 4]).unwrap();

    c.bench_function("opening_line_4096", |b| {
        b.iter(|| {
            let eroded = erosion(black_box(&image), &element).unwrap();
            let opened = dilation(&eroded, &element).unwrap();
            black_box(&opened);
        });
    });
}

criterion_group!(
    benches,
    bench_erosion_cylinder,
    bench_dilation_cylinder,
    bench_opening_line
);
criterion_main!(benches);
