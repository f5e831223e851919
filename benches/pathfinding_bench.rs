use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use hexmove::grid::{HexCoord, HexGrid, HexLayout};
use hexmove::pathfinding::{cells_in_movement_range, find_path};

fn open_grid_bench(c: &mut Criterion) {
    let grid = HexGrid::new(30, 30, HexLayout::default());
    let start = HexCoord::new(0, 0);
    let goal = HexCoord::new(29, 29);

    c.bench_function("find_path_30x30_open", |b| {
        b.iter(|| find_path(&grid, black_box(start), black_box(goal), 1.0))
    });
}

fn walled_grid_bench(c: &mut Criterion) {
    let mut grid = HexGrid::new(30, 30, HexLayout::default());
    // Two staggered walls force long detours
    for r in 0..25 {
        grid.set_enabled(HexCoord::new(10, r), false);
    }
    for r in 5..30 {
        grid.set_enabled(HexCoord::new(20, r), false);
    }
    let start = HexCoord::new(0, 15);
    let goal = HexCoord::new(29, 15);

    c.bench_function("find_path_30x30_walled", |b| {
        b.iter(|| find_path(&grid, black_box(start), black_box(goal), 1.0))
    });
}

fn movement_range_bench(c: &mut Criterion) {
    let grid = HexGrid::new(30, 30, HexLayout::default());
    let start = HexCoord::new(15, 15);

    c.bench_function("movement_range_budget_8", |b| {
        b.iter(|| cells_in_movement_range(&grid, black_box(start), 8))
    });
}

criterion_group!(benches, open_grid_bench, walled_grid_bench, movement_range_bench);
criterion_main!(benches);
