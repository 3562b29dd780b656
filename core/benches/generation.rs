use criterion::{Criterion, criterion_group, criterion_main};
use minado_core::*;
use std::hint::black_box;

fn generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("rejection", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(Board::generate(RejectionSampler::new(seed)))
        })
    });

    group.bench_function("shuffle", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(Board::generate(ShuffleSampler::new(seed)))
        })
    });

    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let corner: Vec<Coord2> = (0..MINES as Coord).map(|col| (9, col)).collect();
    let layout = MineLayout::from_mine_coords(&corner).unwrap();
    let board = Board::from_layout(&layout);

    c.bench_function("flood_fill_full_board", |b| {
        b.iter(|| {
            let mut board = board.clone();
            black_box(board.reveal((0, 0)))
        })
    });
}

criterion_group!(benches, generators, flood_fill);
criterion_main!(benches);
