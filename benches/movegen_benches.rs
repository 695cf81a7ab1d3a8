use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chessrays::{
    moves::{batch::generate_all_sequential, sliding::walk_ray},
    prelude::*,
};

fn bench_rays(c: &mut Criterion) {
    let mut group = c.benchmark_group("rays");
    let empty = Board::default();
    let kiwipete = Board::from_fen(KIWIPETE).unwrap();
    let d4 = Square::from_str("d4").unwrap();
    let f3 = Square::from_str("f3").unwrap();

    group.bench_function("walk_ray_empty_board", |b| {
        b.iter(|| {
            for &delta in Direction::ALL.iter() {
                black_box(walk_ray(&empty, black_box(d4), Side::White, delta));
            }
        })
    });

    group.bench_function("queen_kiwipete_f3", |b| {
        let queen = PieceInfo::new(Piece::Queen, Side::White);
        b.iter(|| black_box(queen.generate(&kiwipete, black_box(f3))))
    });

    group.finish();
}

fn bench_tracked(c: &mut Criterion) {
    let board = Board::from_fen(KIWIPETE).unwrap();
    let f3 = Square::from_str("f3").unwrap();

    c.bench_function("tracked_refresh", |b| {
        b.iter_batched(
            || TrackedPiece::from_board(&board, f3).unwrap(),
            |mut piece| {
                piece.refresh(&board).unwrap();
                black_box(piece)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_all");
    let positions = [("startpos", START_FEN), ("kiwipete", KIWIPETE)];

    for (name, fen) in positions {
        let board = Board::from_fen(fen).unwrap();
        group.bench_function(format!("{name}_default"), |b| {
            b.iter(|| black_box(generate_all(black_box(&board), None)))
        });
        group.bench_function(format!("{name}_sequential"), |b| {
            b.iter(|| black_box(generate_all_sequential(black_box(&board), None)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rays, bench_tracked, bench_batch);
criterion_main!(benches);
