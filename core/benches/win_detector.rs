use bingo_core::*;
use criterion::{Criterion, criterion_group, criterion_main};
use ndarray::Array2;
use std::hint::black_box;

fn evaluate_masks(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for size in GridSize::ALL {
        let side = usize::from(size.get());
        let full = Array2::from_elem((side, side), true);
        let checker = Array2::from_shape_fn((side, side), |(row, col)| (row + col) % 2 == 0);

        group.bench_function(format!("full/{side}"), |b| {
            b.iter(|| evaluate(black_box(&full), side))
        });
        group.bench_function(format!("checker/{side}"), |b| {
            b.iter(|| evaluate(black_box(&checker), side))
        });
    }

    group.finish();
}

fn play_board(c: &mut Criterion) {
    c.bench_function("select_all/5", |b| {
        b.iter(|| {
            let mut engine =
                BingoEngine::new(GameConfig::default(), SequentialBoardGenerator).unwrap();
            for coords in iter_coords(5) {
                if let SelectOutcome::Bingo { timer, .. } = engine.select_cell(coords) {
                    engine.fire_timer(timer.token);
                }
            }
            black_box(engine.full_house_shown())
        })
    });
}

criterion_group!(benches, evaluate_masks, play_board);
criterion_main!(benches);
