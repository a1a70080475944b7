//! `janggi_core::engine` の性能計測（合法手生成、着手適用）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use janggi_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 初期局面（赤番）での代表的な手（中央の卒を前へ）を返す。
fn initial_red_move() -> Option<engine::Move> {
    let from = engine::Square::new(6, 4)?;
    let to = engine::Square::new(5, 4)?;
    Some(engine::Move::new(from, to))
}

/// `Position::apply_move` を計測する。
fn bench_apply_move(criterion: &mut Criterion) {
    let Some(mv) = initial_red_move() else {
        return;
    };

    criterion.bench_function("engine/apply_move_initial", |bench| {
        bench.iter_batched(
            engine::Position::initial,
            |mut position| black_box(position.apply_move(mv)),
            BatchSize::SmallInput,
        );
    });
}

/// 全合法手の列挙を計測する。
fn bench_list_moves(criterion: &mut Criterion) {
    let position = engine::Position::initial();
    criterion.bench_function("engine/list_moves_initial", |bench| {
        bench.iter(|| black_box(ai::move_list::list_moves(black_box(&position))));
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_apply_move(&mut criterion);
    bench_list_moves(&mut criterion);

    criterion.final_summary();
}
