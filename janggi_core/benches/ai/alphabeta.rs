//! `janggi_core::ai::alphabeta` の性能計測（深さ別の1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use janggi_core::{ai, engine};
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args().sample_size(10)
}

/// 初期局面で深さ 1..=3 の探索を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let position = engine::Position::initial();
    let mut group = criterion.benchmark_group("ai/alphabeta/select_move");

    for depth in 1_u8..=ai::alphabeta::DEFAULT_DEPTH {
        let bench_id = BenchmarkId::new("depth", depth);
        group.bench_with_input(bench_id, &depth, |bench, &input| {
            let mut rng = ChaCha8Rng::seed_from_u64(u64::MIN);
            bench.iter(|| {
                black_box(ai::alphabeta::select_move(
                    black_box(&position),
                    input,
                    engine::Side::Blue,
                    &mut rng,
                ))
            });
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
