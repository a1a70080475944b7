//! `janggi_core::ai::random` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use janggi_core::ai::types::Ai;
use janggi_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で手詰まりや終局になればその時点で止める）。
fn position_after_plies(plies: u16) -> engine::Position {
    let mut game = engine::Game::initial();
    let mut red_agent = ai::random::Agent::new(u64::MIN);
    let mut blue_agent = ai::random::Agent::new(u64::MIN.wrapping_add(1));

    for _turn in u16::MIN..plies {
        let position = game.position();

        let mv = match game.side_to_move() {
            engine::Side::Red => red_agent.select_move(&position),
            engine::Side::Blue => blue_agent.select_move(&position),
        };

        let Some(choice) = mv else {
            break;
        };

        match game.play(choice) {
            Ok(engine::GameStatus::InProgress) => {}
            Ok(engine::GameStatus::Won(_)) | Err(_) => break,
        }
    }

    game.position()
}

/// ベンチ用に代表局面をいくつか用意する。
fn position_samples() -> [engine::Position; 3] {
    let p0 = engine::Position::initial();
    let p1 = position_after_plies(8);
    let p2 = position_after_plies(24);
    [p0, p1, p2]
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = position_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, position) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, position, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(input)),
                BatchSize::SmallInput,
            );
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
