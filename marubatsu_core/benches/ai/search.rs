//! `ai::minmax` と `ai::alphabeta` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use marubatsu_core::ai::types::Bot as _;
use marubatsu_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// ベンチ用の代表局面（初期局面、中央→角の後）。
fn state_samples() -> [engine::State; 2] {
    let initial = engine::State::initial();
    let opened = initial
        .transition(engine::Move::new(engine::Player::X, 1, 1))
        .and_then(|state| state.transition(engine::Move::new(engine::Player::O, 0, 0)))
        .unwrap_or(initial);
    [initial, opened]
}

/// 両探索ボットの `choose_move` を同じ局面で計測する。
fn bench_choose_move(criterion: &mut Criterion) {
    let samples = state_samples();
    let mut group = criterion.benchmark_group("ai/search/choose_move");
    group.sample_size(10);

    for (index, state) in samples.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("minmax", index), state, |bench, input| {
            bench.iter(|| black_box(ai::MinMaxBot::new().choose_move(*input)));
        });
        group.bench_with_input(BenchmarkId::new("alphabeta", index), state, |bench, input| {
            bench.iter(|| black_box(ai::AlphaBetaBot::new().choose_move(*input)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_choose_move(&mut criterion);
    criterion.final_summary();
}
