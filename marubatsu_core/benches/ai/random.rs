//! `ai::random` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use marubatsu_core::ai::types::Bot as _;
use marubatsu_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn state_after_plies(plies: u8) -> engine::State {
    let mut agent = ai::RandomBot::new(u64::MIN);
    let mut state = engine::State::initial();

    for _ply in u8::MIN..plies {
        let next = agent
            .choose_move(state)
            .ok()
            .and_then(|decision| state.transition(decision.mv()).ok());
        match next {
            Some(value) if !value.is_terminal() => state = value,
            _ => break,
        }
    }

    state
}

/// `random::Agent::choose_move` を計測する。
fn bench_choose_move(criterion: &mut Criterion) {
    let samples = [state_after_plies(0), state_after_plies(2), state_after_plies(5)];
    let mut group = criterion.benchmark_group("ai/random/choose_move");

    for (index, state) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("state", index);
        group.bench_with_input(bench_id, state, |bench, input| {
            bench.iter_batched(
                || ai::RandomBot::new(u64::MIN),
                |mut agent| black_box(agent.choose_move(*input)),
                BatchSize::SmallInput,
            );
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
