//! ボット同士を繰り返し対局させ、勝敗と探索量を表示する CLI。

use std::error::Error;

use clap::{Parser, ValueEnum};
use marubatsu_core::ai::types::{Bot, Decision, SearchError};
use marubatsu_core::{ai, arena, engine};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};
use tracing::Level;
use tracing::info;

/// ボットの種類。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum BotKind {
    /// アルファベータ探索。
    Alphabeta,
    /// ミニマックス探索（全展開）。
    Minmax,
    /// ランダム。
    Random,
}

/// 対局ごとに作る、どちらかのプレイヤーを担当するボット。
#[derive(Debug)]
enum Controller {
    Alphabeta(ai::AlphaBetaBot),
    Minmax(ai::MinMaxBot),
    Random(ai::RandomBot),
}

impl Controller {
    /// `kind` のボットを作る。ランダムボットには `seeds` から種を引く。
    fn new(kind: BotKind, seeds: &mut StdRng) -> Self {
        match kind {
            BotKind::Alphabeta => Self::Alphabeta(ai::AlphaBetaBot::new()),
            BotKind::Minmax => Self::Minmax(ai::MinMaxBot::new()),
            BotKind::Random => Self::Random(ai::RandomBot::new(seeds.random())),
        }
    }
}

impl Bot for Controller {
    fn choose_move(&mut self, state: engine::State) -> Result<Decision, SearchError> {
        match self {
            Self::Alphabeta(agent) => agent.choose_move(state),
            Self::Minmax(agent) => agent.choose_move(state),
            Self::Random(agent) => agent.choose_move(state),
        }
    }
}

/// 〇×ゲームのボット対戦を行う。
#[derive(Debug, Parser)]
#[command(name = "marubatsu", version)]
struct Args {
    /// 対局数。
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// ログを JSON 形式で出力する。
    #[arg(long)]
    json: bool,

    /// O を担当するボット。
    #[arg(long, value_enum, default_value_t = BotKind::Alphabeta)]
    o: BotKind,

    /// ランダムボットの種を作る乱数の種。
    #[arg(long, default_value_t = 9)]
    seed: u64,

    /// ログの詳細度（繰り返すほど詳細）。
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// X を担当するボット。
    #[arg(long, value_enum, default_value_t = BotKind::Random)]
    x: BotKind,
}

/// 詳細度からログレベルを決める。
const fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// ログ出力（標準エラー）を初期化する。
fn init_tracing(args: &Args) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr);

    if args.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(&args);

    info!(x = ?args.x, o = ?args.o, games = args.games, seed = args.seed, "starting");
    println!("Playing {} games...", args.games);

    let mut seeds = StdRng::seed_from_u64(args.seed);
    let summary = arena::play_series(args.games, |player| match player {
        engine::Player::X => Controller::new(args.x, &mut seeds),
        _ => Controller::new(args.o, &mut seeds),
    })?;

    println!("Results:");
    println!("{summary}");
    Ok(())
}
