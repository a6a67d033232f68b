use core::fmt;

use thiserror::Error;
use tracing::{info, trace};

use crate::ai::types::{Bot, SearchError};
use crate::engine::state::{State, TransitionError};
use crate::engine::types::Player;

/// 対局の進行に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum PlayError {
    /// ボットが手を選べなかった。
    #[error("bot failed to choose a move: {0}")]
    Search(#[from] SearchError),
    /// ボットが選んだ手を適用できなかった。
    #[error("bot chose an illegal move: {0}")]
    Transition(#[from] TransitionError),
}

/// 1局の結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GameRecord {
    /// 終局局面。
    final_state: State,
    /// O が展開したノード数の合計。
    o_work: usize,
    /// 指した手数。
    plies: u8,
    /// X が展開したノード数の合計。
    x_work: usize,
}

impl GameRecord {
    /// 終局局面を返す。
    #[inline]
    #[must_use]
    pub const fn final_state(self) -> State {
        self.final_state
    }

    /// O が展開したノード数の合計を返す。
    #[inline]
    #[must_use]
    pub const fn o_work(self) -> usize {
        self.o_work
    }

    /// 指した手数を返す。
    #[inline]
    #[must_use]
    pub const fn plies(self) -> u8 {
        self.plies
    }

    /// 勝者を返す（引き分けなら `None`）。
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        self.final_state.winner()
    }

    /// X が展開したノード数の合計を返す。
    #[inline]
    #[must_use]
    pub const fn x_work(self) -> usize {
        self.x_work
    }
}

/// 複数局の集計。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SeriesSummary {
    /// 対局数。
    games: usize,
    /// O の勝ち数。
    o_wins: usize,
    /// O が展開したノード数の合計。
    o_work: usize,
    /// 引き分け数。
    ties: usize,
    /// X の勝ち数。
    x_wins: usize,
    /// X が展開したノード数の合計。
    x_work: usize,
}

impl SeriesSummary {
    /// 対局数を返す。
    #[inline]
    #[must_use]
    pub const fn games(self) -> usize {
        self.games
    }

    /// O が1局あたりに展開した平均ノード数を返す。
    #[inline]
    #[must_use]
    pub fn o_average_work(self) -> f64 {
        average(self.o_work, self.games)
    }

    /// O の勝ち数を返す。
    #[inline]
    #[must_use]
    pub const fn o_wins(self) -> usize {
        self.o_wins
    }

    /// 1局分の結果を加える。
    #[inline]
    pub fn record(&mut self, game: GameRecord) {
        self.games = self.games.saturating_add(1);
        self.x_work = self.x_work.saturating_add(game.x_work);
        self.o_work = self.o_work.saturating_add(game.o_work);

        let slot = match game.winner() {
            Some(Player::X) => &mut self.x_wins,
            Some(Player::O) => &mut self.o_wins,
            None => &mut self.ties,
        };
        *slot = slot.saturating_add(1);
    }

    /// 引き分け数を返す。
    #[inline]
    #[must_use]
    pub const fn ties(self) -> usize {
        self.ties
    }

    /// X が1局あたりに展開した平均ノード数を返す。
    #[inline]
    #[must_use]
    pub fn x_average_work(self) -> f64 {
        average(self.x_work, self.games)
    }

    /// X の勝ち数を返す。
    #[inline]
    #[must_use]
    pub const fn x_wins(self) -> usize {
        self.x_wins
    }
}

impl fmt::Display for SeriesSummary {
    /// X の平均は小数（整数値でも `.0` を付ける）、O の平均は切り捨てた整数で出す。
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            formatter,
            "X won {}/{} games and considered about {:?} moves per game.",
            self.x_wins,
            self.games,
            self.x_average_work()
        )?;
        writeln!(
            formatter,
            "O won {}/{} games and considered about {} moves per game.",
            self.o_wins,
            self.games,
            self.o_work.checked_div(self.games).unwrap_or(0)
        )?;
        write!(formatter, "{} games tied.", self.ties)
    }
}

/// `total / count` を返す（`count == 0` なら 0）。
#[expect(
    clippy::as_conversions,
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "work totals stay far below 2^52"
)]
fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    total as f64 / count as f64
}

/// 初期局面から終局まで `x_bot` と `o_bot` を対局させる。
///
/// # Errors
///
/// ボットが手を選べなかった場合は `PlayError::Search`、
/// 選んだ手が不正だった場合は `PlayError::Transition` を返す。
///
#[inline]
pub fn play_game<X, O>(x_bot: &mut X, o_bot: &mut O) -> Result<GameRecord, PlayError>
where
    X: Bot + ?Sized,
    O: Bot + ?Sized,
{
    let mut state = State::initial();
    let mut x_work = 0_usize;
    let mut o_work = 0_usize;
    let mut plies = 0_u8;

    while let Some(player) = state.current_player() {
        let decision = match player {
            Player::X => x_bot.choose_move(state)?,
            Player::O => o_bot.choose_move(state)?,
        };

        match player {
            Player::X => x_work = x_work.saturating_add(decision.work()),
            Player::O => o_work = o_work.saturating_add(decision.work()),
        }

        state = state.transition(decision.mv())?;
        plies = plies.saturating_add(1);
    }

    trace!(winner = ?state.winner(), plies, x_work, o_work, "game over");

    Ok(GameRecord {
        final_state: state,
        o_work,
        plies,
        x_work,
    })
}

/// `games` 局を独立に対局させて集計する。
///
/// 各局の開始時に `new_bot` で両者のボットを作り直す。
///
/// # Errors
///
/// いずれかの対局が `PlayError` で失敗した場合、そのエラーを返す。
///
#[inline]
pub fn play_series<B, F>(games: usize, mut new_bot: F) -> Result<SeriesSummary, PlayError>
where
    B: Bot,
    F: FnMut(Player) -> B,
{
    let mut summary = SeriesSummary::default();

    for _game in 0..games {
        let mut x_bot = new_bot(Player::X);
        let mut o_bot = new_bot(Player::O);
        let record = play_game(&mut x_bot, &mut o_bot)?;
        summary.record(record);
    }

    info!(
        games = summary.games,
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        ties = summary.ties,
        "series finished"
    );
    Ok(summary)
}
