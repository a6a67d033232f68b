use crate::ai::types::Score;
use crate::engine::state::State;
use crate::engine::types::Player;

/// 探索窓の上限（正の無限大の代わり）。
pub const INFINITY: Score = Score::MAX;

/// 探索窓の下限（負の無限大の代わり）。
pub const NEG_INFINITY: Score = -INFINITY;

/// X の勝ち。
pub const X_WINS: Score = 1;

/// O の勝ち。
pub const O_WINS: Score = -1;

/// 引き分け（または未決着）。
pub const DRAW: Score = 0;

/// X 視点での局面の望ましさを返す。
///
/// 探索からは終局局面に対してのみ呼ばれる。
#[inline]
#[must_use]
pub fn evaluate(state: State) -> Score {
    match state.winner() {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}
