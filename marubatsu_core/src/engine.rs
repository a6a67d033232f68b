/// 局面（盤面＋手番＋勝者）と遷移規則の実装。
pub mod state;
/// 手番・手などの基本型。
pub mod types;

pub type State = state::State;
pub type Player = types::Player;
pub type Move = types::Move;
pub type TransitionError = state::TransitionError;
