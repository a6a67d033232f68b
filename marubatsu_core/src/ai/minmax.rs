use tracing::debug;

use crate::ai::search_tree::{GameTree, NodeId, TreeError};
use crate::ai::types::{Bot, Decision, Score, SearchError, decide};
use crate::ai::utility::{INFINITY, NEG_INFINITY, evaluate};
use crate::engine::state::State;
use crate::engine::types::Player;

/// ゲーム木をすべて展開してミニマックス法で手を選ぶボット。
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Agent;

impl Agent {
    /// 生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Bot for Agent {
    #[inline]
    fn choose_move(&mut self, state: State) -> Result<Decision, SearchError> {
        let player = state.current_player().ok_or(SearchError::TerminalState)?;
        let mut tree = GameTree::new(state);
        let root = tree.root();

        let value = search(&mut tree, root, player)?;
        let decision = decide(&tree, root, value)?;

        debug!(
            bot = "minmax",
            mv = %decision.mv(),
            work = decision.work(),
            value,
            "move chosen"
        );
        Ok(decision)
    }
}

/// `state` のミニマックス値（X 視点）を全探索で求める。
///
/// # Errors
///
/// ゲーム木の操作に失敗した場合は `SearchError::Tree` を返す。
///
#[inline]
pub fn minimax_value(state: State) -> Result<Score, SearchError> {
    let Some(player) = state.current_player() else {
        return Ok(evaluate(state));
    };

    let mut tree = GameTree::new(state);
    let root = tree.root();
    search(&mut tree, root, player)
}

/// 手番に応じて最大化/最小化の探索を始める。
fn search(tree: &mut GameTree, root: NodeId, player: Player) -> Result<Score, SearchError> {
    match player {
        Player::X => find_max(tree, root),
        Player::O => find_min(tree, root),
    }
}

/// 子の最小値のうち最大のものを返す（X の手番）。
fn find_max(tree: &mut GameTree, node: NodeId) -> Result<Score, SearchError> {
    let state = tree.state(node).ok_or(TreeError::UnknownNode)?;
    if state.is_terminal() {
        return Ok(evaluate(state));
    }

    let mut max = NEG_INFINITY;
    while tree.has_next_child(node) {
        let child = tree.next_child(node)?;
        let value = find_min(tree, child)?;
        tree.set_value(child, value)?;

        if value > max {
            max = value;
        }
    }
    Ok(max)
}

/// 子の最大値のうち最小のものを返す（O の手番）。
fn find_min(tree: &mut GameTree, node: NodeId) -> Result<Score, SearchError> {
    let state = tree.state(node).ok_or(TreeError::UnknownNode)?;
    if state.is_terminal() {
        return Ok(evaluate(state));
    }

    let mut min = INFINITY;
    while tree.has_next_child(node) {
        let child = tree.next_child(node)?;
        let value = find_max(tree, child)?;
        tree.set_value(child, value)?;

        if value < min {
            min = value;
        }
    }
    Ok(min)
}
