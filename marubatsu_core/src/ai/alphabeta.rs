use tracing::{debug, trace};

use crate::ai::search_tree::{GameTree, NodeId, TreeError};
use crate::ai::types::{Bot, Decision, Score, SearchError, decide};
use crate::ai::utility::{INFINITY, NEG_INFINITY, evaluate};
use crate::engine::state::State;
use crate::engine::types::Player;


/// アルファベータ枝刈りでゲーム木を部分的に展開して手を選ぶボット。
///
/// 選ぶ手の価値はミニマックスと同じで、展開するノード数は常にそれ以下。
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
        let mut search = Search::new(state);
        let root = search.tree.root();

        let value = match player {
            Player::X => search.find_max(root, NEG_INFINITY, INFINITY)?,
            Player::O => search.find_min(root, NEG_INFINITY, INFINITY)?,
        };
        let decision = decide(&search.tree, root, value)?;

        debug!(
            bot = "alphabeta",
            mv = %decision.mv(),
            work = decision.work(),
            cutoffs = search.cutoffs,
            value,
            "move chosen"
        );
        Ok(decision)
    }
}

/// 1回の手選択で使う探索状態。
#[derive(Debug)]
struct Search {
    /// 枝刈りした回数。
    cutoffs: u64,
    /// 探索中のゲーム木。
    tree: GameTree,
}

impl Search {
    /// 子の最小値のうち最大のものを返す（X の手番）。
    ///
    /// - `alpha`: この経路で X に保証されている最大値
    /// - `beta`: この経路で O に保証されている最小値
    fn find_max(
        &mut self,
        node: NodeId,
        mut alpha: Score,
        beta: Score,
    ) -> Result<Score, SearchError> {
        let state = self.tree.state(node).ok_or(TreeError::UnknownNode)?;
        if state.is_terminal() {
            return Ok(evaluate(state));
        }

        let mut max = NEG_INFINITY;
        while self.tree.has_next_child(node) {
            let child = self.tree.next_child(node)?;
            let value = self.find_min(child, alpha, beta)?;
            self.tree.set_value(child, value)?;

            if value > max {
                max = value;
            }

            // 祖先の O はこの枝を選ばない。
            if max >= beta {
                self.prune(node, max);
                return Ok(max);
            }
            if max > alpha {
                alpha = max;
            }
        }
        Ok(max)
    }

    /// 子の最大値のうち最小のものを返す（O の手番）。
    ///
    /// - `alpha`: この経路で X に保証されている最大値
    /// - `beta`: この経路で O に保証されている最小値
    fn find_min(
        &mut self,
        node: NodeId,
        alpha: Score,
        mut beta: Score,
    ) -> Result<Score, SearchError> {
        let state = self.tree.state(node).ok_or(TreeError::UnknownNode)?;
        if state.is_terminal() {
            return Ok(evaluate(state));
        }

        let mut min = INFINITY;
        while self.tree.has_next_child(node) {
            let child = self.tree.next_child(node)?;
            let value = self.find_max(child, alpha, beta)?;
            self.tree.set_value(child, value)?;

            if value < min {
                min = value;
            }

            // 祖先の X はこの枝を選ばない。
            if min <= alpha {
                self.prune(node, min);
                return Ok(min);
            }
            if min < beta {
                beta = min;
            }
        }
        Ok(min)
    }

    /// `state` をルートとする探索状態を生成する。
    fn new(state: State) -> Self {
        Self {
            cutoffs: 0,
            tree: GameTree::new(state),
        }
    }

    /// 枝刈りを記録する。
    fn prune(&mut self, node: NodeId, value: Score) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
        trace!(pending = self.tree.has_next_child(node), value, "cutoff");
    }
}
