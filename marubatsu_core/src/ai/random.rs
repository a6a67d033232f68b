use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom as _;
use tracing::debug;

use crate::ai::search_tree::GameTree;
use crate::ai::types::{Bot, Decision, SearchError};
use crate::engine::state::State;

/// 直下の子をすべて展開し、その中から一様ランダムに1手を選ぶボット。
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: StdRng,
}

impl Agent {
    /// `seed` を用いて初期化する。同じ `seed` なら同じ手順を選ぶ。
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for Agent {
    #[inline]
    fn choose_move(&mut self, state: State) -> Result<Decision, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::TerminalState);
        }

        let mut tree = GameTree::new(state);
        let root = tree.root();
        while tree.has_next_child(root) {
            tree.next_child(root)?;
        }

        let child = tree
            .children(root)
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoDecision)?;
        let mv = tree.move_of(child).ok_or(SearchError::NoDecision)?;
        let decision = Decision::new(mv, tree.size(root));

        debug!(bot = "random", mv = %mv, work = decision.work(), "move chosen");
        Ok(decision)
    }
}
