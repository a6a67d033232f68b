use core::fmt;

use thiserror::Error;

use crate::ai::search_tree::{GameTree, NodeId, TreeError};
use crate::engine::state::State;
use crate::engine::types::Move;

/// 評価値（X 視点の効用。X は最大化、O は最小化する）。
pub type Score = i32;

/// ボットが選んだ手と、そのために展開したノード数。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Decision {
    /// 選んだ手。
    mv: Move,
    /// 探索中に展開したゲーム木のノード数。
    work: usize,
}

impl Decision {
    /// 選んだ手を返す。
    #[inline]
    #[must_use]
    pub const fn mv(self) -> Move {
        self.mv
    }

    /// `mv` と `work` から生成する。
    #[inline]
    #[must_use]
    pub const fn new(mv: Move, work: usize) -> Self {
        Self { mv, work }
    }

    /// 展開したノード数を返す。
    #[inline]
    #[must_use]
    pub const fn work(self) -> usize {
        self.work
    }
}

impl fmt::Display for Decision {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mv, formatter)
    }
}

/// 手の選択に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// 探索値に一致する子が見つからなかった。
    #[error("no child of the root carries the backed-up value")]
    NoDecision,
    /// 終局局面で手を求められた。
    #[error("cannot choose a move in a terminal state")]
    TerminalState,
    /// ゲーム木の操作に失敗した。
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// 手を選択するボット。
pub trait Bot {
    /// 現在局面から次の手を選択する。
    ///
    /// # Errors
    ///
    /// 終局局面を渡された場合は `SearchError::TerminalState` を返す。
    fn choose_move(&mut self, state: State) -> Result<Decision, SearchError>;
}

impl<B: Bot + ?Sized> Bot for Box<B> {
    #[inline]
    fn choose_move(&mut self, state: State) -> Result<Decision, SearchError> {
        (**self).choose_move(state)
    }
}

/// 探索済みの木から、ルートの値 `value` を持つ最初の子の手を選ぶ。
///
/// 同値の子が複数あれば行優先順で先のものを選ぶ。
pub(crate) fn decide(
    tree: &GameTree,
    root: NodeId,
    value: Score,
) -> Result<Decision, SearchError> {
    let child = tree
        .children(root)
        .iter()
        .copied()
        .find(|&child| tree.value(child) == Some(value))
        .ok_or(SearchError::NoDecision)?;
    let mv = tree.move_of(child).ok_or(SearchError::NoDecision)?;

    Ok(Decision::new(mv, tree.size(root)))
}
