use alloc::vec;

use thiserror::Error;

use crate::ai::types::Score;
use crate::engine::state::{State, TransitionError};
use crate::engine::types::Move;

/// ゲーム木の操作に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum TreeError {
    /// 未展開の手が残っていない。
    #[error("no unexpanded moves remain for this node")]
    Exhausted,
    /// 子局面の生成に失敗した。
    #[error(transparent)]
    Transition(#[from] TransitionError),
    /// この木に属さないノード。
    #[error("node does not belong to this tree")]
    UnknownNode,
}

/// ゲーム木のノードを指すインデックス。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(
    /// `GameTree::nodes` 上の位置。
    usize,
);

/// ゲーム木の1ノード。
#[derive(Debug)]
struct Node {
    /// 展開済みの子（展開順）。
    children: Vec<NodeId>,
    /// この局面に至った手（ルートは `None`）。
    mv: Option<Move>,
    /// 親ノード（ルートは `None`）。所有はしない。
    parent: Option<NodeId>,
    /// まだ子として展開していない手。
    pending: vec::IntoIter<Move>,
    /// このノードの局面。
    state: State,
    /// 探索で書き込まれる効用値。
    value: Score,
}

impl Node {
    /// 未展開の手を `state` の合法手で初期化して生成する。
    fn new(mv: Option<Move>, parent: Option<NodeId>, state: State) -> Self {
        Self {
            children: Vec::new(),
            mv,
            parent,
            pending: state.available_moves().into_iter(),
            state,
            value: 0,
        }
    }
}

/// 探索中に必要な子だけを展開していくゲーム木。
///
/// ノードはすべて木が所有し（アリーナ）、親への参照はインデックスで持つ。
/// 木を破棄すると全ノードが解放される。
#[derive(Debug)]
pub struct GameTree {
    /// ノード本体。先頭がルート。
    nodes: Vec<Node>,
}

impl GameTree {
    /// 展開済みの子を展開順に返す。
    #[inline]
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// 未展開の手が残っているかを返す。
    #[inline]
    #[must_use]
    pub fn has_next_child(&self, id: NodeId) -> bool {
        self.node(id)
            .is_some_and(|node| !node.pending.as_slice().is_empty())
    }

    /// ノードが1つもないかを返す（ルートがあるため常に `false`）。
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 木全体の展開済みノード数を返す。
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// ノードの局面に至った手を返す。
    #[inline]
    #[must_use]
    pub fn move_of(&self, id: NodeId) -> Option<Move> {
        self.node(id)?.mv
    }

    /// `state` をルートとする木を生成する。
    #[inline]
    #[must_use]
    pub fn new(state: State) -> Self {
        Self {
            nodes: vec![Node::new(None, None, state)],
        }
    }

    /// 次の未展開の手を消費して子ノードを生成し、その ID を返す。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `TreeError::UnknownNode`: `id` がこの木のノードでない場合
    /// - `TreeError::Exhausted`: 未展開の手が残っていない場合
    /// - `TreeError::Transition`: 子局面の生成に失敗した場合
    ///
    #[inline]
    pub fn next_child(&mut self, id: NodeId) -> Result<NodeId, TreeError> {
        let child = NodeId(self.nodes.len());
        let node = self.nodes.get_mut(id.0).ok_or(TreeError::UnknownNode)?;
        let mv = node.pending.next().ok_or(TreeError::Exhausted)?;
        let state = node.state.transition(mv)?;
        node.children.push(child);

        self.nodes.push(Node::new(Some(mv), Some(id), state));
        Ok(child)
    }

    /// ノードを返す。
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// 親ノードを返す。
    #[inline]
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// ルートノードを返す。
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// 探索で求めた効用値を書き込む。
    ///
    /// # Errors
    ///
    /// `id` がこの木のノードでない場合、`TreeError::UnknownNode` を返す。
    ///
    #[inline]
    pub fn set_value(&mut self, id: NodeId, value: Score) -> Result<(), TreeError> {
        let node = self.nodes.get_mut(id.0).ok_or(TreeError::UnknownNode)?;
        node.value = value;
        Ok(())
    }

    /// `id` を根とする部分木の展開済みノード数を返す。
    #[inline]
    #[must_use]
    pub fn size(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, |node| {
            node.children
                .iter()
                .fold(1_usize, |acc, &child| acc.saturating_add(self.size(child)))
        })
    }

    /// ノードの局面を返す。
    #[inline]
    #[must_use]
    pub fn state(&self, id: NodeId) -> Option<State> {
        self.node(id).map(|node| node.state)
    }

    /// ノードの効用値（未書き込みなら 0）を返す。
    #[inline]
    #[must_use]
    pub fn value(&self, id: NodeId) -> Option<Score> {
        self.node(id).map(|node| node.value)
    }
}
