use core::fmt;

use thiserror::Error;

use crate::engine::types::{Move, Player};

/// 盤の一辺の長さ。
pub const BOARD_LEN: u8 = 3;

/// 盤のマス数。
const CELL_COUNT: usize = 9;

/// 描画時に行の間に挟む罫線。
const RULE: &str = "-+-+-";

/// 3×3 の盤面。`None` は空きマス。
type Grid = [[Option<Player>; 3]; 3];

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum TransitionError {
    /// すでに勝者が決まっている。
    #[error("the game has ended; no more moves can be taken")]
    GameOver,
    /// 指定マスが埋まっている。
    #[error("position ({row},{column}) is already occupied")]
    Occupied {
        /// 列。
        column: u8,
        /// 行。
        row: u8,
    },
    /// 指定マスが盤外。
    #[error("position ({row},{column}) is outside the grid")]
    OutOfBounds {
        /// 列。
        column: u8,
        /// 行。
        row: u8,
    },
    /// 手番ではないプレイヤーの手。
    #[error("it is not player {actual}'s turn (expected {expected})")]
    WrongPlayer {
        /// 手に記録されていたプレイヤー。
        actual: Player,
        /// 手番のプレイヤー。
        expected: Player,
    },
}

/// 局面（盤面＋手番＋勝者）。
///
/// 値型で、`transition` は常に新しい局面を返す。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct State {
    /// 手番。
    current: Player,
    /// 盤面。
    grid: Grid,
    /// 勝者（未決着・引き分けなら `None`）。
    winner: Option<Player>,
}

impl State {
    /// 現局面で指せる手を行優先順に返す。
    ///
    /// 勝者が決まっている場合は空。
    #[inline]
    #[must_use]
    pub fn available_moves(self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        if self.winner.is_some() {
            return moves;
        }

        for (row, cells) in (u8::MIN..).zip(self.grid.iter()) {
            for (column, cell) in (u8::MIN..).zip(cells.iter()) {
                if cell.is_none() {
                    moves.push(Move::new(self.current, row, column));
                }
            }
        }
        moves
    }

    /// 手番のプレイヤーを返す。終局後は `None`。
    #[inline]
    #[must_use]
    pub fn current_player(self) -> Option<Player> {
        if self.is_terminal() {
            return None;
        }
        Some(self.current)
    }

    /// 空きマス数を返す。
    #[inline]
    #[must_use]
    pub fn empty_count(self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// `player` が一列揃えているかを返す。
    fn has_won(self, player: Player) -> bool {
        let owned = |row: i8, column: i8| self.square(row, column) == Some(player);

        for line in 0_i8..3 {
            if (0_i8..3).all(|index| owned(line, index))
                || (0_i8..3).all(|index| owned(index, line))
            {
                return true;
            }
        }

        // 斜めはどちらも中央を通る。
        if !owned(1, 1) {
            return false;
        }
        (owned(0, 0) && owned(-1, -1)) || (owned(0, -1) && owned(-1, 0))
    }

    /// 初期局面（空の盤、X の手番）を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            current: Player::X,
            grid: [[None; 3]; 3],
            winner: None,
        }
    }

    /// 終局（勝者あり、または空きマスなし）かを返す。
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.winner.is_some() || self.grid.iter().flatten().all(Option::is_some)
    }

    /// 指定マスの記号を返す。
    ///
    /// 負のインデックスは末尾から数える（`-1` は 2 行目/2 列目）。
    #[inline]
    #[must_use]
    pub fn square(self, row: i8, column: i8) -> Option<Player> {
        let row_index = usize::try_from(row.rem_euclid(3)).ok()?;
        let column_index = usize::try_from(column.rem_euclid(3)).ok()?;

        self.grid
            .get(row_index)
            .and_then(|cells| cells.get(column_index))
            .copied()
            .flatten()
    }

    /// 手を適用した新しい局面を返す。`self` は変更しない。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `TransitionError::GameOver`: すでに勝者が決まっている場合
    /// - `TransitionError::OutOfBounds`: 盤外のマスを指定した場合
    /// - `TransitionError::Occupied`: 指定マスが埋まっている場合
    /// - `TransitionError::WrongPlayer`: 手番ではないプレイヤーの手の場合
    ///
    #[inline]
    pub fn transition(self, mv: Move) -> Result<Self, TransitionError> {
        if self.winner.is_some() {
            return Err(TransitionError::GameOver);
        }

        let (row, column) = (mv.row(), mv.column());
        let mut grid = self.grid;
        let cell = grid
            .get_mut(usize::from(row))
            .and_then(|cells| cells.get_mut(usize::from(column)))
            .ok_or(TransitionError::OutOfBounds { column, row })?;

        if cell.is_some() {
            return Err(TransitionError::Occupied { column, row });
        }

        if mv.player() != self.current {
            return Err(TransitionError::WrongPlayer {
                actual: mv.player(),
                expected: self.current,
            });
        }

        *cell = Some(mv.player());

        let next = Self {
            current: mv.player().opponent(),
            grid,
            winner: None,
        };
        let winner = next.has_won(mv.player()).then_some(mv.player());

        Ok(Self { winner, ..next })
    }

    /// 勝者を返す。
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        self.winner
    }
}

impl Default for State {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for State {
    /// 罫線付きの 5×5 文字で描画する。
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid.iter().enumerate() {
            if row > 0 {
                writeln!(formatter, "{RULE}")?;
            }
            for (column, cell) in cells.iter().enumerate() {
                if column > 0 {
                    write!(formatter, "|")?;
                }
                let glyph = match *cell {
                    Some(Player::X) => 'X',
                    Some(Player::O) => 'O',
                    None => ' ',
                };
                write!(formatter, "{glyph}")?;
            }
            writeln!(formatter)?;
        }
        Ok(())
    }
}

/// 初期局面から `(行, 列)` の列を手番どおりに適用する。
///
/// 途中の手が不正ならそのエラーを返す。
#[cfg(test)]
pub(crate) fn replay(moves: &[(u8, u8)]) -> Result<State, TransitionError> {
    let mut state = State::initial();
    for &(row, column) in moves {
        let player = state.current_player().unwrap_or(Player::X);
        state = state.transition(Move::new(player, row, column))?;
    }
    Ok(state)
}
