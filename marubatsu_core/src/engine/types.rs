use core::fmt;

/// 手番（記号）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Player {
    /// 後手。
    O,
    /// 先手。
    X,
}

impl Player {
    /// 相手側の記号を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::O => Self::X,
            Self::X => Self::O,
        }
    }
}

impl fmt::Display for Player {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::O => formatter.write_str("O"),
            Self::X => formatter.write_str("X"),
        }
    }
}

/// 1手（誰が、どのマスに記号を置くか）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// 列（0..=2）。
    column: u8,
    /// 手を指すプレイヤー。
    player: Player,
    /// 行（0..=2）。
    row: u8,
}

impl Move {
    /// 列を返す。
    #[inline]
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// 手を生成する。
    ///
    /// 範囲外の座標もそのまま保持し、`State::transition` で弾く。
    #[inline]
    #[must_use]
    pub const fn new(player: Player, row: u8, column: u8) -> Self {
        Self {
            column,
            player,
            row,
        }
    }

    /// 手を指すプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn player(self) -> Player {
        self.player
    }

    /// 行を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }
}

impl fmt::Display for Move {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} @ {} {}", self.player, self.row, self.column)
    }
}
