//! 棋子与位置定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};

/// 棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// 先手
    X,
    /// 后手
    O,
}

impl Piece {
    /// 按行棋顺序排列的所有棋子
    pub const ALL: [Piece; 2] = [Piece::X, Piece::O];

    /// 获取对方棋子
    pub fn opponent(&self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Piece::X => 'x',
            Piece::O => 'o',
        }
    }

    /// 从字符解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'x' | 'X' => Some(Piece::X),
            'o' | 'O' => Some(Piece::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::str::FromStr for Piece {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_char(c).ok_or_else(|| format!("unknown piece: {s}")),
            _ => Err(format!("unknown piece: {s}")),
        }
    }
}

/// 棋盘位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-2)
    pub row: u8,
    /// 列 (0-2)
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 转换为数组索引（行优先）
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Position {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// 行优先遍历所有位置
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|index| Position {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'A' + self.col) as char, self.row)
    }
}
