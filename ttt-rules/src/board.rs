//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT, LINE_LENGTH};
use crate::error::{Result, RuleError};
use crate::piece::{Piece, Position};

const fn pos(row: u8, col: u8) -> Position {
    Position::new_unchecked(row, col)
}

/// 所有可连成一线的位置组合
///
/// 顺序即胜负判定的检查顺序：三行、三列、"\" 对角线、"/" 对角线。
/// "/" 对角线从左下角开始。
pub const LINES: [[Position; LINE_LENGTH]; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(2, 0), pos(1, 1), pos(0, 2)],
];

/// 棋盘
///
/// 3x3 值类型，行优先存储。复制即得到独立快照，搜索时可随意修改副本。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// 索引为 row * 3 + col，None 表示空格
    squares: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: [None; CELL_COUNT],
        }
    }

    /// 从行数组创建棋盘
    pub fn from_rows(rows: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                board.squares[row * BOARD_SIZE + col] = *cell;
            }
        }
        board
    }

    /// 获取指定位置的棋子
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.is_valid() {
            self.squares[pos.to_index()]
        } else {
            None
        }
    }

    /// 设置指定位置的棋子（不检查占用）
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[pos.to_index()] = piece;
        }
    }

    /// 落子
    ///
    /// 目标格已有棋子时返回 [`RuleError::IllegalMove`]，棋盘保持不变。
    /// 坐标越界时返回 [`RuleError::InvalidPosition`]。
    pub fn place(&mut self, pos: Position, piece: Piece) -> Result<()> {
        if !pos.is_valid() {
            return Err(RuleError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            });
        }
        if self.get(pos).is_some() {
            return Err(RuleError::IllegalMove {
                row: pos.row,
                col: pos.col,
            });
        }
        self.set(pos, Some(piece));
        Ok(())
    }

    /// 检查格子是否为空
    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.is_valid() && self.squares[pos.to_index()].is_none()
    }

    /// 空格数量
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|cell| cell.is_none()).count()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|cell| cell.is_some())
    }

    /// 获取某一行
    pub fn row(&self, row: usize) -> [Option<Piece>; BOARD_SIZE] {
        let start = row * BOARD_SIZE;
        [
            self.squares[start],
            self.squares[start + 1],
            self.squares[start + 2],
        ]
    }

    /// 获取某一条线上的三个格子
    pub fn line(&self, line: &[Position; LINE_LENGTH]) -> [Option<Piece>; LINE_LENGTH] {
        [self.get(line[0]), self.get(line[1]), self.get(line[2])]
    }

    /// 查找连成一线的棋子
    ///
    /// 按 [`LINES`] 的顺序检查，返回第一条完整线的所属方。
    pub fn winner(&self) -> Option<Piece> {
        LINES.iter().find_map(|line| match self.line(line) {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
            _ => None,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{row}:")?;
            for cell in self.row(row) {
                write!(f, " {}", cell.map_or('.', |piece| piece.to_char()))?;
            }
            writeln!(f)?;
        }
        write!(f, "   A B C")
    }
}
