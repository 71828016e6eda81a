//! 落子生成

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::piece::Position;

/// 走法
///
/// 井字棋只有落子，没有移动阶段，因此只记录目标格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 目标位置
    pub to: Position,
}

impl Move {
    /// 创建新走法
    pub fn new(to: Position) -> Self {
        Self { to }
    }

    /// 从行列创建（不检查边界）
    pub fn at(row: u8, col: u8) -> Self {
        Self::new(Position::new_unchecked(row, col))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成所有合法落子（按行优先顺序）
    pub fn generate(board: &Board) -> Vec<Move> {
        Position::all()
            .filter(|pos| board.is_empty_at(*pos))
            .map(Move::new)
            .collect()
    }
}
