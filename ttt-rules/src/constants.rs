//! 规则常量定义

/// 棋盘边长（行数与列数相同）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 连成一线所需棋子数
pub const LINE_LENGTH: usize = 3;
