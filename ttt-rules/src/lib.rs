//! 井字棋共享规则库
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 落子生成和占用校验
//! - 坐标表示法 (如 "B2")
//! - 错误类型定义

mod board;
mod constants;
mod error;
mod moves;
mod notation;
mod piece;

pub use board::{Board, LINES};
pub use constants::*;
pub use error::{Result, RuleError};
pub use moves::{Move, MoveGenerator};
pub use notation::Notation;
pub use piece::{Piece, Position};
