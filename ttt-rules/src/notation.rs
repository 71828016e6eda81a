//! 坐标表示法
//!
//! 格式：<列字母><行号>，列为 A-C，行为 0-2，例如 "B2" 表示第 2 行第 1 列。

use crate::error::{Result, RuleError};
use crate::piece::Position;

/// 坐标表示法
pub struct Notation;

impl Notation {
    /// 解析坐标（列字母不区分大小写，允许首尾空白）
    pub fn parse(input: &str) -> Result<Position> {
        let invalid = || RuleError::InvalidNotation {
            input: input.to_string(),
        };

        let mut chars = input.trim().chars();
        let (col_char, row_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(r), None) => (c.to_ascii_uppercase(), r),
            _ => return Err(invalid()),
        };

        if !('A'..='C').contains(&col_char) {
            return Err(invalid());
        }
        let row = row_char.to_digit(10).ok_or_else(invalid)?;
        let col = col_char as u8 - b'A';

        Position::new(row as u8, col).ok_or_else(invalid)
    }

    /// 将位置转换为坐标字符串
    pub fn format(pos: Position) -> String {
        pos.to_string()
    }
}
