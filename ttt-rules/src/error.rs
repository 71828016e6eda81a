//! 错误类型定义

use thiserror::Error;

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// 目标格子已被占用
    #[error("Illegal move detected: ({row}, {col}) is already occupied")]
    IllegalMove { row: u8, col: u8 },

    /// 无效的位置
    #[error("Invalid position: ({row}, {col})")]
    InvalidPosition { row: u8, col: u8 },

    /// 无法解析的坐标
    #[error("Invalid notation: {input:?} (expected e.g. B2)")]
    InvalidNotation { input: String },
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, RuleError>;
