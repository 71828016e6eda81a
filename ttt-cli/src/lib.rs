//! 井字棋命令行对弈
//!
//! 包含:
//! - 命令行参数与 AI 构建
//! - AI 配置文件加载 (JSON)
//! - 人机对弈回合循环

pub mod cli;
pub mod config;
pub mod game;

pub use cli::Cli;
pub use config::{load_config, ConfigError};
pub use game::{GameSession, Outcome};
