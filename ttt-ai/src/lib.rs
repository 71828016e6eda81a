//! 井字棋 AI 引擎
//!
//! 包含:
//! - 后继局面生成
//! - 终局与启发式评估
//! - 固定深度的 Minimax + Alpha-Beta 搜索
//! - AI 玩家（执子方、棋盘副本、胜负判定）

mod agent;
mod evaluate;
mod search;
mod successor;

pub use agent::{Agent, GameResult};
pub use evaluate::{Evaluator, PAIR_SCORE};
pub use search::{AiConfig, AiEngine, Expansion};
pub use successor::successors;
