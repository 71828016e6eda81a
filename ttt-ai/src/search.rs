//! 搜索引擎
//!
//! 实现固定深度的 Minimax + Alpha-Beta 剪枝，终局分值带深度折扣

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ttt_rules::{Board, Move, Piece, Position};

use crate::evaluate::Evaluator;
use crate::successor::successors;

/// 后继展开方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expansion {
    /// 极大层与极小层都用己方棋子展开（自我对弈近似）
    #[default]
    SelfPlay,
    /// 极大层用己方棋子、极小层用对方棋子展开；根节点的候选用极小层评分
    Alternating,
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// 截断深度：深度从 0 开始递增，到达此深度时返回启发值
    pub cutoff_depth: u32,
    /// 深度折扣的分母，终局加成为 `1 - depth / horizon`
    pub horizon: f64,
    /// 后继展开方式
    pub expansion: Expansion,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            cutoff_depth: 1,
            horizon: 3.0,
            expansion: Expansion::SelfPlay,
        }
    }
}

/// AI 引擎
#[derive(Debug, Clone)]
pub struct AiEngine {
    config: AiConfig,
    evaluator: Evaluator,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(me: Piece, config: AiConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(me),
            nodes_searched: 0,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 获取评估器
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// 搜索最佳落子
    ///
    /// 对每个后继局面独立评分，严格大于才替换，因此分数相同时行优先顺序靠前的获胜。
    /// 棋盘已满时返回 `None`。
    pub fn select_move(&mut self, state: &Board) -> Option<Move> {
        self.nodes_searched = 0;
        let me = self.evaluator.me();

        let candidates = successors(state, me);
        // 所有候选都是 -inf（例如最后一格只能下成和棋）时退回第一个候选
        let mut best_board = *candidates.first()?;
        let mut best_score = f64::NEG_INFINITY;

        for candidate in &candidates {
            let score = match self.config.expansion {
                Expansion::SelfPlay => {
                    self.max_value(candidate, 0, f64::NEG_INFINITY, f64::INFINITY)
                }
                Expansion::Alternating => {
                    self.min_value(candidate, 0, f64::NEG_INFINITY, f64::INFINITY)
                }
            };
            trace!(score, "候选局面评分");

            if score > best_score {
                best_score = score;
                best_board = *candidate;
            }
        }

        let mv = Self::placed_move(state, &best_board, me)?;
        debug!(
            %mv,
            score = best_score,
            nodes = self.nodes_searched,
            "搜索完成"
        );
        Some(mv)
    }

    /// 极大层
    pub fn max_value(&mut self, state: &Board, depth: u32, mut alpha: f64, beta: f64) -> f64 {
        self.nodes_searched += 1;

        if let Some(value) = self.leaf_value(state, depth) {
            return value;
        }

        for child in successors(state, self.evaluator.me()) {
            alpha = alpha.max(self.min_value(&child, depth + 1, alpha, beta));
            if alpha >= beta {
                trace!(depth, alpha, beta, "beta 剪枝");
                return beta;
            }
        }

        alpha
    }

    /// 极小层
    pub fn min_value(&mut self, state: &Board, depth: u32, alpha: f64, mut beta: f64) -> f64 {
        self.nodes_searched += 1;

        if let Some(value) = self.leaf_value(state, depth) {
            return value;
        }

        let piece = match self.config.expansion {
            Expansion::SelfPlay => self.evaluator.me(),
            Expansion::Alternating => self.evaluator.me().opponent(),
        };

        for child in successors(state, piece) {
            beta = beta.min(self.max_value(&child, depth + 1, alpha, beta));
            if alpha >= beta {
                trace!(depth, alpha, beta, "alpha 剪枝");
                return alpha;
            }
        }

        beta
    }

    /// 终局或截断节点的分值，内部节点返回 `None`
    fn leaf_value(&self, state: &Board, depth: u32) -> Option<f64> {
        let discount = 1.0 - f64::from(depth) / self.config.horizon;

        match self.evaluator.terminal_value(state) {
            1 => Some(1.0 + discount),
            -1 => Some(-1.0 - discount),
            _ if depth >= self.config.cutoff_depth => Some(self.evaluator.heuristic_value(state)),
            _ => None,
        }
    }

    /// 对比前后两个局面，找出己方新落子的格子
    fn placed_move(before: &Board, after: &Board, me: Piece) -> Option<Move> {
        Position::all()
            .find(|pos| after.get(*pos) == Some(me) && before.get(*pos) != Some(me))
            .map(Move::new)
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}
