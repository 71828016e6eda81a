//! AI 玩家
//!
//! 持有执子方、自己的棋盘副本和搜索引擎，是外部回合循环调用的唯一入口

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ttt_rules::{Board, Move, Piece, Result};

use crate::search::{AiConfig, AiEngine};

/// 对局结果（以 AI 视角）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// AI 胜
    AgentWins,
    /// 对手胜
    OpponentWins,
    /// 尚未分出胜负
    NoWinnerYet,
}

/// AI 玩家
#[derive(Debug, Clone)]
pub struct Agent {
    me: Piece,
    opponent: Piece,
    board: Board,
    engine: AiEngine,
}

impl Agent {
    /// 随机选择执子方
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// 使用给定随机源选择执子方（两种结果等概率）
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let me = if rng.gen_bool(0.5) { Piece::X } else { Piece::O };
        Self::with_piece(me)
    }

    /// 使用固定种子选择执子方，结果可复现
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// 指定执子方
    pub fn with_piece(me: Piece) -> Self {
        info!("AI 执子: {}", me);
        Self {
            me,
            opponent: me.opponent(),
            board: Board::empty(),
            engine: AiEngine::new(me, AiConfig::default()),
        }
    }

    /// 替换搜索配置
    pub fn with_config(mut self, config: AiConfig) -> Self {
        debug!(?config, "AI 配置");
        self.engine = AiEngine::new(self.me, config);
        self
    }

    /// AI 的棋子
    pub fn my_piece(&self) -> Piece {
        self.me
    }

    /// 对手的棋子
    pub fn opponent_piece(&self) -> Piece {
        self.opponent
    }

    /// AI 持有的棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 搜索引擎
    pub fn engine(&self) -> &AiEngine {
        &self.engine
    }

    /// 为给定局面选择落子，不修改任何棋盘
    ///
    /// 棋盘已满时返回 `None`。
    pub fn select_move(&mut self, state: &Board) -> Option<Move> {
        let mv = self.engine.select_move(state)?;
        info!(
            "AI 落子: {}, 搜索节点数: {}",
            mv,
            self.engine.nodes_searched()
        );
        Some(mv)
    }

    /// 在自己的棋盘上执行 AI 的落子
    pub fn apply_own_move(&mut self, mv: Move) -> Result<()> {
        self.board.place(mv.to, self.me)
    }

    /// 校验并执行对手的落子
    ///
    /// 目标格已有棋子时返回 `IllegalMove`，棋盘保持不变。
    pub fn apply_opponent_move(&mut self, mv: Move) -> Result<()> {
        self.board.place(mv.to, self.opponent)?;
        debug!("对手落子: {}", mv);
        Ok(())
    }

    /// 以 AI 视角判定胜负
    pub fn game_result(&self, board: &Board) -> GameResult {
        match self.engine.evaluator().terminal_value(board) {
            1 => GameResult::AgentWins,
            -1 => GameResult::OpponentWins,
            _ => GameResult::NoWinnerYet,
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_rules::{Position, RuleError};

    const X: Option<Piece> = Some(Piece::X);
    const O: Option<Piece> = Some(Piece::O);
    const E: Option<Piece> = None;

    #[test]
    fn test_new_agent_pieces() {
        let agent = Agent::new();
        assert_eq!(agent.opponent_piece(), agent.my_piece().opponent());
        assert_eq!(*agent.board(), Board::empty());
    }

    #[test]
    fn test_seeded_agent_reproducible() {
        for seed in 0..16 {
            assert_eq!(
                Agent::from_seed(seed).my_piece(),
                Agent::from_seed(seed).my_piece()
            );
        }
    }

    #[test]
    fn test_seeded_agents_cover_both_pieces() {
        let pieces: Vec<Piece> = (0..64).map(|seed| Agent::from_seed(seed).my_piece()).collect();
        assert!(pieces.contains(&Piece::X));
        assert!(pieces.contains(&Piece::O));
    }

    #[test]
    fn test_opponent_move() {
        let mut agent = Agent::with_piece(Piece::O);
        agent.apply_opponent_move(Move::at(1, 1)).unwrap();
        assert_eq!(agent.board().get(Position::new_unchecked(1, 1)), Some(Piece::X));
    }

    #[test]
    fn test_illegal_opponent_move() {
        let mut agent = Agent::with_piece(Piece::X);
        agent.apply_own_move(Move::at(0, 0)).unwrap();
        let before = *agent.board();

        let err = agent.apply_opponent_move(Move::at(0, 0)).unwrap_err();
        assert_eq!(err, RuleError::IllegalMove { row: 0, col: 0 });
        assert_eq!(*agent.board(), before);
    }

    #[test]
    fn test_game_result() {
        let agent = Agent::with_piece(Piece::O);

        let board = Board::from_rows([[O, X, X], [E, O, X], [E, E, O]]);
        assert_eq!(agent.game_result(&board), GameResult::AgentWins);
        assert_eq!(agent.game_result(&board), GameResult::AgentWins);

        let board = Board::from_rows([[O, X, E], [O, X, E], [E, X, E]]);
        assert_eq!(agent.game_result(&board), GameResult::OpponentWins);

        assert_eq!(agent.game_result(&Board::empty()), GameResult::NoWinnerYet);
    }

    #[test]
    fn test_select_move_does_not_mutate() {
        let mut agent = Agent::with_piece(Piece::X);
        agent.apply_opponent_move(Move::at(0, 0)).unwrap();
        let board = *agent.board();

        let mv = agent.select_move(&board).unwrap();
        assert_eq!(*agent.board(), board);
        assert!(board.is_empty_at(mv.to));

        agent.apply_own_move(mv).unwrap();
        assert_eq!(agent.board().get(mv.to), Some(Piece::X));
    }
}
