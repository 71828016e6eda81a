//! 人机对弈回合循环
//!
//! X 先行，最多九步；AI 的棋盘即为权威棋盘

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::warn;
use ttt_ai::{Agent, GameResult};
use ttt_rules::{Move, Notation, Piece, CELL_COUNT};

/// 对局结果（以玩家视角输出）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// AI 胜
    AiWins,
    /// 玩家胜
    HumanWins,
    /// 和棋
    Tie,
}

/// 一局人机对弈
pub struct GameSession {
    agent: Agent,
}

impl GameSession {
    /// 创建对局
    pub fn new(agent: Agent) -> Self {
        Self { agent }
    }

    /// 获取 AI
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// 运行对局直到分出胜负或棋盘下满
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<Outcome> {
        writeln!(output, "井字棋 AI 已就绪，AI 执 {}", self.agent.my_piece())?;

        let mut placed = 0;
        let mut turn = 0;

        while placed < CELL_COUNT && self.result() == GameResult::NoWinnerYet {
            writeln!(output, "{}", self.agent.board())?;

            if self.agent.my_piece() == Piece::ALL[turn] {
                self.ai_turn(output)?;
            } else {
                writeln!(output, "轮到 {} 落子", self.agent.opponent_piece())?;
                self.human_turn(input, output)?;
            }

            placed += 1;
            turn = (turn + 1) % Piece::ALL.len();
        }

        writeln!(output, "{}", self.agent.board())?;
        let outcome = match self.result() {
            GameResult::AgentWins => Outcome::AiWins,
            GameResult::OpponentWins => Outcome::HumanWins,
            GameResult::NoWinnerYet => Outcome::Tie,
        };
        let message = match outcome {
            Outcome::AiWins => "AI 获胜！游戏结束。",
            Outcome::HumanWins => "你赢了！游戏结束。",
            Outcome::Tie => "和棋！游戏结束。",
        };
        writeln!(output, "{}", message)?;

        Ok(outcome)
    }

    fn result(&self) -> GameResult {
        self.agent.game_result(self.agent.board())
    }

    fn ai_turn<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let board = *self.agent.board();
        let mv = self
            .agent
            .select_move(&board)
            .context("AI has no legal move on a full board")?;
        self.agent.apply_own_move(mv)?;
        writeln!(output, "{} 落子于 {}", self.agent.my_piece(), mv)?;
        Ok(())
    }

    fn human_turn<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            write!(output, "请输入落子 (例如 B2): ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input closed before the game finished");
            }

            let pos = match Notation::parse(&line) {
                Ok(pos) => pos,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match self.agent.apply_opponent_move(Move::new(pos)) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    warn!("玩家落子被拒绝: {}", e);
                    writeln!(output, "{}", e)?;
                }
            }
        }
    }
}
