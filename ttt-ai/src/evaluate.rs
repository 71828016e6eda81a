//! 局面评估函数

use ttt_rules::{Board, Piece, LINES};

/// 局部两连的启发分值
pub const PAIR_SCORE: f64 = 0.3;

/// 每条线上检查的格子对：前两格、后两格、首尾两格
const PAIRS: [(usize, usize); 3] = [(0, 1), (1, 2), (0, 2)];

/// 评估器（以 `me` 为己方视角）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    me: Piece,
}

impl Evaluator {
    /// 创建评估器
    pub fn new(me: Piece) -> Self {
        Self { me }
    }

    /// 己方棋子
    pub fn me(&self) -> Piece {
        self.me
    }

    /// 终局值：己方连成一线为 +1，对方为 -1，否则为 0
    pub fn terminal_value(&self, board: &Board) -> i8 {
        match board.winner() {
            Some(piece) => self.sign(piece),
            None => 0,
        }
    }

    /// 启发值，只在搜索截断的叶子节点调用
    ///
    /// 已分胜负时直接返回终局值。否则按行、列、"\"、"/" 的顺序扫描每条线上的
    /// 格子对，遇到第一对同色棋子即返回 ±[`PAIR_SCORE`]。这是短路扫描而不是累加：
    /// 局面上任何一处都没有同色格子对时结果恒为 0.0。
    pub fn heuristic_value(&self, board: &Board) -> f64 {
        let terminal = self.terminal_value(board);
        if terminal != 0 {
            return f64::from(terminal);
        }

        for line in &LINES {
            let cells = board.line(line);
            for (a, b) in PAIRS {
                if let (Some(first), Some(second)) = (cells[a], cells[b]) {
                    if first == second {
                        return f64::from(self.sign(first)) * PAIR_SCORE;
                    }
                }
            }
        }

        0.0
    }

    fn sign(&self, piece: Piece) -> i8 {
        if piece == self.me {
            1
        } else {
            -1
        }
    }
}
