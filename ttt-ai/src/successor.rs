//! 后继局面生成

use ttt_rules::{Board, MoveGenerator, Piece};

/// 为每个空格生成一个落下 `piece` 后的独立棋盘副本（行优先顺序）
///
/// 顺序决定了选步时的平局取舍，不能改动。棋盘已满时返回空列表。
pub fn successors(board: &Board, piece: Piece) -> Vec<Board> {
    MoveGenerator::generate(board)
        .into_iter()
        .map(|mv| {
            let mut next = *board;
            next.set(mv.to, Some(piece));
            next
        })
        .collect()
}
