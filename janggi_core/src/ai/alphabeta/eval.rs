use crate::engine::position::Position;
use crate::engine::types::{PieceKind, Side};

use super::SCORE_WIN;

/// 駒の価値。
pub(super) const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Cannon => 7,
        PieceKind::Chariot => 13,
        PieceKind::Elephant | PieceKind::Guard => 3,
        PieceKind::Horse => 5,
        PieceKind::King => 1000,
        PieceKind::Soldier => 2,
    }
}

/// 静的評価（常に `maximizer` 視点）。
///
/// 終局なら勝敗の定数、そうでなければ駒得の合計。
pub(super) fn evaluate(position: &Position, maximizer: Side) -> i32 {
    if let Some(winner) = position.winner() {
        return if winner == maximizer {
            SCORE_WIN
        } else {
            SCORE_WIN.wrapping_neg()
        };
    }

    position
        .board()
        .pieces()
        .fold(0_i32, |score, (_, piece)| {
            let value = piece_value(piece.kind());
            if piece.side() == maximizer {
                score.wrapping_add(value)
            } else {
                score.wrapping_sub(value)
            }
        })
}
