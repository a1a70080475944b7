use crate::engine::position::Position;
use crate::engine::types::{Move, Square};

/// 手番側の全合法手を返す。
///
/// 盤面を行優先で走査し、各マスでは合法手の生成順を保つ。
#[inline]
#[must_use]
pub fn list_moves(position: &Position) -> Vec<Move> {
    let side = position.side_to_move();
    let mut moves = Vec::new();

    for from in Square::all() {
        let owned = position
            .piece_at(from)
            .is_some_and(|piece| piece.side() == side);
        if !owned {
            continue;
        }
        moves.extend(
            position
                .legal_moves(from)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }

    moves
}
