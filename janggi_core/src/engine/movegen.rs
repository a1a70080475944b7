//! 駒の種類ごとの擬似合法手（自殺手判定前）の生成。
//!
//! 味方駒のいるマスも移動先として含む。味方駒の除外と王手放置の判定は
//! `Position::legal_moves` 側で行う。

use crate::engine::board::Board;
use crate::engine::types::{Piece, PieceKind, Side, Square};

/// 縦横4方向。
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// 斜め4方向。
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// 王の8方向（縦横→斜めの順）。
const KING_STEPS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// 馬の (移動先, 足) の組。足は最初の縦横1歩。
const HORSE_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-2, -1), (-1, 0)),
    ((-2, 1), (-1, 0)),
    ((2, -1), (1, 0)),
    ((2, 1), (1, 0)),
    ((-1, -2), (0, -1)),
    ((-1, 2), (0, 1)),
    ((1, -2), (0, -1)),
    ((1, 2), (0, 1)),
];

/// 象の (移動先, 足) の組。足は最初の斜め1歩。
const ELEPHANT_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-3, -2), (-1, -1)),
    ((-3, 2), (-1, 1)),
    ((3, -2), (1, -1)),
    ((3, 2), (1, 1)),
    ((-2, -3), (-1, -1)),
    ((-2, 3), (-1, 1)),
    ((2, -3), (1, -1)),
    ((2, 3), (1, 1)),
];

/// 指定交点の駒の擬似合法手を返す（駒がなければ空）。
#[inline]
#[must_use]
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    pseudo_legal_moves_of(board, from, piece)
}

/// 駒を指定して擬似合法手を返す。
fn pseudo_legal_moves_of(board: &Board, from: Square, piece: Piece) -> Vec<Square> {
    let side = piece.side();
    match piece.kind() {
        PieceKind::Cannon => cannon_moves(board, from),
        PieceKind::Chariot => chariot_moves(board, from),
        PieceKind::Elephant => leg_jumps(board, from, &ELEPHANT_JUMPS),
        PieceKind::Guard => palace_steps(from, side, &DIAGONAL),
        PieceKind::Horse => leg_jumps(board, from, &HORSE_JUMPS),
        PieceKind::King => palace_steps(from, side, &KING_STEPS),
        PieceKind::Soldier => soldier_moves(from, side),
    }
}

/// `attacker` のいずれかの駒の擬似合法手に `target` が含まれるかを返す。
///
/// 王手放置の判定から呼ばれるため、ここでは自殺手フィルタを通さない。
#[inline]
#[must_use]
pub fn is_square_attacked(board: &Board, target: Square, attacker: Side) -> bool {
    board
        .pieces()
        .filter(|&(_, piece)| piece.side() == attacker)
        .any(|(from, piece)| pseudo_legal_moves_of(board, from, piece).contains(&target))
}

/// 包: 縦横に、ちょうど1枚を飛び越えた先で最初に当たる駒の位置へ（取りのみ）。
fn cannon_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    for (d_row, d_col) in ORTHOGONAL {
        let mut screened = false;
        let mut cursor = from.offset(d_row, d_col);
        while let Some(square) = cursor {
            if board.piece_at(square).is_some() {
                if screened {
                    moves.push(square);
                    break;
                }
                screened = true;
            }
            cursor = square.offset(d_row, d_col);
        }
    }
    moves
}

/// 車: 縦横に滑り、最初に当たった駒の位置で止まる（その位置を含む）。
fn chariot_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    for (d_row, d_col) in ORTHOGONAL {
        let mut cursor = from.offset(d_row, d_col);
        while let Some(square) = cursor {
            moves.push(square);
            if board.piece_at(square).is_some() {
                break;
            }
            cursor = square.offset(d_row, d_col);
        }
    }
    moves
}

/// 馬・象: 足のマスが空いているときだけ移動先へ跳べる。
fn leg_jumps(board: &Board, from: Square, jumps: &[((i8, i8), (i8, i8))]) -> Vec<Square> {
    jumps
        .iter()
        .filter_map(|&((d_row, d_col), (leg_row, leg_col))| {
            let leg = from.offset(leg_row, leg_col)?;
            if board.piece_at(leg).is_some() {
                return None;
            }
            from.offset(d_row, d_col)
        })
        .collect()
}

/// 王・士: 自陣の宮から出ない1歩。
fn palace_steps(from: Square, side: Side, steps: &[(i8, i8)]) -> Vec<Square> {
    steps
        .iter()
        .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|square| square.in_palace(side))
        .collect()
}

/// 卒: 前へ1歩。自陣の宮の中では左右にも1歩。後退はない。
fn soldier_moves(from: Square, side: Side) -> Vec<Square> {
    let mut moves: Vec<Square> = from.offset(side.forward(), 0).into_iter().collect();
    if from.in_palace(side) {
        moves.extend(from.offset(0, -1));
        moves.extend(from.offset(0, 1));
    }
    moves
}
