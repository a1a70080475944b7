use core::fmt;

use crate::engine::board::Board;
use crate::engine::movegen::{is_square_attacked, pseudo_legal_moves};
use crate::engine::types::{Move, Piece, Side, Square};

/// 手の適用結果としての局面の状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Status {
    /// 進行中。
    InProgress,
    /// 終局（相手の王を取った側の勝ち）。
    Won(Side),
}

/// 着手の適用に失敗した理由。いずれの場合も局面は変化しない。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ApplyMoveError {
    /// 移動元に駒がない。
    EmptySquare,
    /// すでに終局している。
    GameOver,
    /// 移動先が合法手に含まれない。
    IllegalDestination,
    /// 移動元の駒が手番側のものではない。
    NotSideToMove,
}

impl fmt::Display for ApplyMoveError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match *self {
            Self::EmptySquare => "no piece on the origin square",
            Self::GameOver => "the game is already over",
            Self::IllegalDestination => "destination is not a legal move",
            Self::NotSideToMove => "the piece does not belong to the side to move",
        };
        f.write_str(message)
    }
}

impl core::error::Error for ApplyMoveError {}

/// 局面（盤面＋手番＋勝者）。
///
/// `Copy` なので、探索側は値のコピーの上で自由に手を進めて捨てられる。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// 盤面。
    board: Board,
    /// 手番。
    side_to_move: Side,
    /// 勝者（どちらか一方の王だけが盤上にない場合のみ `Some`）。
    winner: Option<Side>,
}

impl Position {
    /// 着手を適用する。
    ///
    /// 終局していないときだけ手番が交代する。
    ///
    /// # Errors
    ///
    /// - `ApplyMoveError::GameOver`: すでに終局している場合
    /// - `ApplyMoveError::EmptySquare`: 移動元に駒がない場合
    /// - `ApplyMoveError::NotSideToMove`: 移動元の駒が手番側でない場合
    /// - `ApplyMoveError::IllegalDestination`: 移動先が合法手でない場合
    ///
    /// エラー時は局面を一切変更しない。
    #[inline]
    pub fn apply_move(&mut self, mv: Move) -> Result<Status, ApplyMoveError> {
        if self.is_terminal() {
            return Err(ApplyMoveError::GameOver);
        }

        let piece = match self.board.piece_at(mv.from()) {
            Some(value) => value,
            None => return Err(ApplyMoveError::EmptySquare),
        };
        if piece.side() != self.side_to_move {
            return Err(ApplyMoveError::NotSideToMove);
        }
        if !self.legal_moves(mv.from()).contains(&mv.to()) {
            return Err(ApplyMoveError::IllegalDestination);
        }

        self.board.relocate(mv.from(), mv.to());
        self.winner = winner_of(&self.board);
        if self.winner.is_none() {
            self.side_to_move = self.side_to_move.opponent();
        }

        Ok(self.status())
    }

    /// 盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 任意の盤面と手番から局面を生成する。勝者は王の有無から決まる。
    #[inline]
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            winner: winner_of(&board),
        }
    }

    /// 初期局面（赤番）を返す。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Side::Red)
    }

    /// 指定陣営の王が相手の駒に狙われているかを返す（王がいなければ `false`）。
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, side: Side) -> bool {
        self.board
            .find_king(side)
            .is_some_and(|king| is_square_attacked(&self.board, king, side.opponent()))
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    /// 指定交点の駒の合法な移動先を返す（生成順を保つ）。
    ///
    /// 駒がない、または手番側の駒でない場合は空。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        let side = match self.board.piece_at(from) {
            Some(piece) if piece.side() == self.side_to_move => piece.side(),
            Some(_) | None => return Vec::new(),
        };

        pseudo_legal_moves(&self.board, from)
            .into_iter()
            .filter(|&to| {
                self.board
                    .piece_at(to)
                    .is_none_or(|target| target.side() != side)
            })
            .filter(|&to| !self.leaves_king_attacked(from, to, side))
            .collect()
    }

    /// 盤面のコピー上で手を進め、自陣の王が狙われる状態になるかを返す。
    fn leaves_king_attacked(&self, from: Square, to: Square, side: Side) -> bool {
        let mut scratch = self.board;
        scratch.relocate(from, to);
        scratch
            .find_king(side)
            .is_some_and(|king| is_square_attacked(&scratch, king, side.opponent()))
    }

    /// 指定交点の駒を返す。
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// 手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// 現在の状態を返す。
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        match self.winner {
            Some(side) => Status::Won(side),
            None => Status::InProgress,
        }
    }

    /// 手番だけを差し替えたコピーを返す（相手の次の手を調べる用途）。
    #[inline]
    #[must_use]
    pub const fn with_side_to_move(&self, side: Side) -> Self {
        Self {
            board: self.board,
            side_to_move: side,
            winner: self.winner,
        }
    }

    /// 勝者を返す。
    #[inline]
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        self.winner
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

/// 王の有無から勝者を決める。双方の王がない場合は勝者なしとする。
fn winner_of(board: &Board) -> Option<Side> {
    match (board.has_king(Side::Red), board.has_king(Side::Blue)) {
        (true, false) => Some(Side::Red),
        (false, true) => Some(Side::Blue),
        (true, true) | (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplyMoveError, Position, Status};
    use crate::engine::board::Board;
    use crate::engine::types::{Move, Piece, PieceKind, Side, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap_or_else(|| panic!("bad square {row},{col}"))
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(sq(from.0, from.1), sq(to.0, to.1))
    }

    #[test]
    fn first_soldier_only_steps_forward() {
        let position = Position::initial();
        assert_eq!(position.legal_moves(sq(6, 0)), vec![sq(5, 0)]);
    }

    #[test]
    fn opponent_pieces_have_no_moves_on_red_turn() {
        let position = Position::initial();
        assert!(position.legal_moves(sq(3, 0)).is_empty());
        assert!(position.legal_moves(sq(4, 4)).is_empty());
    }

    #[test]
    fn friendly_destinations_are_filtered() {
        let position = Position::initial();
        // 車は味方の馬と卒に挟まれて縦に 2 マスだけ動ける。
        assert_eq!(position.legal_moves(sq(9, 0)), vec![sq(8, 0), sq(7, 0)]);
    }

    #[test]
    fn apply_move_flips_turn() {
        let mut position = Position::initial();
        assert_eq!(position.apply_move(mv((6, 0), (5, 0))), Ok(Status::InProgress));
        assert_eq!(position.side_to_move(), Side::Blue);
        assert_eq!(
            position.piece_at(sq(5, 0)),
            Some(Piece::new(PieceKind::Soldier, Side::Red))
        );
        assert_eq!(position.piece_at(sq(6, 0)), None);
    }

    #[test]
    fn illegal_moves_leave_position_untouched() {
        let mut position = Position::initial();
        let before = position;

        assert_eq!(
            position.apply_move(mv((4, 4), (5, 4))),
            Err(ApplyMoveError::EmptySquare)
        );
        assert_eq!(
            position.apply_move(mv((3, 0), (4, 0))),
            Err(ApplyMoveError::NotSideToMove)
        );
        assert_eq!(
            position.apply_move(mv((6, 0), (4, 0))),
            Err(ApplyMoveError::IllegalDestination)
        );
        assert_eq!(position, before);
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        let mut board = Board::empty();
        board.place(sq(9, 4), Piece::new(PieceKind::King, Side::Red));
        board.place(sq(8, 4), Piece::new(PieceKind::Chariot, Side::Red));
        board.place(sq(2, 4), Piece::new(PieceKind::Chariot, Side::Blue));
        board.place(sq(0, 3), Piece::new(PieceKind::King, Side::Blue));
        let position = Position::from_board(board, Side::Red);

        let moves = position.legal_moves(sq(8, 4));
        assert!(moves.iter().all(|square| square.col() == 4));
        assert!(moves.contains(&sq(2, 4)));
        assert!(!moves.contains(&sq(8, 3)));

        // 同じ手を盤面に直接適用すると王が狙われる。
        let mut bypass = board;
        bypass.relocate(sq(8, 4), sq(8, 3));
        let exposed = Position::from_board(bypass, Side::Blue);
        assert!(exposed.is_in_check(Side::Red));
    }

    #[test]
    fn capturing_king_ends_game_without_turn_flip() {
        let mut board = Board::empty();
        board.place(sq(9, 4), Piece::new(PieceKind::King, Side::Red));
        board.place(sq(5, 3), Piece::new(PieceKind::Chariot, Side::Red));
        board.place(sq(0, 3), Piece::new(PieceKind::King, Side::Blue));
        let mut position = Position::from_board(board, Side::Red);

        assert_eq!(position.apply_move(mv((5, 3), (0, 3))), Ok(Status::Won(Side::Red)));
        assert!(position.is_terminal());
        assert_eq!(position.winner(), Some(Side::Red));
        assert_eq!(position.side_to_move(), Side::Red);

        let frozen = position;
        assert_eq!(
            position.apply_move(mv((0, 3), (1, 3))),
            Err(ApplyMoveError::GameOver)
        );
        assert_eq!(position, frozen);
    }

    #[test]
    fn copies_are_independent() {
        let original = Position::initial();
        let mut copy = original;
        assert!(copy.apply_move(mv((6, 0), (5, 0))).is_ok());
        assert_ne!(copy, original);
        assert_eq!(original.piece_at(sq(6, 0)).map(Piece::kind), Some(PieceKind::Soldier));
        assert_eq!(original.side_to_move(), Side::Red);
    }

    #[test]
    fn missing_kings_decide_winner() {
        let mut board = Board::empty();
        board.place(sq(0, 4), Piece::new(PieceKind::King, Side::Blue));
        assert_eq!(Position::from_board(board, Side::Red).winner(), Some(Side::Blue));
        assert_eq!(Position::from_board(Board::empty(), Side::Red).winner(), None);
    }
}
