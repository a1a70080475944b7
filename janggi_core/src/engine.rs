/// 盤面（10×9 の交点）と初期配置の実装。
pub mod board;
/// 1局の進行（対局セッション）の実装。
pub mod game;
/// 駒の種類ごとの擬似合法手と利きの判定。
pub mod movegen;
/// 局面（盤面＋手番＋勝者）と合法手/着手適用の実装。
pub mod position;
pub mod types;

pub type ApplyMoveError = position::ApplyMoveError;
pub type Board = board::Board;
pub type Game = game::Game;
pub type Move = types::Move;
pub type Piece = types::Piece;
pub type ParseMoveError = types::ParseMoveError;
pub type PieceKind = types::PieceKind;
pub type Position = position::Position;
pub type Side = types::Side;
pub type Square = types::Square;
pub type GameStatus = position::Status;
