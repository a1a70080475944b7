use crate::engine::position::{ApplyMoveError, Position, Status};
use crate::engine::types::{Move, Side, Square};

/// 1ゲームの進行を管理する構造体。UI 側はこれを1つ保持する。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 直前に適用された手。
    last_move: Option<Move>,
    /// 適用に成功した手数。
    ply_count: u32,
    /// 現在の局面。
    position: Position,
}

impl Game {
    /// 初期局面からゲームを開始する。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        Self::from_position(Position::initial())
    }

    /// 任意の局面からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn from_position(position: Position) -> Self {
        Self {
            last_move: None,
            ply_count: u32::MIN,
            position,
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.position.is_terminal()
    }

    /// 直前に適用された手を返す。
    #[inline]
    #[must_use]
    pub const fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// 指定交点の駒の合法な移動先を返す（選択中の駒のハイライト用）。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.position.legal_moves(from)
    }

    /// 1手を適用する。
    ///
    /// # Errors
    ///
    /// `Position::apply_move` と同じ条件で `ApplyMoveError` を返す。その場合ゲームは変化しない。
    #[inline]
    pub fn play(&mut self, mv: Move) -> Result<Status, ApplyMoveError> {
        let status = match self.position.apply_move(mv) {
            Ok(value) => value,
            Err(err) => {
                tracing::trace!(%mv, %err, "move rejected");
                return Err(err);
            }
        };

        self.last_move = Some(mv);
        self.ply_count = self.ply_count.saturating_add(1);
        Ok(status)
    }

    /// 適用に成功した手数を返す。
    #[inline]
    #[must_use]
    pub const fn ply_count(&self) -> u32 {
        self.ply_count
    }

    /// 現在の局面を返す。
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// 初期局面に戻す。
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::initial();
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Side {
        self.position.side_to_move()
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.position.status()
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}
