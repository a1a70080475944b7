use crate::engine::position::Position;
use crate::engine::types::Move;

/// 手を選択するAI。
pub trait Ai {
    /// 現在局面から次の手を選択する（合法手がなければ `None`）。
    ///
    /// 局面は借用するだけで変更しない。
    fn select_move(&mut self, position: &Position) -> Option<Move>;
}
