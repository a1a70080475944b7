use rand::SeedableRng as _;
use rand::seq::SliceRandom as _;
use rand_chacha::ChaCha8Rng;

use crate::ai::move_list::list_moves;
use crate::ai::types::Ai;
use crate::engine::position::Position;
use crate::engine::types::Move;

/// 合法手からランダムに1手を選択するAI。
///
/// `seed` が同じなら同じ局面列に対して同じ手を返す。
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: ChaCha8Rng,
}

impl Agent {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, position: &Position) -> Option<Move> {
        let moves = list_moves(position);
        let choice = moves.choose(&mut self.rng).copied();
        tracing::trace!(candidates = moves.len(), ?choice, "random move");
        choice
    }
}
