use rand::Rng;
use rand::SeedableRng as _;
use rand_chacha::ChaCha8Rng;

use crate::ai::types::Ai;
use crate::engine::position::Position;
use crate::engine::types::{Move, Side};

use self::context::SearchContext;
use self::search::search_root;

/// 探索の統計と評価側を保持するコンテキスト。
mod context;
/// 静的評価関数。
mod eval;
/// 段階的な手選択（即勝ち、即負け回避、ミニマックス）。
mod search;

/// 既定の探索深さ（ply）。
pub const DEFAULT_DEPTH: u8 = 3;

/// 探索窓の無限大（評価値の絶対値より十分大きい）。
const INF: i32 = 1_000_000;

/// 終局時の勝敗評価の基準点。
const SCORE_WIN: i32 = 10_000;

/// アルファベータ探索を行うAI。
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Agent {
    /// 探索深さ。
    depth: u8,
    /// 評価値を最大化する側（AI 自身の陣営）。
    maximizer: Side,
    /// 同点手がないときのフォールバック用乱数。
    rng: ChaCha8Rng,
}

impl Agent {
    /// `depth`、担当陣営 `maximizer`、乱数の `seed` を指定して初期化する。
    #[inline]
    #[must_use]
    pub fn new(depth: u8, maximizer: Side, seed: u64) -> Self {
        Self {
            depth,
            maximizer,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, position: &Position) -> Option<Move> {
        select_move(position, self.depth, self.maximizer, &mut self.rng)
    }
}

/// 現局面から手を選んで返す（合法手がなければ `None`）。
///
/// 1. 一手で相手の王を取れるならその手。
/// 2. 相手が次に王を取れる手を持つなら、その駒を取る手。
/// 3. それ以外は `maximizer` 視点のミニマックス（αβ付き）で最も評価の高い手。
///
/// 評価の符号は手番に関係なく常に `maximizer` 視点。`rng` は同点すら付かない
/// 場合のフォールバックにのみ使う。`position` は読むだけで変更しない。
#[inline]
#[tracing::instrument(level = "debug", skip_all, fields(depth = depth, side = %position.side_to_move()))]
pub fn select_move<R: Rng + ?Sized>(
    position: &Position,
    depth: u8,
    maximizer: Side,
    rng: &mut R,
) -> Option<Move> {
    let mut ctx = SearchContext::new(maximizer);
    let result = search_root(position, depth, &mut ctx, rng);

    tracing::debug!(
        tier = ?result.tier(),
        best_move = ?result.best_move(),
        score = ?result.best_score(),
        nodes = ctx.stats().nodes(),
        cutoffs = ctx.stats().cutoffs(),
        "move selected"
    );

    result.best_move()
}
