use rand::Rng;
use rand::seq::SliceRandom as _;

use crate::ai::move_list::list_moves;
use crate::engine::position::{Position, Status};
use crate::engine::types::{Move, Side};

use super::INF;
use super::context::SearchContext;
use super::eval::evaluate;

/// 手を決めた段階。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) enum Tier {
    /// 相手の即勝ち手の駒を取る手。
    Block,
    /// 一手で相手の王を取る手。
    ImmediateWin,
    /// ミニマックス（αβ付き）の最善手。
    Minimax,
    /// 合法手がない（または終局済み）。
    NoMoves,
    /// どの手も初期値を上回らなかったためのランダム手。
    RandomFallback,
}

/// 探索結果。
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchResult {
    /// ルートで選択した手。
    best_move: Option<Move>,
    /// ミニマックス段階で選んだ場合の評価値。
    best_score: Option<i32>,
    /// 手を決めた段階。
    tier: Tier,
}

impl SearchResult {
    /// ルートで選択した手を返す。
    pub(super) const fn best_move(self) -> Option<Move> {
        self.best_move
    }

    /// `best_move` の評価値を返す（ミニマックス段階のみ）。
    pub(super) const fn best_score(self) -> Option<i32> {
        self.best_score
    }

    /// 段階のみで決まった結果を作る。
    const fn decided(best_move: Option<Move>, tier: Tier) -> Self {
        Self {
            best_move,
            best_score: None,
            tier,
        }
    }

    /// 手を決めた段階を返す。
    pub(super) const fn tier(self) -> Tier {
        self.tier
    }
}

/// ルート探索（即勝ち → 即負け回避 → ミニマックス）。
pub(super) fn search_root<R: Rng + ?Sized>(
    position: &Position,
    depth: u8,
    ctx: &mut SearchContext,
    rng: &mut R,
) -> SearchResult {
    if position.is_terminal() {
        return SearchResult::decided(None, Tier::NoMoves);
    }

    let moves = list_moves(position);
    if moves.is_empty() {
        return SearchResult::decided(None, Tier::NoMoves);
    }

    if let Some(mv) = find_immediate_win(position, &moves) {
        return SearchResult::decided(Some(mv), Tier::ImmediateWin);
    }

    if let Some(mv) = find_block(position, &moves) {
        return SearchResult::decided(Some(mv), Tier::Block);
    }

    minimax_root(position, &moves, depth, ctx, rng)
}

/// 一手で手番側の勝ちになる最初の手を返す。
fn find_immediate_win(position: &Position, moves: &[Move]) -> Option<Move> {
    let side = position.side_to_move();
    moves
        .iter()
        .copied()
        .find(|&mv| wins_immediately(position, mv, side))
}

/// 相手の即勝ち手を調べ、その手を指す駒を取れる最初の手を返す。
///
/// 脅威ごとに独立に判定し、取れない脅威は放置して次の脅威へ進む。
fn find_block(position: &Position, moves: &[Move]) -> Option<Move> {
    let opponent = position.side_to_move().opponent();
    let swapped = position.with_side_to_move(opponent);

    list_moves(&swapped)
        .into_iter()
        .filter(|&threat| wins_immediately(&swapped, threat, opponent))
        .find_map(|threat| {
            moves
                .iter()
                .copied()
                .find(|candidate| candidate.to() == threat.from())
        })
}

/// 局面のコピーに `mv` を適用し、`side` の勝ちになるかを返す。
fn wins_immediately(position: &Position, mv: Move, side: Side) -> bool {
    let mut next = *position;
    next.apply_move(mv)
        .is_ok_and(|status| status == Status::Won(side))
}

/// 全合法手をミニマックスで評価し、最も高い手を返す（同点は先に見つけた手）。
fn minimax_root<R: Rng + ?Sized>(
    position: &Position,
    moves: &[Move],
    depth: u8,
    ctx: &mut SearchContext,
    rng: &mut R,
) -> SearchResult {
    let next_depth = depth.saturating_sub(1);
    let mut best_move: Option<Move> = None;
    let mut best_score = i32::MIN;
    let mut alpha = INF.wrapping_neg();

    for &mv in moves {
        let mut next = *position;
        if next.apply_move(mv).is_err() {
            continue;
        }

        let score = minimax(&next, next_depth, false, alpha, INF, ctx);
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    match best_move {
        Some(mv) => SearchResult {
            best_move: Some(mv),
            best_score: Some(best_score),
            tier: Tier::Minimax,
        },
        None => SearchResult::decided(moves.choose(rng).copied(), Tier::RandomFallback),
    }
}

/// ミニマックス（αβ付き）。`maximizing` の層では `ctx.maximizer()` 視点の最大値を取る。
///
/// 深さ 0、終局、合法手なしのいずれかで静的評価を返す。
pub(super) fn minimax(
    position: &Position,
    depth: u8,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.stats_mut().inc_nodes();

    if depth == u8::MIN || position.is_terminal() {
        return evaluate(position, ctx.maximizer());
    }

    let moves = list_moves(position);
    if moves.is_empty() {
        return evaluate(position, ctx.maximizer());
    }

    let next_depth = depth.saturating_sub(1);
    let mut alpha_mut = alpha;
    let mut beta_mut = beta;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut next = *position;
        if next.apply_move(mv).is_err() {
            continue;
        }

        let score = minimax(&next, next_depth, !maximizing, alpha_mut, beta_mut, ctx);
        if maximizing {
            best = best.max(score);
            alpha_mut = alpha_mut.max(best);
        } else {
            best = best.min(score);
            beta_mut = beta_mut.min(best);
        }

        if alpha_mut >= beta_mut {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    best
}
