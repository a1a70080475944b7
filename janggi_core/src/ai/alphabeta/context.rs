use crate::engine::types::Side;

/// 探索統計。
#[derive(Default, Clone, Copy, Debug)]
pub(super) struct SearchStats {
    /// αβ で枝刈りした回数。
    cutoffs: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りの回数を返す。
    pub(super) const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 探索ノード数を返す。
    pub(super) const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// 探索実行に必要な共有コンテキスト。
#[derive(Debug)]
pub(super) struct SearchContext {
    /// 評価値を最大化する側。
    maximizer: Side,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 評価値を最大化する側を返す。
    pub(super) const fn maximizer(&self) -> Side {
        self.maximizer
    }

    /// 探索コンテキストを生成する。
    pub(super) fn new(maximizer: Side) -> Self {
        Self {
            maximizer,
            stats: SearchStats::default(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
