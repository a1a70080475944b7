use core::fmt;

use crate::engine::types::{Piece, PieceKind, Side, Square};

/// 交点の総数（配列長）。
const CELL_COUNT: usize = Square::COUNT as usize;

/// 本陣（最下段/最上段）の並び（列 0..=8）。
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Guard,
    PieceKind::King,
    PieceKind::Guard,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// 包の初期列。
const CANNON_COLS: [u8; 2] = [1, 7];

/// 卒の初期列。
const SOLDIER_COLS: [u8; 5] = [0, 2, 4, 6, 8];

/// 10×9 の盤面。`Copy` なので値渡しで完全な複製になる。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// 行優先で並べた各交点の駒。
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// 駒が1つもない盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// 指定陣営の王の位置を返す（取られていれば `None`）。
    #[inline]
    #[must_use]
    pub fn find_king(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|&(_, piece)| piece.kind() == PieceKind::King && piece.side() == side)
            .map(|(square, _)| square)
    }

    /// 標準の初期配置を返す（0 行目が青の本陣、9 行目が赤の本陣）。
    #[inline]
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for side in [Side::Blue, Side::Red] {
            let (back, cannon, soldier) = match side {
                Side::Blue => (0_u8, 2_u8, 3_u8),
                Side::Red => (9_u8, 7_u8, 6_u8),
            };

            for (col, kind) in (u8::MIN..).zip(BACK_RANK) {
                board.place_at(back, col, Piece::new(kind, side));
            }
            for col in CANNON_COLS {
                board.place_at(cannon, col, Piece::new(PieceKind::Cannon, side));
            }
            for col in SOLDIER_COLS {
                board.place_at(soldier, col, Piece::new(PieceKind::Soldier, side));
            }
        }
        board
    }

    /// 指定陣営の王が盤上にあるかを返す。
    #[inline]
    #[must_use]
    pub fn has_king(&self, side: Side) -> bool {
        self.find_king(side).is_some()
    }

    /// 指定交点の駒を返す。
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells.get(square.index()).copied().flatten()
    }

    /// 盤上の全駒を行優先で列挙する。
    #[inline]
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// 指定交点に駒を置く（既存の駒は上書きされる）。
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    /// 行・列を指定して駒を置く（初期配置用）。
    fn place_at(&mut self, row: u8, col: u8, piece: Piece) {
        let square = Square::new(row, col);
        debug_assert!(square.is_some(), "layout square out of range: {row},{col}");
        if let Some(value) = square {
            self.place(value, piece);
        }
    }

    /// 駒を移動する。移動先の駒は消える（駒取り）。合法性は検査しない。
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let moving = self.piece_at(from);
        self.set(from, None);
        self.set(to, moving);
    }

    /// 指定交点の駒を取り除き、取り除いた駒を返す。
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let removed = self.piece_at(square);
        self.set(square, None);
        removed
    }

    /// 指定交点の内容を書き換える。
    fn set(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(cell) = self.cells.get_mut(square.index()) {
            *cell = piece;
        }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in u8::MIN..Square::COLS {
            write!(f, " {col}")?;
        }
        writeln!(f)?;

        for row in u8::MIN..Square::ROWS {
            write!(f, "{row} ")?;
            for col in u8::MIN..Square::COLS {
                let symbol = Square::new(row, col)
                    .and_then(|square| self.piece_at(square))
                    .map_or('.', Piece::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
