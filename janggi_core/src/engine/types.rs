use core::fmt;
use core::str::FromStr;

/// 宮（palace）の最左列。
const PALACE_COL_MIN: u8 = 3;

/// 宮（palace）の最右列。
const PALACE_COL_MAX: u8 = 5;

/// 陣営（手番）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// 後手（楚）。盤の上側（0..=2 行目が宮）。
    Blue,
    /// 先手（漢）。盤の下側（7..=9 行目が宮）。
    Red,
}

impl Side {
    /// 前進方向の行の増分を返す（赤は上へ、青は下へ進む）。
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Self::Blue => 1,
            Self::Red => -1,
        }
    }

    /// 相手側の陣営を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Blue => Self::Red,
            Self::Red => Self::Blue,
        }
    }

    /// 自陣の宮の行範囲（両端含む）を返す。
    #[inline]
    #[must_use]
    pub const fn palace_rows(self) -> (u8, u8) {
        match self {
            Self::Blue => (0, 2),
            Self::Red => (7, 9),
        }
    }
}

impl fmt::Display for Side {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Blue => "Blue",
            Self::Red => "Red",
        };
        f.write_str(name)
    }
}

/// 駒の種類。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PieceKind {
    /// 包（포）。
    Cannon,
    /// 車（차）。
    Chariot,
    /// 象（상）。
    Elephant,
    /// 士（사）。
    Guard,
    /// 馬（마）。
    Horse,
    /// 王（왕）。
    King,
    /// 卒（졸）。
    Soldier,
}

/// 盤上の駒（種類と陣営）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    /// 駒の種類。
    kind: PieceKind,
    /// 所属する陣営。
    side: Side,
}

impl Piece {
    /// 駒の種類を返す。
    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// 種類と陣営から駒を生成する。
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// 所属する陣営を返す。
    #[inline]
    #[must_use]
    pub const fn side(self) -> Side {
        self.side
    }

    /// 盤面表示用の1文字（赤は大文字、青は小文字）。
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        let upper = match self.kind {
            PieceKind::Cannon => 'C',
            PieceKind::Chariot => 'R',
            PieceKind::Elephant => 'E',
            PieceKind::Guard => 'G',
            PieceKind::Horse => 'H',
            PieceKind::King => 'K',
            PieceKind::Soldier => 'S',
        };
        match self.side {
            Side::Blue => upper.to_ascii_lowercase(),
            Side::Red => upper,
        }
    }
}

/// 盤上の交点（行 0..=9、列 0..=8）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square {
    /// 列（0..=8）。
    col: u8,
    /// 行（0..=9）。
    row: u8,
}

impl Square {
    /// 列数。
    pub const COLS: u8 = 9;

    /// 交点の総数。
    pub const COUNT: u8 = 90;

    /// 行数。
    pub const ROWS: u8 = 10;

    /// 全交点を行優先（row-major）で列挙する。
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        (u8::MIN..Self::COUNT).filter_map(Self::from_index)
    }

    /// 列を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 行優先インデックスから `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        let row = match index.checked_div(Self::COLS) {
            Some(value) => value,
            None => return None,
        };
        let col = match index.checked_rem(Self::COLS) {
            Some(value) => value,
            None => return None,
        };
        Self::new(row, col)
    }

    /// 指定陣営の宮の内部にあるかを返す。
    #[inline]
    #[must_use]
    pub const fn in_palace(self, side: Side) -> bool {
        let (row_min, row_max) = side.palace_rows();
        self.row >= row_min
            && self.row <= row_max
            && self.col >= PALACE_COL_MIN
            && self.col <= PALACE_COL_MAX
    }

    /// 行優先インデックス（0..=89）を返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        // row <= 9, col <= 8 なので溢れない。
        (self.row as usize)
            .wrapping_mul(Self::COLS as usize)
            .wrapping_add(self.col as usize)
    }

    /// 行・列から `Square` を生成する（範囲外なら `None`）。
    #[inline]
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= Self::ROWS || col >= Self::COLS {
            return None;
        }
        Some(Self { col, row })
    }

    /// 行・列方向にずらした交点を返す（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = match self.row.checked_add_signed(d_row) {
            Some(value) => value,
            None => return None,
        };
        let col = match self.col.checked_add_signed(d_col) {
            Some(value) => value,
            None => return None,
        };
        Self::new(row, col)
    }

    /// 行を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }
}

impl fmt::Display for Square {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = ParseMoveError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let Some((row_text, col_text)) = text.trim().split_once(',') else {
            return Err(ParseMoveError::InvalidFormat);
        };
        let row = match row_text.trim().parse::<u8>() {
            Ok(value) => value,
            Err(_err) => return Err(ParseMoveError::InvalidFormat),
        };
        let col = match col_text.trim().parse::<u8>() {
            Ok(value) => value,
            Err(_err) => return Err(ParseMoveError::InvalidFormat),
        };
        Self::new(row, col).ok_or(ParseMoveError::OutOfRange)
    }
}

/// 1手（移動元と移動先）。駒取りは移動先の駒から暗黙に決まる。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    /// 移動元。
    from: Square,
    /// 移動先。
    to: Square,
}

impl Move {
    /// 移動元を返す。
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// 移動元と移動先から手を生成する。
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// 移動先を返す。
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// `"6,0 5,0"` または `"6,0->5,0"` 形式を受け付ける。
    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let split = trimmed
            .split_once("->")
            .or_else(|| trimmed.split_once(char::is_whitespace));
        let Some((from_text, to_text)) = split else {
            return Err(ParseMoveError::InvalidFormat);
        };

        let from = match from_text.parse::<Square>() {
            Ok(value) => value,
            Err(err) => return Err(err),
        };
        let to = match to_text.parse::<Square>() {
            Ok(value) => value,
            Err(err) => return Err(err),
        };
        Ok(Self::new(from, to))
    }
}

/// 座標・手の文字列表現の解析に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ParseMoveError {
    /// `row,col` の形式になっていない。
    InvalidFormat,
    /// 座標が盤外。
    OutOfRange,
}

impl fmt::Display for ParseMoveError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidFormat => f.write_str("expected `row,col row,col`"),
            Self::OutOfRange => f.write_str("square is outside the 10x9 board"),
        }
    }
}

impl core::error::Error for ParseMoveError {}

#[cfg(test)]
mod tests {
    use super::{Move, ParseMoveError, Side, Square};

    #[test]
    fn opponent_is_involutive() {
        for side in [Side::Blue, Side::Red] {
            assert_ne!(side.opponent(), side);
            assert_eq!(side.opponent().opponent(), side);
        }
    }

    #[test]
    fn square_rejects_out_of_range() {
        assert!(Square::new(9, 8).is_some());
        assert!(Square::new(10, 0).is_none());
        assert!(Square::new(0, 9).is_none());
        let corner = Square::new(0, 0);
        assert_eq!(corner.and_then(|sq| sq.offset(-1, 0)), None);
        assert_eq!(corner.and_then(|sq| sq.offset(0, -1)), None);
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 90);
        for (index, square) in squares.iter().enumerate() {
            assert_eq!(square.index(), index);
        }
        assert_eq!(squares.first().copied(), Square::new(0, 0));
        assert_eq!(squares.get(9).copied(), Square::new(1, 0));
    }

    #[test]
    fn palace_boxes() {
        let red_center = Square::new(8, 4).unwrap_or_else(|| unreachable!());
        assert!(red_center.in_palace(Side::Red));
        assert!(!red_center.in_palace(Side::Blue));
        let outside = Square::new(8, 2).unwrap_or_else(|| unreachable!());
        assert!(!outside.in_palace(Side::Red));
    }

    #[test]
    fn parse_move_notation() {
        let expected = Square::new(6, 0).zip(Square::new(5, 0)).map(|(a, b)| Move::new(a, b));
        assert_eq!("6,0 5,0".parse::<Move>().ok(), expected);
        assert_eq!("6,0->5,0".parse::<Move>().ok(), expected);
        assert_eq!(
            "6,0 10,0".parse::<Move>(),
            Err(ParseMoveError::OutOfRange)
        );
        assert_eq!("60 50".parse::<Move>(), Err(ParseMoveError::InvalidFormat));
    }
}
