use std::{
    fmt::{Display, Write},
    ops::{BitAnd, BitOr, BitOrAssign},
    str::FromStr,
};

use miette::Context;
use serde::{Deserialize, Serialize};

use crate::error::MoveGenError;
use crate::prelude::*;

/// Set of squares, one bit per square (bit 0 is a1).
#[derive(Debug, Default, Hash, PartialEq, Eq, PartialOrd, Clone, Copy)]
#[repr(transparent)]
pub struct BitBoard(pub u64);

impl BitOrAssign for BitBoard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl BitOr for BitBoard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for BitBoard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl FromIterator<Square> for BitBoard {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut bb = BitBoard::default();
        iter.into_iter().for_each(|sq| bb.set(sq.index()));
        bb
    }
}

impl BitBoard {
    pub const EMPTY: BitBoard = BitBoard(0);

    #[inline(always)]
    pub const fn set(&mut self, pos: usize) {
        self.0 |= 1 << pos;
    }

    #[inline(always)]
    pub const fn clear(&mut self) {
        self.0 = 0;
    }

    #[inline(always)]
    pub const fn pop_count(&self) -> u32 {
        self.0.count_ones()
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains_square(&self, index: usize) -> bool {
        index < NUM_SQUARES && (self.0 & (1 << index)) != 0
    }

    #[inline(always)]
    pub const fn iter_bits(&self) -> BitBoardIterator {
        BitBoardIterator { remaining: self.0 }
    }

    pub fn squares(&self) -> impl Iterator<Item = Square> {
        self.iter_bits().map(Square)
    }

    /// Rank 8 on top, a-file on the left.
    pub fn print_bitboard(&self) -> String {
        let mut out = String::with_capacity(NUM_SQUARES * 2);
        for rank in (0..NUM_RANKS).rev() {
            let row: Vec<&str> = (0..NUM_FILES)
                .map(|file| {
                    if self.contains_square(rank * 8 + file) {
                        "1"
                    } else {
                        "0"
                    }
                })
                .collect();
            let _ = writeln!(out, "{}", row.join(" "));
        }
        out
    }
}

/// Iterator that yields each set bit position in a BitBoard
pub struct BitBoardIterator {
    remaining: u64,
}

impl Iterator for BitBoardIterator {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.remaining.trailing_zeros() as usize;
        self.remaining &= self.remaining - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.remaining.count_ones() as usize;
        (exact, Some(exact))
    }
}

impl ExactSizeIterator for BitBoardIterator {}

#[derive(
    Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    White,
    Black,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

impl Side {
    pub const SIDES: [Side; NUM_SIDES] = [Side::White, Side::Black];

    pub const fn flip(&self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub const fn index(&self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    /// Rank (0 indexed) this side's pawns start on.
    pub const fn pawn_rank(&self) -> usize {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    pub const fn tag(&self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

/// Kind of a piece. The closed set every generator dispatches on.
#[derive(Default, PartialEq, Eq, Debug, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Piece {
    #[default]
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Piece::Pawn => write!(f, "Pawn"),
            Piece::Knight => write!(f, "Knight"),
            Piece::Bishop => write!(f, "Bishop"),
            Piece::Rook => write!(f, "Rook"),
            Piece::Queen => write!(f, "Queen"),
            Piece::King => write!(f, "King"),
        }
    }
}

impl Piece {
    pub const PIECES: [Piece; NUM_PIECES] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    pub const PIECE_CHARS: [[char; NUM_PIECES]; NUM_SIDES] = [
        ['P', 'N', 'B', 'R', 'Q', 'K'], // White
        ['p', 'n', 'b', 'r', 'q', 'k'], // Black
    ];

    #[inline(always)]
    pub const fn index(&self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    pub const fn is_slider(&self) -> bool {
        matches!(self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }

    /// FEN letter, uppercase for white.
    pub const fn fen_char(&self, side: Side) -> char {
        Self::PIECE_CHARS[side.index()][self.index()]
    }

    pub fn from_fen_char(c: char) -> Option<(Piece, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, side))
    }

    pub fn icon(&self, side: Side) -> char {
        let (white, black) = match self {
            Piece::Pawn => ('♟', '♙'),
            Piece::Knight => ('♞', '♘'),
            Piece::Bishop => ('♝', '♗'),
            Piece::Rook => ('♜', '♖'),
            Piece::Queen => ('♛', '♕'),
            Piece::King => ('♚', '♔'),
        };
        match side {
            Side::White => white,
            Side::Black => black,
        }
    }
}

/// Occupant of a single mailbox slot
#[derive(Debug, Default, Hash, PartialEq, Eq, PartialOrd, Clone, Copy)]
pub struct PieceInfo {
    pub piece: Piece,
    pub side: Side,
    /// Only pawns read this: a moved pawn loses its double step.
    pub has_moved: bool,
}

impl PieceInfo {
    pub fn new(piece: Piece, side: Side) -> Self {
        Self {
            piece,
            side,
            has_moved: false,
        }
    }

    pub fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}

impl Display for PieceInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.side, self.piece)
    }
}

/// Castling rights are stored in a [`u8`]:
/// ```text
/// Bit: 3 2 1 0
///      q k Q K
/// ```
/// They are carried from FEN to FEN; nothing here generates castling moves.
#[derive(Debug, Default, Hash, PartialEq, Eq, PartialOrd, Clone, Copy)]
#[repr(transparent)]
pub struct CastlingRights(pub u8);

impl CastlingRights {
    pub const NO_CASTLING: u8 = 0;
    /// White King side castling
    pub const WHITE_00: u8 = 0b0001;
    /// White Queen side castling
    pub const WHITE_000: u8 = 0b0010;
    /// Black King side castling
    pub const BLACK_00: u8 = 0b0100;
    /// Black Queen side castling
    pub const BLACK_000: u8 = 0b1000;

    pub const ANY_CASTLING: Self =
        Self(Self::WHITE_00 | Self::WHITE_000 | Self::BLACK_00 | Self::BLACK_000);

    #[inline(always)]
    pub const fn all() -> Self {
        Self::ANY_CASTLING
    }

    #[inline(always)]
    pub const fn empty() -> Self {
        Self(Self::NO_CASTLING)
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == Self::NO_CASTLING
    }

    #[inline(always)]
    pub const fn allows(&self, right: u8) -> bool {
        self.0 & right != Self::NO_CASTLING
    }
}

impl Display for CastlingRights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (right, c) in [
            (Self::WHITE_00, 'K'),
            (Self::WHITE_000, 'Q'),
            (Self::BLACK_00, 'k'),
            (Self::BLACK_000, 'q'),
        ] {
            if self.allows(right) {
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}

/// Represents a single square on the board.
/// # Representation
/// ```text
///  56 57 58 59 60 61 62 63   <- rank 8
///  ...
///   8  9 10 11 12 13 14 15
///   0  1  2  3  4  5  6  7   <- rank 1
///   a  b  c  d  e  f  g  h
///```
#[derive(Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[repr(transparent)]
pub struct Square(usize);

impl Square {
    /// Returns a Square from a given index. Will return None if index is out of bounds
    /// index should be [0, 63]
    #[inline(always)]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            return Some(Self(index));
        }
        None
    }

    /// Returns a Square from a given file and rank, both 0 indexed.
    #[inline(always)]
    pub const fn from_coords(file: usize, rank: usize) -> Option<Self> {
        if file < NUM_FILES && rank < NUM_RANKS {
            return Some(Square(rank * 8 + file));
        }
        None
    }

    /// Adds `delta` to the index. Leaving [0, 63] is an error; wrapping
    /// across a file edge is not detected here.
    #[inline(always)]
    pub fn offset(&self, delta: i8) -> Result<Square, MoveGenError> {
        let target = self.0 as isize + delta as isize;
        Square::try_from(target)
    }

    /// 0 indexed, a-file is 0
    #[inline(always)]
    pub const fn file(&self) -> usize {
        self.0 % 8
    }

    /// 0 indexed, rank 1 is 0
    #[inline(always)]
    pub const fn rank(&self) -> usize {
        self.0 / 8
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square)
    }
}

impl TryFrom<isize> for Square {
    type Error = MoveGenError;

    fn try_from(value: isize) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(Square::new)
            .ok_or(MoveGenError::OutOfBoundsSquare { index: value })
    }
}

impl FromStr for Square {
    type Err = miette::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        miette::ensure!(
            s.len() == 2,
            "Square needs 1 Letter and 1 Number to construct, got '{s}'"
        );
        let s = s.to_ascii_lowercase();
        let mut iter = s.chars();
        let letter = iter.next().context("1st char should be letter")?;
        let num = iter.next().context("2nd char should be number")?;
        miette::ensure!(
            ('a'..='h').contains(&letter),
            "File '{letter}' isn't valid. Valid file = ['a'..='h']"
        );
        miette::ensure!(
            ('1'..='8').contains(&num),
            "Rank '{num}' isn't valid. Valid rank = ['1'..='8']"
        );
        let file = (letter as u8 - b'a') as usize;
        let rank = (num as u8 - b'1') as usize;
        Square::from_coords(file, rank).context("Square out of range")
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (self.file() as u8 + b'a') as char;
        let rank = (self.rank() as u8 + b'1') as char;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_bitboard() {
        let out = "0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 1 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 1 0 0 0 0
";
        // e4 and d1
        let b = BitBoard((1 << 28) | (1 << 3));
        assert_eq!(out, b.print_bitboard())
    }

    #[test]
    fn test_display_square() {
        assert_eq!(format!("{}", Square(0)), "a1");
        assert_eq!(format!("{}", Square(7)), "h1");
        assert_eq!(format!("{}", Square(8)), "a2");
        assert_eq!(format!("{}", Square(11)), "d2");
        assert_eq!(format!("{}", Square(27)), "d4");
        assert_eq!(format!("{}", Square(36)), "e5");
        assert_eq!(format!("{}", Square(56)), "a8");
        assert_eq!(format!("{}", Square(63)), "h8");
    }

    #[test]
    fn test_parse_square() {
        assert_eq!(Square::from_str("a1").unwrap().index(), 0);
        assert_eq!(Square::from_str("E4").unwrap().index(), 28);
        assert_eq!(Square::from_str("h8").unwrap().index(), 63);
        assert!(Square::from_str("i1").is_err());
        assert!(Square::from_str("a9").is_err());
        assert!(Square::from_str("a").is_err());
        assert!(Square::from_str("a10").is_err());
    }

    #[test]
    fn test_square_coords() {
        let sq = Square::new(27).unwrap();
        assert_eq!((sq.file(), sq.rank()), (3, 3));
        assert_eq!(Square::from_coords(7, 7), Square::new(63));
        assert_eq!(Square::from_coords(8, 0), None);
        assert_eq!(Square::new(64), None);
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let a1 = Square::new(0).unwrap();
        assert_eq!(
            a1.offset(-1),
            Err(MoveGenError::OutOfBoundsSquare { index: -1 })
        );
        let h8 = Square::new(63).unwrap();
        assert_eq!(
            h8.offset(8),
            Err(MoveGenError::OutOfBoundsSquare { index: 71 })
        );
        // a file wrap is still in bounds, the generators guard it separately
        assert_eq!(Square::new(7).unwrap().offset(1), Ok(Square(8)));
    }

    #[test]
    fn test_bitboard_dedups() {
        let mut bb = BitBoard::default();
        bb.set(36);
        bb.set(36);
        assert_eq!(bb.pop_count(), 1);
        assert_eq!(bb.squares().collect::<Vec<_>>(), vec![Square(36)]);
        assert!(!bb.contains_square(64));
    }

    #[test]
    fn test_castling_display() {
        assert_eq!(CastlingRights::all().to_string(), "KQkq");
        assert_eq!(CastlingRights::empty().to_string(), "-");
        assert_eq!(
            CastlingRights(CastlingRights::WHITE_00 | CastlingRights::BLACK_000).to_string(),
            "Kq"
        );
    }

    #[test]
    fn test_piece_chars() {
        assert_eq!(Piece::from_fen_char('N'), Some((Piece::Knight, Side::White)));
        assert_eq!(Piece::from_fen_char('q'), Some((Piece::Queen, Side::Black)));
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::Rook.fen_char(Side::Black), 'r');
        for side in Side::SIDES {
            for piece in Piece::PIECES {
                let c = piece.fen_char(side);
                assert_eq!(Piece::from_fen_char(c), Some((piece, side)));
            }
        }
    }
}
