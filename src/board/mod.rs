use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::MoveGenError;
use crate::prelude::*;

pub mod components;
pub mod fen;


/// Mailbox board plus the non-placement FEN fields.
///
/// The mailbox is the only record of where pieces are; anything that wants a
/// piece's square asks the board.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct Board {
    mailbox: [Option<PieceInfo>; NUM_SQUARES],
    pub stm: Side,
    pub castling_rights: CastlingRights,
    pub enpassant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_counter: u16,
}

impl Default for Board {
    /// Empty board, white to move
    fn default() -> Self {
        Self {
            mailbox: [None; NUM_SQUARES],
            stm: Side::White,
            castling_rights: CastlingRights::empty(),
            enpassant_square: None,
            halfmove_clock: 0,
            fullmove_counter: 1,
        }
    }
}

/// How [`Board::render`] draws a square
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// `wP`, `bN`, `..`
    #[default]
    Ascii,
    /// Chess glyph followed by a space
    Unicode,
}

impl Board {
    /// Standard starting position
    pub fn new() -> Self {
        match Self::from_fen(START_FEN) {
            Ok(board) => board,
            Err(e) => unreachable!("start position must parse: {e}"),
        }
    }

    #[inline(always)]
    pub const fn mailbox(&self) -> &[Option<PieceInfo>; NUM_SQUARES] {
        &self.mailbox
    }

    #[inline(always)]
    pub fn get_piece_at(&self, square: Square) -> Option<PieceInfo> {
        self.mailbox[square.index()]
    }

    #[inline(always)]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.mailbox[square.index()].is_some()
    }

    #[inline(always)]
    pub fn square_belongs_to(&self, side: Side, square: Square) -> bool {
        self.mailbox[square.index()].is_some_and(|info| info.side == side)
    }

    /// Puts a piece on an empty square.
    pub fn set(&mut self, square: Square, info: PieceInfo) -> Result<(), MoveGenError> {
        if let Some(occupant) = self.mailbox[square.index()] {
            return Err(MoveGenError::Occupied { square, occupant });
        }
        self.mailbox[square.index()] = Some(info);
        Ok(())
    }

    /// Takes the piece off `square`, returning it.
    pub fn remove_piece(&mut self, square: Square) -> Result<PieceInfo, MoveGenError> {
        self.mailbox[square.index()]
            .take()
            .ok_or(MoveGenError::EmptySquare { square })
    }

    /// Every occupied square with its occupant, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceInfo)> + '_ {
        Square::all().filter_map(|sq| self.mailbox[sq.index()].map(|info| (sq, info)))
    }

    pub fn side_pieces(&self, side: Side) -> impl Iterator<Item = (Square, PieceInfo)> + '_ {
        self.pieces().filter(move |(_, info)| info.side == side)
    }

    pub fn occupancy(&self, side: Side) -> BitBoard {
        self.side_pieces(side).map(|(sq, _)| sq).collect()
    }

    /// Eight rows, rank 8 first, two characters per square.
    pub fn render(&self, style: RenderStyle) -> String {
        let mut out = String::with_capacity(NUM_SQUARES * 3 + 32);
        for rank in (0..NUM_RANKS).rev() {
            out.push((b'1' + rank as u8) as char);
            out.push(' ');
            for file in 0..NUM_FILES {
                let cell = match (self.mailbox[rank * 8 + file], style) {
                    (None, RenderStyle::Ascii) => ['.', '.'],
                    (None, RenderStyle::Unicode) => ['·', ' '],
                    (Some(info), RenderStyle::Ascii) => {
                        [info.side.tag(), info.piece.fen_char(Side::White)]
                    }
                    (Some(info), RenderStyle::Unicode) => [info.piece.icon(info.side), ' '],
                };
                out.extend(cell);
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(RenderStyle::Ascii))?;
        write!(f, "FEN: {}", self.to_fen())
    }
}
