//! Pseudo-legal move generation over the mailbox.
//!
//! Every piece kind gets a [`MoveGenerator`]. Sliding pieces walk rays and
//! pick up captures on the way; stepping pieces look at a fixed set of
//! offsets and run their capture pass separately.

use crate::prelude::*;

pub mod batch;
pub mod sliding;
pub mod stepping;
pub mod tracked;


use sliding::SlidingPiece;
use stepping::SteppingPiece;

/// Index deltas on the a1 = 0 .. h8 = 63 mailbox.
pub struct Direction;
impl Direction {
    pub const NORTH: i8 = 8;
    pub const SOUTH: i8 = -8;
    pub const WEST: i8 = -1;
    pub const EAST: i8 = 1;
    pub const NORTHWEST: i8 = 7;
    pub const SOUTHEAST: i8 = -7;
    pub const NORTHEAST: i8 = 9;
    pub const SOUTHWEST: i8 = -9;

    pub const ORTHO: [i8; 4] = [Self::NORTH, Self::EAST, Self::WEST, Self::SOUTH];
    pub const DIAG: [i8; 4] = [
        Self::NORTHWEST,
        Self::NORTHEAST,
        Self::SOUTHEAST,
        Self::SOUTHWEST,
    ];
    pub const ALL: [i8; 8] = [
        Self::NORTH,
        Self::EAST,
        Self::WEST,
        Self::SOUTH,
        Self::NORTHWEST,
        Self::NORTHEAST,
        Self::SOUTHEAST,
        Self::SOUTHWEST,
    ];
    pub const KNIGHT: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

    /// Which way a delta moves along the files: -1 towards a, 1 towards h,
    /// 0 for the vertical steps.
    #[inline(always)]
    pub const fn file_step(delta: i8) -> i8 {
        match delta {
            Self::WEST | Self::NORTHWEST | Self::SOUTHWEST => -1,
            Self::EAST | Self::NORTHEAST | Self::SOUTHEAST => 1,
            _ => 0,
        }
    }
}

/// Output of one generator call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generated {
    /// Empty destination squares
    pub moves: BitBoard,
    /// Squares holding a capturable enemy piece
    pub captures: BitBoard,
}

impl Generated {
    pub fn merge(self, other: Generated) -> Generated {
        Generated {
            moves: self.moves | other.moves,
            captures: self.captures | other.captures,
        }
    }
}

pub trait MoveGenerator {
    /// Quiet destinations from `from`. Sliders also report the captures they
    /// run into, stepping pieces leave `captures` empty.
    fn calculate_moves(&self, board: &Board, from: Square) -> Generated;

    /// Separate capture pass. Always empty for sliders.
    fn calculate_captures(&self, board: &Board, from: Square) -> BitBoard;

    /// Both passes combined.
    fn generate(&self, board: &Board, from: Square) -> Generated {
        let moves = self.calculate_moves(board, from);
        Generated {
            moves: moves.moves,
            captures: moves.captures | self.calculate_captures(board, from),
        }
    }
}

/// Generator picked from a piece's kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Sliding(SlidingPiece),
    Stepping(SteppingPiece),
}

impl From<PieceInfo> for Generator {
    fn from(info: PieceInfo) -> Self {
        let side = info.side;
        match info.piece {
            Piece::Pawn => Generator::Stepping(SteppingPiece::Pawn {
                side,
                has_moved: info.has_moved,
            }),
            Piece::Knight => Generator::Stepping(SteppingPiece::Knight { side }),
            Piece::King => Generator::Stepping(SteppingPiece::King { side }),
            Piece::Bishop => Generator::Sliding(SlidingPiece::bishop(side)),
            Piece::Rook => Generator::Sliding(SlidingPiece::rook(side)),
            Piece::Queen => Generator::Sliding(SlidingPiece::queen(side)),
        }
    }
}

impl MoveGenerator for Generator {
    fn calculate_moves(&self, board: &Board, from: Square) -> Generated {
        match self {
            Generator::Sliding(slider) => slider.calculate_moves(board, from),
            Generator::Stepping(stepper) => stepper.calculate_moves(board, from),
        }
    }

    fn calculate_captures(&self, board: &Board, from: Square) -> BitBoard {
        match self {
            Generator::Sliding(slider) => slider.calculate_captures(board, from),
            Generator::Stepping(stepper) => stepper.calculate_captures(board, from),
        }
    }
}

impl MoveGenerator for PieceInfo {
    fn calculate_moves(&self, board: &Board, from: Square) -> Generated {
        Generator::from(*self).calculate_moves(board, from)
    }

    fn calculate_captures(&self, board: &Board, from: Square) -> BitBoard {
        Generator::from(*self).calculate_captures(board, from)
    }
}
