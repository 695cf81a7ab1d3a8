use crate::prelude::*;

use super::{Direction, Generated, MoveGenerator};

/// Pawn, knight or king: a fixed set of candidate squares, each looked at
/// once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteppingPiece {
    Pawn { side: Side, has_moved: bool },
    Knight { side: Side },
    King { side: Side },
}

impl SteppingPiece {
    pub const fn side(&self) -> Side {
        match *self {
            SteppingPiece::Pawn { side, .. }
            | SteppingPiece::Knight { side }
            | SteppingPiece::King { side } => side,
        }
    }

    /// On-board offset targets of a knight or king. Pawns use their own
    /// rules and get nothing here.
    fn targets(&self, from: Square) -> impl Iterator<Item = Square> {
        let (offsets, in_reach): (&'static [i8], fn(usize, usize) -> bool) = match self {
            SteppingPiece::Knight { .. } => (&Direction::KNIGHT, knight_reach),
            SteppingPiece::King { .. } => (&Direction::ALL, king_reach),
            SteppingPiece::Pawn { .. } => (&[], king_reach),
        };
        offsets.iter().filter_map(move |&delta| {
            // off-board offsets are simply dropped
            let target = from.offset(delta).ok()?;
            let df = target.file().abs_diff(from.file());
            let dr = target.rank().abs_diff(from.rank());
            in_reach(df, dr).then_some(target)
        })
    }
}

/// A knight offset that wraps a file edge lands with the wrong file delta.
fn knight_reach(df: usize, dr: usize) -> bool {
    (df == 1 && dr == 2) || (df == 2 && dr == 1)
}

fn king_reach(df: usize, dr: usize) -> bool {
    df <= 1 && dr <= 1
}

impl MoveGenerator for SteppingPiece {
    fn calculate_moves(&self, board: &Board, from: Square) -> Generated {
        let moves = match *self {
            SteppingPiece::Pawn { side, has_moved } => pawn_pushes(board, from, side, has_moved),
            _ => self
                .targets(from)
                .filter(|&target| !board.is_occupied(target))
                .collect(),
        };
        trace!("{:?} on {from}: {} quiet moves", self, moves.pop_count());
        Generated {
            moves,
            captures: BitBoard::EMPTY,
        }
    }

    fn calculate_captures(&self, board: &Board, from: Square) -> BitBoard {
        let enemy = self.side().flip();
        match *self {
            SteppingPiece::Pawn { side, .. } => pawn_captures(board, from, side),
            _ => self
                .targets(from)
                .filter(|&target| board.square_belongs_to(enemy, target))
                .collect(),
        }
    }
}

const fn pawn_push(side: Side) -> i8 {
    match side {
        Side::White => Direction::NORTH,
        Side::Black => Direction::SOUTH,
    }
}

/// Single push if the square ahead is empty, then the double push for an
/// unmoved pawn. A blocked single push rules out the double push as well.
pub fn pawn_pushes(board: &Board, from: Square, side: Side, has_moved: bool) -> BitBoard {
    let mut moves = BitBoard::default();
    let push = pawn_push(side);

    let Ok(single) = from.offset(push) else {
        return moves;
    };
    if board.is_occupied(single) {
        return moves;
    }
    moves.set(single.index());

    if !has_moved {
        if let Ok(double) = single.offset(push) {
            if !board.is_occupied(double) {
                moves.set(double.index());
            }
        }
    }
    moves
}

/// Forward diagonals holding an enemy piece. The file check keeps a-file and
/// h-file pawns from capturing round the edge of the board.
pub fn pawn_captures(board: &Board, from: Square, side: Side) -> BitBoard {
    let diagonals = match side {
        Side::White => [Direction::NORTHWEST, Direction::NORTHEAST],
        Side::Black => [Direction::SOUTHWEST, Direction::SOUTHEAST],
    };
    diagonals
        .into_iter()
        .filter_map(|delta| from.offset(delta).ok())
        .filter(|target| target.file().abs_diff(from.file()) == 1)
        .filter(|&target| board.square_belongs_to(side.flip(), target))
        .collect()
}
