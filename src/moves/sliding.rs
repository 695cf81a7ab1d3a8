use crate::prelude::*;

use super::{Direction, Generated, MoveGenerator};

/// What the next square of a ray holds, from the walking piece's view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// Empty square, the ray carries on
    Open(Square),
    /// Left the board or wrapped onto the other edge
    OffBoard,
    /// Own piece, nothing recorded
    Friendly(Square),
    /// Opposing piece, recorded as a capture
    Enemy(Square),
}

/// Squares a single ray covered and why it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray {
    pub moves: BitBoard,
    pub end: StepOutcome,
}

/// Bishop, rook or queen: one ray per direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingPiece {
    pub side: Side,
    pub directions: &'static [i8],
}

const QUEEN_DIRECTIONS: [i8; 8] = Direction::ALL;

impl SlidingPiece {
    pub const fn bishop(side: Side) -> Self {
        Self {
            side,
            directions: &Direction::DIAG,
        }
    }

    pub const fn rook(side: Side) -> Self {
        Self {
            side,
            directions: &Direction::ORTHO,
        }
    }

    pub const fn queen(side: Side) -> Self {
        Self {
            side,
            directions: &QUEEN_DIRECTIONS,
        }
    }

    pub fn walk_ray(&self, board: &Board, origin: Square, delta: i8) -> Ray {
        walk_ray(board, origin, self.side, delta)
    }
}

impl MoveGenerator for SlidingPiece {
    fn calculate_moves(&self, board: &Board, from: Square) -> Generated {
        let mut generated = Generated::default();
        for &delta in self.directions {
            let ray = self.walk_ray(board, from, delta);
            generated.moves |= ray.moves;
            if let StepOutcome::Enemy(sq) = ray.end {
                generated.captures.set(sq.index());
            }
        }
        debug!(
            "{} slider on {from}: {} moves, {} captures",
            self.side,
            generated.moves.pop_count(),
            generated.captures.pop_count()
        );
        generated
    }

    /// Captures fall out of the ray walk in `calculate_moves`.
    fn calculate_captures(&self, _board: &Board, _from: Square) -> BitBoard {
        BitBoard::EMPTY
    }
}

/// True when stepping `delta` from `origin` to `target` went round a file
/// edge. Sideways and diagonal rays must keep moving the same way along the
/// files as they started; vertical rays cannot wrap.
///
/// Always compares against the ray's origin, so it holds for every square of
/// the ray, not just the first step.
#[inline(always)]
pub fn wraps_file(origin: Square, target: Square, delta: i8) -> bool {
    match Direction::file_step(delta) {
        -1 => target.file() >= origin.file(),
        1 => target.file() <= origin.file(),
        _ => false,
    }
}

/// Classifies the square at raw index `next`, reached from `origin` by
/// repeated `delta` steps.
pub fn classify_step(
    board: &Board,
    origin: Square,
    side: Side,
    delta: i8,
    next: isize,
) -> StepOutcome {
    let Ok(target) = Square::try_from(next) else {
        return StepOutcome::OffBoard;
    };
    if wraps_file(origin, target, delta) {
        return StepOutcome::OffBoard;
    }
    match board.get_piece_at(target) {
        None => StepOutcome::Open(target),
        Some(info) if info.side == side => StepOutcome::Friendly(target),
        Some(_) => StepOutcome::Enemy(target),
    }
}

/// Steps from `origin` along `delta` until the ray is blocked or leaves the
/// board.
pub fn walk_ray(board: &Board, origin: Square, side: Side, delta: i8) -> Ray {
    let mut moves = BitBoard::default();
    let mut next = origin.index() as isize + delta as isize;
    loop {
        match classify_step(board, origin, side, delta, next) {
            StepOutcome::Open(sq) => {
                moves.set(sq.index());
                next += delta as isize;
            }
            end => {
                trace!("ray {delta:+} from {origin} stopped: {end:?}");
                return Ray { moves, end };
            }
        }
    }
}
