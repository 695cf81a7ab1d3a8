//! Generation for every piece on the board at once.
//!
//! The board is only borrowed immutably, so each piece's generation is
//! independent of the others. With the `parallel` feature the pieces are
//! spread over rayon's pool.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::prelude::*;

use super::{Generated, MoveGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMoves {
    pub square: Square,
    pub info: PieceInfo,
    pub generated: Generated,
}

fn collect_pieces(board: &Board, side: Option<Side>) -> Vec<(Square, PieceInfo)> {
    board
        .pieces()
        .filter(|(_, info)| side.is_none_or(|s| s == info.side))
        .collect()
}

fn generate_one((square, info): (Square, PieceInfo), board: &Board) -> PieceMoves {
    PieceMoves {
        square,
        info,
        generated: info.generate(board, square),
    }
}

/// Moves and captures of every piece of `side` (both sides for `None`),
/// ordered by square.
#[instrument(level = "debug", skip(board))]
pub fn generate_all(board: &Board, side: Option<Side>) -> Vec<PieceMoves> {
    #[cfg(feature = "parallel")]
    {
        collect_pieces(board, side)
            .into_par_iter()
            .map(|piece| generate_one(piece, board))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        generate_all_sequential(board, side)
    }
}

/// Same as [`generate_all`] on the calling thread only.
pub fn generate_all_sequential(board: &Board, side: Option<Side>) -> Vec<PieceMoves> {
    collect_pieces(board, side)
        .into_iter()
        .map(|piece| generate_one(piece, board))
        .collect()
}

/// Union of everything `side` can reach.
pub fn side_totals(board: &Board, side: Side) -> Generated {
    generate_all(board, Some(side))
        .into_iter()
        .fold(Generated::default(), |acc, pm| acc.merge(pm.generated))
}
