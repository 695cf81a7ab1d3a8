use miette::Diagnostic;
use thiserror::Error;

use crate::board::components::{PieceInfo, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum MoveGenError {
    /// Never surfaced by the generators, they stop the ray or drop the offset.
    #[error("square index {index} is off the board")]
    #[diagnostic(code(chessrays::out_of_bounds))]
    OutOfBoundsSquare { index: isize },

    #[error("expected {expected} on {square}, board holds {}", occupant(.found))]
    #[diagnostic(
        code(chessrays::stale_position),
        help("re-read the piece from the board before generating moves")
    )]
    StalePosition {
        square: Square,
        expected: PieceInfo,
        found: Option<PieceInfo>,
    },

    #[error("piece has no position on the board")]
    #[diagnostic(code(chessrays::no_position))]
    NoPosition,

    #[error("{square} already holds {occupant}")]
    #[diagnostic(code(chessrays::occupied))]
    Occupied { square: Square, occupant: PieceInfo },

    #[error("no piece on {square}")]
    #[diagnostic(code(chessrays::empty_square))]
    EmptySquare { square: Square },
}

fn occupant(found: &Option<PieceInfo>) -> String {
    found.map_or_else(|| "nothing".to_string(), |p| p.to_string())
}
