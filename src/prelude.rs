pub use crate::board::fen;
pub use crate::board::{
    self, Board, RenderStyle,
    components::{BitBoard, CastlingRights, Piece, PieceInfo, Side, Square},
};
pub use crate::consts::*;
pub use crate::moves::{
    self, Direction, Generated, Generator, MoveGenerator,
    batch::{PieceMoves, generate_all},
    tracked::TrackedPiece,
};
pub use crate::utils::{self, cli::*, config::*, log::*};
pub use miette::{self, Context, IntoDiagnostic, Result};
pub use std::fmt::Display;
pub use std::str::FromStr;
pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
