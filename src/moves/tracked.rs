use crate::error::MoveGenError;
use crate::prelude::*;

use super::MoveGenerator;

/// A piece together with the squares it was last found able to reach.
///
/// `position` is only ever written by the caller, from the board. Before
/// generating, the board slot is checked against the piece and a mismatch is
/// reported as [`MoveGenError::StalePosition`] instead of being trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedPiece {
    pub info: PieceInfo,
    position: Option<Square>,
    pub possible_moves: BitBoard,
    pub possible_captures: BitBoard,
}

impl TrackedPiece {
    pub fn new(info: PieceInfo, position: Square) -> Self {
        Self {
            info,
            position: Some(position),
            possible_moves: BitBoard::default(),
            possible_captures: BitBoard::default(),
        }
    }

    /// Reads the occupant of `square`.
    pub fn from_board(board: &Board, square: Square) -> Result<Self, MoveGenError> {
        board
            .get_piece_at(square)
            .map(|info| Self::new(info, square))
            .ok_or(MoveGenError::EmptySquare { square })
    }

    pub fn position(&self) -> Option<Square> {
        self.position
    }

    /// The piece has left the board; generation is refused from now on.
    pub fn take_off_board(&mut self) {
        self.position = None;
        self.clear_moves();
        self.clear_captures();
    }

    /// Points the piece at `square` after checking the board agrees.
    pub fn sync_position(&mut self, board: &Board, square: Square) -> Result<(), MoveGenError> {
        check_slot(board, square, self.info)?;
        self.position = Some(square);
        Ok(())
    }

    pub fn clear_moves(&mut self) {
        self.possible_moves.clear();
    }

    pub fn clear_captures(&mut self) {
        self.possible_captures.clear();
    }

    fn checked_position(&self, board: &Board) -> Result<Square, MoveGenError> {
        let square = self.position.ok_or(MoveGenError::NoPosition)?;
        check_slot(board, square, self.info)?;
        Ok(square)
    }

    /// Rebuilds `possible_moves`. For sliders the captures met along the rays
    /// are added to `possible_captures`; that is the only way a slider gets
    /// captures.
    pub fn calculate_moves(&mut self, board: &Board) -> Result<(), MoveGenError> {
        let from = self.checked_position(board)?;
        let generated = self.info.calculate_moves(board, from);
        self.possible_moves = generated.moves;
        self.possible_captures |= generated.captures;
        Ok(())
    }

    /// Rebuilds `possible_captures` for stepping pieces. Does nothing for
    /// sliders.
    pub fn calculate_captures(&mut self, board: &Board) -> Result<(), MoveGenError> {
        let from = self.checked_position(board)?;
        if self.info.piece.is_slider() {
            return Ok(());
        }
        self.possible_captures = self.info.calculate_captures(board, from);
        Ok(())
    }

    /// Clears both sets and runs both passes.
    pub fn refresh(&mut self, board: &Board) -> Result<(), MoveGenError> {
        self.clear_moves();
        self.clear_captures();
        self.calculate_moves(board)?;
        self.calculate_captures(board)
    }
}

fn check_slot(board: &Board, square: Square, expected: PieceInfo) -> Result<(), MoveGenError> {
    let found = board.get_piece_at(square);
    if found != Some(expected) {
        warn!("stale position for {expected} on {square}, found {found:?}");
        return Err(MoveGenError::StalePosition {
            square,
            expected,
            found,
        });
    }
    Ok(())
}
