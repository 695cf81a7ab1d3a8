pub mod cli;
pub mod config;
pub mod log;

use crate::prelude::{BitBoard, PieceMoves};

/// `e3 e4` style listing, `-` when empty.
pub fn format_squares(bb: BitBoard) -> String {
    if bb.is_empty() {
        return "-".to_string();
    }
    bb.squares()
        .map(|sq| sq.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per piece: square, piece, moves, captures.
pub fn format_piece_moves(pm: &PieceMoves) -> String {
    format!(
        "{} {:<12} moves: {:<30} captures: {}",
        pm.square,
        pm.info.to_string(),
        format_squares(pm.generated.moves),
        format_squares(pm.generated.captures)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_format_squares() {
        assert_eq!(format_squares(BitBoard::EMPTY), "-");
        assert_eq!(format_squares(BitBoard((1 << 20) | (1 << 28))), "e3 e4");
    }

    #[test]
    fn test_format_piece_moves() {
        let board = Board::new();
        let all = generate_all(&board, Some(Side::White));
        let e2 = all
            .iter()
            .find(|pm| pm.square == Square::from_str("e2").unwrap())
            .unwrap();
        let line = format_piece_moves(e2);
        assert!(line.starts_with("e2 White Pawn"));
        assert!(line.contains("moves: e3 e4"));
        assert!(line.ends_with("captures: -"));
    }
}
