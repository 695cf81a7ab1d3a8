use crate::prelude::*;

impl Board {
    pub fn from_fen(fen: &str) -> miette::Result<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        let ep = self
            .enpassant_square
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {} {} {}",
            self.to_fen_pieces(),
            self.stm.tag(),
            self.castling_rights,
            ep,
            self.halfmove_clock,
            self.fullmove_counter
        )
    }

    pub fn to_fen_pieces(&self) -> String {
        let mut fen = String::new();

        for rank in (0..NUM_RANKS).rev() {
            let mut empty_count = 0;
            for file in 0..NUM_FILES {
                match self.mailbox()[rank * 8 + file] {
                    Some(info) => {
                        if empty_count > 0 {
                            fen.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        fen.push(info.piece.fen_char(info.side));
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen
    }
}

/// Parses all six FEN fields into a [`Board`].
///
/// Pawns standing off their side's starting rank are marked as moved, so the
/// double step is only offered from the home rank.
#[instrument(level = "debug")]
pub fn parse_fen(fen: &str) -> miette::Result<Board> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    miette::ensure!(
        parts.len() == 6,
        "FEN needs 6 space separated fields, found {}",
        parts.len()
    );
    let mut board = Board::default();

    let piece_placement = parts[0];
    place_pieces(&mut board, piece_placement)
        .with_context(|| format!("Placing pieces with given fen string {piece_placement}"))?;
    let stm = parts[1];
    board.stm = parse_stm(stm).with_context(|| format!("parsed stm input: {stm}"))?;
    let castle = parts[2];
    board.castling_rights =
        parse_castle(castle).with_context(|| format!("parsed input castle: {castle}"))?;
    let enpassant = parts[3];
    board.enpassant_square = parse_enpassant(enpassant)
        .with_context(|| format!("parsed input enpassant: {enpassant}"))?;
    let half_move = parts[4];
    board.halfmove_clock = half_move
        .parse::<u16>()
        .into_diagnostic()
        .with_context(|| format!("attempt to parse {half_move} to u16"))?;
    let full_move = parts[5];
    board.fullmove_counter = full_move
        .parse::<u16>()
        .into_diagnostic()
        .with_context(|| format!("attempt to parse {full_move} to u16"))?;

    debug!("parsed {} pieces", board.pieces().count());
    Ok(board)
}

fn place_pieces(board: &mut Board, placement: &str) -> miette::Result<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    miette::ensure!(
        ranks.len() == NUM_RANKS,
        "Expected {NUM_RANKS} ranks, found {}",
        ranks.len()
    );

    // FEN lists rank 8 first
    for (row, rank_str) in ranks.iter().enumerate() {
        let rank = NUM_RANKS - 1 - row;
        let mut file = 0;
        let mut after_digit = false;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                miette::ensure!(
                    (1..=8).contains(&skip),
                    "Empty run '{c}' on rank {} must be 1-8",
                    rank + 1
                );
                miette::ensure!(
                    !after_digit,
                    "Rank {} splits an empty run into adjacent digits",
                    rank + 1
                );
                after_digit = true;
                file += skip as usize;
                continue;
            }
            after_digit = false;
            let (piece, side) = Piece::from_fen_char(c)
                .with_context(|| format!("Unknown piece character '{c}'"))?;
            let square = Square::from_coords(file, rank)
                .with_context(|| format!("Rank {} has more than 8 files", rank + 1))?;
            let mut info = PieceInfo::new(piece, side);
            if piece == Piece::Pawn && rank != side.pawn_rank() {
                info = info.moved();
            }
            board.set(square, info)?;
            file += 1;
        }
        miette::ensure!(
            file == NUM_FILES,
            "Rank {} describes {file} files, expected 8",
            rank + 1
        );
    }
    Ok(())
}

fn parse_stm(stm: &str) -> miette::Result<Side> {
    match stm {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => miette::bail!("Invalid side to move, expected 'w' or 'b'"),
    }
}

fn parse_castle(castle: &str) -> miette::Result<CastlingRights> {
    if castle == "-" {
        return Ok(CastlingRights::empty());
    }
    let mut res = CastlingRights::NO_CASTLING;
    for c in castle.chars() {
        res |= match c {
            'K' => CastlingRights::WHITE_00,
            'Q' => CastlingRights::WHITE_000,
            'k' => CastlingRights::BLACK_00,
            'q' => CastlingRights::BLACK_000,
            _ => miette::bail!("Unexpected character '{c}' while parsing CastlingRights"),
        };
    }
    Ok(CastlingRights(res))
}

fn parse_enpassant(enpassant: &str) -> miette::Result<Option<Square>> {
    if enpassant == "-" {
        return Ok(None);
    }
    let square = Square::from_str(enpassant)?;
    miette::ensure!(
        square.rank() == 2 || square.rank() == 5,
        "En passant target {square} must be on rank 3 or 6"
    );
    Ok(Some(square))
}
