use std::io::{BufReader, stdin, stdout};

use chessrays::explore::Explorer;
use chessrays::prelude::*;
use chessrays::utils::format_piece_moves;
use clap::Parser;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;

    set_log_dir(config.log.dir.clone());
    chessrays::init();
    if let Some(level) = config.log.resolve_level(cli.log_level)? {
        set_log_level(level)?;
    }
    if cli.log_file || config.log.file {
        toggle_file_logging(true)?;
    }

    let span = span!(Level::DEBUG, "main");
    let _guard = span.enter();

    match cli.command {
        Some(Commands::Show { fen, render }) => {
            let board = load_board(fen, &config)?;
            let style = render.map(RenderStyle::from).unwrap_or(config.render);
            print!("{}", board.render(style));
            println!("FEN: {}", board.to_fen());
        }
        Some(Commands::Moves { fen, square, side }) => {
            let board = load_board(fen, &config)?;
            trace!("Listing moves for square: {square:?}, side: {side:?}");
            match square {
                Some(square) => {
                    let square = Square::from_str(&square)?;
                    let mut piece = TrackedPiece::from_board(&board, square)?;
                    piece.refresh(&board)?;
                    let pm = PieceMoves {
                        square,
                        info: piece.info,
                        generated: Generated {
                            moves: piece.possible_moves,
                            captures: piece.possible_captures,
                        },
                    };
                    println!("{}", format_piece_moves(&pm));
                }
                None => {
                    let side = side.map(Side::from);
                    for pm in generate_all(&board, side) {
                        println!("{}", format_piece_moves(&pm));
                    }
                }
            }
        }
        Some(Commands::Explore { fen }) => {
            let board = load_board(fen, &config)?;
            info!("Exploring {}", board.to_fen());
            let mut explorer = Explorer::new(board, config.render);
            explorer.run_loop(BufReader::new(stdin()), &mut stdout())?;
        }
        None => {
            let board = load_board(None, &config)?;
            print!("{}", board.render(config.render));
            println!("Run with --help to see the available commands");
        }
    }
    Ok(())
}

fn load_board(fen: Option<String>, config: &Config) -> miette::Result<Board> {
    let fen = fen.unwrap_or_else(|| config.fen.clone());
    Board::from_fen(&fen).with_context(|| format!("Loading position '{fen}'"))
}
