//! Line based shell for poking at a position.

use std::io::{BufRead, Write};

use clap::Parser;

use crate::moves::batch::generate_all;
use crate::prelude::*;
use crate::utils::{format_piece_moves, format_squares};

/// What the shell should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Explorer {
    pub board: Board,
    pub render: RenderStyle,
}

impl Explorer {
    pub fn new(board: Board, render: RenderStyle) -> Self {
        Self { board, render }
    }

    /// Runs one line, writing its output to `out`. Bad input is reported to
    /// `out` and the shell carries on.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> miette::Result<Flow> {
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                writeln!(out, "Could not split input: {e}").into_diagnostic()?;
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }
        let cmd = match ExploreCommand::try_parse_from(words) {
            Ok(cmd) => cmd.cmd,
            Err(e) => {
                write!(out, "{e}").into_diagnostic()?;
                return Ok(Flow::Continue);
            }
        };
        trace!("explore command: {cmd:?}");

        match self.run(cmd, out) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                writeln!(out, "error: {e}").into_diagnostic()?;
                for cause in e.chain().skip(1) {
                    writeln!(out, "  caused by: {cause}").into_diagnostic()?;
                }
                Ok(Flow::Continue)
            }
        }
    }

    fn run(&mut self, cmd: ExploreSubcommand, out: &mut impl Write) -> miette::Result<Flow> {
        match cmd {
            ExploreSubcommand::Moves { square } => {
                let square = Square::from_str(&square)?;
                let mut piece = TrackedPiece::from_board(&self.board, square)?;
                piece.refresh(&self.board)?;
                writeln!(
                    out,
                    "{square} {}\nmoves:    {}\ncaptures: {}",
                    piece.info,
                    format_squares(piece.possible_moves),
                    format_squares(piece.possible_captures)
                )
                .into_diagnostic()?;
            }
            ExploreSubcommand::All { side } => {
                let side = side.map(Side::from);
                for pm in generate_all(&self.board, side) {
                    writeln!(out, "{}", format_piece_moves(&pm)).into_diagnostic()?;
                }
            }
            ExploreSubcommand::Print => {
                write!(out, "{}", self.board.render(self.render)).into_diagnostic()?;
                writeln!(out, "FEN: {}", self.board.to_fen()).into_diagnostic()?;
            }
            ExploreSubcommand::Fen { fields } => {
                self.board = Board::from_fen(&fields.join(" "))?;
                info!("loaded {}", self.board.to_fen());
                write!(out, "{}", self.board.render(self.render)).into_diagnostic()?;
            }
            ExploreSubcommand::Log { level } => {
                set_log_level(level)?;
                writeln!(out, "log level set to {level}").into_diagnostic()?;
            }
            ExploreSubcommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads lines from `input` until `quit` or end of input.
    pub fn run_loop(&mut self, input: impl BufRead, out: &mut impl Write) -> miette::Result<()> {
        write!(out, "{}", self.board.render(self.render)).into_diagnostic()?;
        for line in input.lines() {
            let line = line.into_diagnostic().context("Reading input")?;
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
            out.flush().into_diagnostic()?;
        }
        info!("leaving explore");
        Ok(())
    }
}
