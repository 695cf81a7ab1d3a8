use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::board::{RenderStyle, components::Side};

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), version = env!("APP_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Console log level, overrides the config file
    #[arg(short, long, global = true)]
    pub log_level: Option<tracing::Level>,

    /// Also write debug logs to a file
    #[arg(long, global = true)]
    pub log_file: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the board for a FEN, or the configured one
    Show {
        /// FEN string for the position
        #[arg(short, long)]
        fen: Option<String>,
        #[arg(short, long, value_enum)]
        render: Option<RenderArg>,
    },

    /// List moves and captures of one piece, or of every piece
    Moves {
        /// FEN string for the position
        #[arg(short, long)]
        fen: Option<String>,
        /// Only the piece on this square, e.g. e2
        #[arg(short, long)]
        square: Option<String>,
        /// Only pieces of this side
        #[arg(long, value_enum, conflicts_with = "square")]
        side: Option<SideArg>,
    },

    /// Query a position interactively
    Explore {
        /// FEN string for the starting position
        #[arg(short, long)]
        fen: Option<String>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderArg {
    Ascii,
    Unicode,
}

impl From<RenderArg> for RenderStyle {
    fn from(value: RenderArg) -> Self {
        match value {
            RenderArg::Ascii => RenderStyle::Ascii,
            RenderArg::Unicode => RenderStyle::Unicode,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideArg {
    #[value(alias = "w")]
    White,
    #[value(alias = "b")]
    Black,
}

impl From<SideArg> for Side {
    fn from(value: SideArg) -> Self {
        match value {
            SideArg::White => Side::White,
            SideArg::Black => Side::Black,
        }
    }
}

/// One line of the `explore` shell
#[derive(Parser, Debug)]
#[command(name = "explore_cmd", no_binary_name = true)]
pub struct ExploreCommand {
    #[command(subcommand)]
    pub cmd: ExploreSubcommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ExploreSubcommand {
    /// Moves and captures of the piece on a square
    #[clap(visible_alias = "m")]
    Moves { square: String },

    /// Moves and captures of every piece, optionally of one side
    #[clap(visible_alias = "a")]
    All {
        #[arg(value_enum)]
        side: Option<SideArg>,
    },

    /// Print the current board
    #[clap(visible_alias = "p")]
    Print,

    /// Load a new position
    #[clap(visible_alias = "f")]
    Fen {
        #[arg(num_args = 1.., required = true)]
        fields: Vec<String>,
    },

    /// Change the console log level
    #[clap(visible_alias = "l")]
    Log { level: tracing::Level },

    /// Quit
    #[clap(visible_alias = "q")]
    Quit,
}
