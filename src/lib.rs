pub mod board;
pub mod error;
pub mod explore;
pub mod moves;
pub mod prelude;
pub mod utils;

pub use utils::log::init;

pub mod consts {
    pub const NUM_SIDES: usize = 2;
    pub const NUM_PIECES: usize = 6;
    pub const NUM_SQUARES: usize = 64;
    pub const NUM_FILES: usize = 8;
    pub const NUM_RANKS: usize = 8;

    pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    pub const KIWIPETE: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
}
