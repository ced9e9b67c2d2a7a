use std::{error::Error, path::PathBuf};

use clap::Parser;
use shakmaty::{fen::Fen, CastlingMode, CastlingSide, Chess, Color, EnPassantMode, Position};

use fathom_probe::{
    probe_root_forward, probe_wdl_forward, Castling, Fathom, RootResult, Wdl, EP_NONE,
};

#[derive(Debug, Parser)]
struct Opt {
    /// Tablebase directory passed to the engine
    #[arg(long)]
    path: PathBuf,
    /// The position to probe
    fen: String,
}

fn castling_bits(pos: &Chess) -> u32 {
    let castles = pos.castles();
    let mut bits = Castling::empty();
    if castles.has(Color::White, CastlingSide::KingSide) {
        bits |= Castling::WHITE_KING_SIDE;
    }
    if castles.has(Color::White, CastlingSide::QueenSide) {
        bits |= Castling::WHITE_QUEEN_SIDE;
    }
    if castles.has(Color::Black, CastlingSide::KingSide) {
        bits |= Castling::BLACK_KING_SIDE;
    }
    if castles.has(Color::Black, CastlingSide::QueenSide) {
        bits |= Castling::BLACK_QUEEN_SIDE;
    }
    bits.bits()
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::parse();

    let fathom = Fathom::init(&opt.path)?;

    let pos: Chess = opt
        .fen
        .parse::<Fen>()?
        .into_position(CastlingMode::Standard)?;
    let board = pos.board();

    let white = u64::from(board.white());
    let black = u64::from(board.black());
    let kings = u64::from(board.kings());
    let queens = u64::from(board.queens());
    let rooks = u64::from(board.rooks());
    let bishops = u64::from(board.bishops());
    let knights = u64::from(board.knights());
    let pawns = u64::from(board.pawns());
    let rule50 = pos.halfmoves();
    let castling = castling_bits(&pos);
    let ep = pos
        .ep_square(EnPassantMode::Legal)
        .map_or(EP_NONE, u32::from);
    let turn = pos.turn() == Color::White;

    println!("Position: {}", opt.fen);
    println!("Largest table set: {} pieces", fathom.max_pieces());

    let wdl_code = probe_wdl_forward(
        &fathom, white, black, kings, queens, rooks, bishops, knights, pawns, rule50, castling,
        ep, turn,
    );
    match Wdl::from_code(wdl_code) {
        Some(wdl) => println!("WDL: {wdl:?}"),
        None => println!("WDL probe failed (code {wdl_code:#x})"),
    }

    let root = RootResult::new(probe_root_forward(
        &fathom, white, black, kings, queens, rooks, bishops, knights, pawns, rule50, castling,
        ep, turn,
    ));
    println!("Root: {root}");

    Ok(())
}
