//! Fixed-arity forwarding adapter for the [Fathom] endgame tablebase prober.
//!
//! Fathom answers two questions about a low-piece-count chess position: its
//! win/draw/loss value, and the value plus a suggested move when probing at
//! the root of a search. Both entry points take the position as eight
//! bitboards along with the halfmove clock, castling rights, en passant
//! square and side to move. This crate forwards those calls unchanged, with
//! one simplification: the root probe's extra move-restriction parameter is
//! fixed to the unrestricted value, so both operations have the same twelve
//! arguments.
//!
//! The engine sits behind the [`ProbeEngine`] trait. The real Fathom binding
//! is available with the `fathom` feature as [`Fathom`]; any other
//! implementation (including a test double) works the same way.
//!
//! Result codes come back raw. [`Wdl::from_code()`] and [`RootResult`]
//! decode them when a typed view is wanted.
//!
//! ```
//! use fathom_probe::{probe_wdl_forward, ProbeEngine, Wdl, TB_DRAW};
//!
//! struct AlwaysDraw;
//!
//! impl ProbeEngine for AlwaysDraw {
//!     fn probe_wdl(
//!         &self,
//!         _white: u64, _black: u64, _kings: u64, _queens: u64, _rooks: u64,
//!         _bishops: u64, _knights: u64, _pawns: u64,
//!         _rule50: u32, _castling: u32, _ep: u32, _turn: bool,
//!     ) -> u32 {
//!         TB_DRAW
//!     }
//!
//!     fn probe_root(
//!         &self,
//!         _white: u64, _black: u64, _kings: u64, _queens: u64, _rooks: u64,
//!         _bishops: u64, _knights: u64, _pawns: u64,
//!         _rule50: u32, _castling: u32, _ep: u32, _turn: bool, _restrict: u32,
//!     ) -> u32 {
//!         TB_DRAW
//!     }
//! }
//!
//! // Kk: a bare-kings draw, white to move.
//! let code = probe_wdl_forward(
//!     &AlwaysDraw,
//!     0x10, 0x1000_0000_0000_0000, 0x1000_0000_0000_0010,
//!     0, 0, 0, 0, 0,
//!     0, 0, 0, true,
//! );
//! assert_eq!(Wdl::from_code(code), Some(Wdl::Draw));
//! ```
//!
//! [Fathom]: https://github.com/jdart1/Fathom

#![doc(html_root_url = "https://docs.rs/fathom-probe/0.1.0")]
#![warn(missing_debug_implementations, missing_docs)]

mod errors;
mod probe;
mod types;

#[cfg(feature = "fathom")]
mod fathom;
#[cfg(feature = "fathom")]
pub mod ffi;

pub use crate::{
    errors::InitError,
    probe::{probe_root_forward, probe_wdl_forward, ProbeEngine, NO_MOVE_RESTRICTION},
    types::{
        Castling, Promotion, RootResult, Wdl, EP_NONE, TB_BLESSED_LOSS, TB_CURSED_WIN, TB_DRAW,
        TB_LOSS, TB_RESULT_FAILED, TB_WIN,
    },
};

#[cfg(feature = "fathom")]
pub use crate::fathom::Fathom;
