//! Raw entry points of the linked Fathom library.
//!
//! The library must be built with the probe entry points exported. Symbols
//! are resolved at link time; see `build.rs` and the `FATHOM_LIB_DIR`
//! environment variable.

use std::os::raw::c_char;

extern "C" {
    /// Maximum piece count supported by the loaded tables. Valid after a
    /// successful `tb_init`.
    pub static TB_LARGEST: u32;

    /// Loads tables from a directory, replacing any previously loaded set.
    pub fn tb_init(path: *const c_char) -> bool;

    /// Frees the loaded tables.
    pub fn tb_free();

    /// Win/draw/loss probe for quiet positions.
    pub fn tb_probe_wdl(
        white: u64,
        black: u64,
        kings: u64,
        queens: u64,
        rooks: u64,
        bishops: u64,
        knights: u64,
        pawns: u64,
        rule50: u32,
        castling: u32,
        ep: u32,
        turn: bool,
    ) -> u32;

    /// Root probe, returning a packed result with the suggested move and
    /// distance to zeroing. `restrict` narrows the probe to one move.
    pub fn tb_probe_root(
        white: u64,
        black: u64,
        kings: u64,
        queens: u64,
        rooks: u64,
        bishops: u64,
        knights: u64,
        pawns: u64,
        rule50: u32,
        castling: u32,
        ep: u32,
        turn: bool,
        restrict: u32,
    ) -> u32;
}
