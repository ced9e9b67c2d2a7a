//! The forwarding layer and the trait it forwards to.

/// Move restriction value asking the engine for an unrestricted root probe.
pub const NO_MOVE_RESTRICTION: u32 = 0;

/// Entry points of an external tablebase probing engine.
///
/// The eight bitboards describe piece occupancy by side and by type. The
/// caller is responsible for keeping the piece-type masks disjoint and the
/// side masks covering all occupied squares; implementations are not expected
/// to detect violations.
///
/// Thread safety of concurrent probes is entirely the implementation's
/// business. The forwarding layer adds no locking of its own.
pub trait ProbeEngine {
    /// Win/draw/loss probe. Returns the engine's raw result code.
    #[allow(clippy::too_many_arguments)]
    fn probe_wdl(
        &self,
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

    /// Root probe. `restrict` limits probing to a particular move; pass
    /// [`NO_MOVE_RESTRICTION`] for the full root probe. Returns the engine's
    /// raw result code.
    #[allow(clippy::too_many_arguments)]
    fn probe_root(
        &self,
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

impl<E: ProbeEngine + ?Sized> ProbeEngine for &E {
    fn probe_wdl(
        &self,
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
    ) -> u32 {
        (**self).probe_wdl(
            white, black, kings, queens, rooks, bishops, knights, pawns, rule50, castling, ep, turn,
        )
    }

    fn probe_root(
        &self,
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
    ) -> u32 {
        (**self).probe_root(
            white, black, kings, queens, rooks, bishops, knights, pawns, rule50, castling, ep,
            turn, restrict,
        )
    }
}

/// Forwards a win/draw/loss probe to `engine` with the identical argument
/// list.
///
/// A pure pass-through: no validation, no interpretation of the result, no
/// retained state. The raw code comes back verbatim, including the engine's
/// failure sentinel.
#[allow(clippy::too_many_arguments)]
pub fn probe_wdl_forward<E: ProbeEngine>(
    engine: &E,
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
) -> u32 {
    engine.probe_wdl(
        white, black, kings, queens, rooks, bishops, knights, pawns, rule50, castling, ep, turn,
    )
}

/// Forwards a root probe to `engine`, always requesting the unrestricted
/// full-root behavior.
///
/// The engine's extra move-restriction parameter is fixed to
/// [`NO_MOVE_RESTRICTION`]; everything else is the same pass-through contract
/// as [`probe_wdl_forward()`].
#[allow(clippy::too_many_arguments)]
pub fn probe_root_forward<E: ProbeEngine>(
    engine: &E,
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
) -> u32 {
    engine.probe_root(
        white,
        black,
        kings,
        queens,
        rooks,
        bishops,
        knights,
        pawns,
        rule50,
        castling,
        ep,
        turn,
        NO_MOVE_RESTRICTION,
    )
}
