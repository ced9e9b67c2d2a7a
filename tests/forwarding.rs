use fathom_probe::{
    probe_root_forward, probe_wdl_forward, ProbeEngine, RootResult, Wdl, EP_NONE,
    NO_MOVE_RESTRICTION, TB_WIN,
};

/// Deterministic stand-in engine: folds all arguments into the result code,
/// so any dropped, reordered or truncated argument changes the output.
struct FoldingEngine;

fn fold(args: [u64; 12], restrict: u32) -> u32 {
    let mut acc = u64::from(restrict);
    for (i, arg) in args.into_iter().enumerate() {
        acc = acc
            .rotate_left(7)
            .wrapping_add(arg.wrapping_mul(i as u64 + 1));
    }
    (acc ^ (acc >> 32)) as u32
}

impl ProbeEngine for FoldingEngine {
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
        fold(
            [
                white,
                black,
                kings,
                queens,
                rooks,
                bishops,
                knights,
                pawns,
                u64::from(rule50),
                u64::from(castling),
                u64::from(ep),
                u64::from(turn),
            ],
            0,
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
        fold(
            [
                white,
                black,
                kings,
                queens,
                rooks,
                bishops,
                knights,
                pawns,
                u64::from(rule50),
                u64::from(castling),
                u64::from(ep),
                u64::from(turn),
            ],
            restrict,
        )
    }
}

// Kg1 and Pe2 vs Kg8, white to move. A textbook won king-and-pawn endgame.
const WHITE: u64 = 0x0000_0000_0000_1040;
const BLACK: u64 = 0x4000_0000_0000_0000;
const KINGS: u64 = 0x4000_0000_0000_0040;
const PAWNS: u64 = 0x0000_0000_0000_1000;

#[test]
fn forward_matches_direct_wdl_call() {
    let engine = FoldingEngine;

    let direct = engine.probe_wdl(
        WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 7, 0, EP_NONE, true,
    );
    let forwarded = probe_wdl_forward(
        &engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 7, 0, EP_NONE, true,
    );

    assert_eq!(forwarded, direct);
}

#[test]
fn forward_matches_direct_root_call_with_unrestricted_probe() {
    let engine = FoldingEngine;

    let direct = engine.probe_root(
        WHITE,
        BLACK,
        KINGS,
        0,
        0,
        0,
        0,
        PAWNS,
        0,
        0,
        EP_NONE,
        true,
        NO_MOVE_RESTRICTION,
    );
    let forwarded = probe_root_forward(
        &engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 0, 0, EP_NONE, true,
    );

    assert_eq!(forwarded, direct);
}

#[test]
fn every_argument_reaches_the_engine() {
    let engine = FoldingEngine;

    let baseline = probe_wdl_forward(
        &engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 7, 0, EP_NONE, true,
    );

    // Perturb each argument in turn; the folded code must move every time.
    let perturbed = [
        probe_wdl_forward(&engine, !WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 7, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, !BLACK, KINGS, 0, 0, 0, 0, PAWNS, 7, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, !KINGS, 0, 0, 0, 0, PAWNS, 7, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 1, 0, 0, 0, PAWNS, 7, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 0, 1, 0, 0, PAWNS, 7, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 0, 0, 1, 0, PAWNS, 7, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 0, 0, 0, 1, PAWNS, 7, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, !PAWNS, 7, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 8, 0, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 7, 1, EP_NONE, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 7, 0, 20, true),
        probe_wdl_forward(&engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 7, 0, EP_NONE, false),
    ];

    for code in perturbed {
        assert_ne!(code, baseline);
    }
}

#[test]
fn repeated_probes_are_stable() {
    let engine = FoldingEngine;

    for _ in 0..3 {
        assert_eq!(
            probe_root_forward(
                &engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 0, 0, EP_NONE, true,
            ),
            probe_root_forward(
                &engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 0, 0, EP_NONE, true,
            ),
        );
    }
}

#[test]
fn decoded_root_result_round_trips_raw_code() {
    struct CannedEngine(u32);

    impl ProbeEngine for CannedEngine {
        fn probe_wdl(
            &self,
            _white: u64,
            _black: u64,
            _kings: u64,
            _queens: u64,
            _rooks: u64,
            _bishops: u64,
            _knights: u64,
            _pawns: u64,
            _rule50: u32,
            _castling: u32,
            _ep: u32,
            _turn: bool,
        ) -> u32 {
            self.0
        }

        fn probe_root(
            &self,
            _white: u64,
            _black: u64,
            _kings: u64,
            _queens: u64,
            _rooks: u64,
            _bishops: u64,
            _knights: u64,
            _pawns: u64,
            _rule50: u32,
            _castling: u32,
            _ep: u32,
            _turn: bool,
            _restrict: u32,
        ) -> u32 {
            self.0
        }
    }

    // Win with e2-e4 (squares 12 -> 28), DTZ 17.
    let raw = TB_WIN | (28 << 4) | (12 << 10) | (17 << 20);
    let engine = CannedEngine(raw);

    let code = probe_root_forward(
        &engine, WHITE, BLACK, KINGS, 0, 0, 0, 0, PAWNS, 0, 0, EP_NONE, true,
    );
    assert_eq!(code, raw);

    let result = RootResult::new(code);
    assert_eq!(result.wdl(), Some(Wdl::Win));
    assert_eq!(result.from_square(), 12);
    assert_eq!(result.to_square(), 28);
    assert_eq!(result.promotion(), None);
    assert_eq!(result.dtz(), 17);
    assert_eq!(result.code(), raw);
}
