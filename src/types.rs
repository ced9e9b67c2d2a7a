use std::{fmt, ops::Neg};

/// Raw result code for a lost position.
pub const TB_LOSS: u32 = 0;
/// Raw result code for a loss saved by the 50-move rule.
pub const TB_BLESSED_LOSS: u32 = 1;
/// Raw result code for a drawn position.
pub const TB_DRAW: u32 = 2;
/// Raw result code for a win blocked by the 50-move rule.
pub const TB_CURSED_WIN: u32 = 3;
/// Raw result code for a won position.
pub const TB_WIN: u32 = 4;
/// Sentinel returned by the engine when a probe fails, passed through
/// unmodified by the forwarding layer.
pub const TB_RESULT_FAILED: u32 = 0xffff_ffff;

/// En passant encoding for "no en passant square available".
pub const EP_NONE: u32 = 0;

const TB_RESULT_WDL_MASK: u32 = 0x0000_000f;
const TB_RESULT_TO_MASK: u32 = 0x0000_03f0;
const TB_RESULT_FROM_MASK: u32 = 0x0000_fc00;
const TB_RESULT_PROMOTES_MASK: u32 = 0x0007_0000;
const TB_RESULT_EP_MASK: u32 = 0x0008_0000;
const TB_RESULT_DTZ_MASK: u32 = 0xfff0_0000;
const TB_RESULT_WDL_SHIFT: u32 = 0;
const TB_RESULT_TO_SHIFT: u32 = 4;
const TB_RESULT_FROM_SHIFT: u32 = 10;
const TB_RESULT_PROMOTES_SHIFT: u32 = 16;
const TB_RESULT_EP_SHIFT: u32 = 19;
const TB_RESULT_DTZ_SHIFT: u32 = 20;

bitflags::bitflags! {
    /// Castling rights in the engine's encoding.
    ///
    /// Note that standard Syzygy tables do not cover positions with castling
    /// rights, so probes with any flag set fail with
    /// [`TB_RESULT_FAILED`].
    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    pub struct Castling: u32 {
        #[allow(missing_docs)]
        const WHITE_KING_SIDE = 1;
        #[allow(missing_docs)]
        const WHITE_QUEEN_SIDE = 2;
        #[allow(missing_docs)]
        const BLACK_KING_SIDE = 4;
        #[allow(missing_docs)]
        const BLACK_QUEEN_SIDE = 8;
    }
}

/// 5-valued evaluation of a position in the context of the 50-move rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(i8)]
pub enum Wdl {
    /// Unconditional loss.
    Loss = -2,
    /// Loss that can be saved by the 50-move rule.
    BlessedLoss = -1,
    /// Unconditional draw.
    Draw = 0,
    /// Win that can be frustrated by the 50-move rule.
    CursedWin = 1,
    /// Unconditional win.
    Win = 2,
}

impl Wdl {
    /// Decodes a raw win/draw/loss probe code.
    ///
    /// Returns [`None`] for the failure sentinel and for codes outside the
    /// engine's documented range.
    pub fn from_code(code: u32) -> Option<Wdl> {
        Some(match code {
            TB_LOSS => Wdl::Loss,
            TB_BLESSED_LOSS => Wdl::BlessedLoss,
            TB_DRAW => Wdl::Draw,
            TB_CURSED_WIN => Wdl::CursedWin,
            TB_WIN => Wdl::Win,
            _ => return None,
        })
    }
}

impl Neg for Wdl {
    type Output = Wdl;

    fn neg(self) -> Wdl {
        match self {
            Wdl::Loss => Wdl::Win,
            Wdl::BlessedLoss => Wdl::CursedWin,
            Wdl::Draw => Wdl::Draw,
            Wdl::CursedWin => Wdl::BlessedLoss,
            Wdl::Win => Wdl::Loss,
        }
    }
}

impl From<Wdl> for i8 {
    #[inline]
    fn from(wdl: Wdl) -> i8 {
        wdl as i8
    }
}

/// Promotion piece in the engine's root-result encoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u32)]
pub enum Promotion {
    #[allow(missing_docs)]
    Queen = 1,
    #[allow(missing_docs)]
    Rook = 2,
    #[allow(missing_docs)]
    Bishop = 3,
    #[allow(missing_docs)]
    Knight = 4,
}

impl Promotion {
    /// Lowercase algebraic character for the promotion piece.
    pub fn char(self) -> char {
        match self {
            Promotion::Queen => 'q',
            Promotion::Rook => 'r',
            Promotion::Bishop => 'b',
            Promotion::Knight => 'n',
        }
    }
}

/// Decoded view of a raw root-probe result code.
///
/// The root probe packs the win/draw/loss value, the suggested move and the
/// distance to zeroing into a single `u32`. Construction never fails; check
/// [`RootResult::is_failed()`] before reading the other fields.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RootResult(u32);

impl RootResult {
    /// Wraps a raw root-probe code.
    #[inline]
    pub fn new(code: u32) -> RootResult {
        RootResult(code)
    }

    /// The raw code, unchanged.
    #[inline]
    pub fn code(self) -> u32 {
        self.0
    }

    /// Whether the engine reported a failed probe.
    #[inline]
    pub fn is_failed(self) -> bool {
        self.0 == TB_RESULT_FAILED
    }

    /// Win/draw/loss value from the side to move's point of view.
    pub fn wdl(self) -> Option<Wdl> {
        if self.is_failed() {
            return None;
        }
        Wdl::from_code((self.0 & TB_RESULT_WDL_MASK) >> TB_RESULT_WDL_SHIFT)
    }

    /// Distance to the next zeroing move, in plies.
    #[inline]
    pub fn dtz(self) -> u32 {
        (self.0 & TB_RESULT_DTZ_MASK) >> TB_RESULT_DTZ_SHIFT
    }

    /// Origin square of the suggested move, `0..=63` counted from a1.
    #[inline]
    pub fn from_square(self) -> u32 {
        (self.0 & TB_RESULT_FROM_MASK) >> TB_RESULT_FROM_SHIFT
    }

    /// Destination square of the suggested move, `0..=63` counted from a1.
    #[inline]
    pub fn to_square(self) -> u32 {
        (self.0 & TB_RESULT_TO_MASK) >> TB_RESULT_TO_SHIFT
    }

    /// Promotion piece of the suggested move, if any.
    pub fn promotion(self) -> Option<Promotion> {
        Some(
            match (self.0 & TB_RESULT_PROMOTES_MASK) >> TB_RESULT_PROMOTES_SHIFT {
                1 => Promotion::Queen,
                2 => Promotion::Rook,
                3 => Promotion::Bishop,
                4 => Promotion::Knight,
                _ => return None,
            },
        )
    }

    /// Whether the suggested move is an en passant capture.
    #[inline]
    pub fn is_en_passant(self) -> bool {
        (self.0 & TB_RESULT_EP_MASK) >> TB_RESULT_EP_SHIFT != 0
    }
}

impl fmt::Display for RootResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_failed() {
            return write!(f, "failed");
        }
        match self.wdl() {
            Some(wdl) => write!(f, "wdl {wdl:?}")?,
            None => write!(f, "wdl invalid")?,
        }
        write!(
            f,
            ", dtz {}, move {} -> {}",
            self.dtz(),
            self.from_square(),
            self.to_square()
        )?;
        if let Some(promotion) = self.promotion() {
            write!(f, "={}", promotion.char())?;
        }
        Ok(())
    }
}
