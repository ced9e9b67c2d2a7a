//! Handle to the linked Fathom engine.

use std::{
    ffi::CString,
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
};

use tracing::{info, trace};

use crate::{errors::InitError, ffi, probe::ProbeEngine};

// Fathom keeps its table set in global state, so at most one handle may be
// live in the process.
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Handle to the process-wide Fathom tablebase state.
///
/// Dropping the handle frees the loaded tables and allows a new
/// [`Fathom::init()`].
///
/// Fathom's probe entry points are read-only after initialization, but the
/// engine makes no reentrancy promises. Callers that probe from multiple
/// threads must serialize access themselves.
#[derive(Debug)]
pub struct Fathom {
    _priv: (),
}

impl Fathom {
    /// Initializes the engine with a tablebase directory.
    ///
    /// # Errors
    ///
    /// Errors if another handle is live, if the path cannot be passed to the
    /// engine, or if the engine rejects it (e.g. the directory does not
    /// exist).
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Fathom, InitError> {
        let path = path.as_ref();

        if INITIALIZED.swap(true, Ordering::SeqCst) {
            return Err(InitError::AlreadyInitialized);
        }

        let c_path = match path.to_str().and_then(|s| CString::new(s).ok()) {
            Some(c_path) => c_path,
            None => {
                INITIALIZED.store(false, Ordering::SeqCst);
                return Err(InitError::InvalidPath {
                    path: path.to_owned(),
                });
            }
        };

        if !unsafe { ffi::tb_init(c_path.as_ptr()) } {
            INITIALIZED.store(false, Ordering::SeqCst);
            return Err(InitError::Rejected {
                path: path.to_owned(),
            });
        }

        let handle = Fathom { _priv: () };
        info!(
            path = %path.display(),
            max_pieces = handle.max_pieces(),
            "tablebase engine initialized"
        );
        Ok(handle)
    }

    /// Maximum piece count supported by the loaded tables.
    pub fn max_pieces(&self) -> u32 {
        unsafe { ffi::TB_LARGEST }
    }
}

impl Drop for Fathom {
    fn drop(&mut self) {
        unsafe { ffi::tb_free() };
        INITIALIZED.store(false, Ordering::SeqCst);
    }
}

impl ProbeEngine for Fathom {
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
        let code = unsafe {
            ffi::tb_probe_wdl(
                white, black, kings, queens, rooks, bishops, knights, pawns, rule50, castling,
                ep, turn,
            )
        };
        trace!(code, "wdl probe");
        code
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
        let code = unsafe {
            ffi::tb_probe_root(
                white, black, kings, queens, rooks, bishops, knights, pawns, rule50, castling,
                ep, turn, restrict,
            )
        };
        trace!(code, "root probe");
        code
    }
}
