use std::{error::Error, fmt, path::PathBuf};

/// Error when initializing the probing engine.
#[derive(Debug)]
pub enum InitError {
    /// The engine already holds an initialized tablebase set. It keeps global
    /// state, so only one handle may be live at a time.
    AlreadyInitialized,
    /// The path could not be passed to the engine, e.g. because it contains
    /// an interior NUL byte.
    InvalidPath {
        #[allow(missing_docs)]
        path: PathBuf,
    },
    /// The engine rejected the path.
    Rejected {
        #[allow(missing_docs)]
        path: PathBuf,
    },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::AlreadyInitialized => {
                write!(f, "tablebase engine is already initialized")
            }
            InitError::InvalidPath { path } => {
                write!(f, "path not representable in engine call: {}", path.display())
            }
            InitError::Rejected { path } => {
                write!(f, "engine rejected tablebase path: {}", path.display())
            }
        }
    }
}

impl Error for InitError {}
