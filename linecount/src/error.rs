//! Error types for the counting library

use thiserror::Error;

/// Result type alias for the counting library
pub type Result<T> = std::result::Result<T, CountError>;

/// Errors that can occur while building a counting setup.
///
/// The per-frame update paths are infallible; only configuration and
/// construction can fail.
#[derive(Error, Debug)]
pub enum CountError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "Reference bands overlap: lines at y={red_y} and y={blue_y} with offset {offset} \
         leave no gap between their tolerance bands"
    )]
    BandOverlap { red_y: i32, blue_y: i32, offset: i32 },

    #[error("Tracker error: {0}")]
    Tracker(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CountError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
