/// Error types shared by the library and the terminal binary.
///
/// The frame simulation itself never fails; errors come from loading the
/// configuration and assets at startup, and from the rendering backend.
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// Missing or unreadable sprite/font asset. Fatal at startup.
    #[error("failed to load asset {}: {source}", .path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GameResult<T> = Result<T, GameError>;
