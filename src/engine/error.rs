use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChunkError {
    #[error("words per chunk must be at least 1")]
    ZeroChunkSize,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaceError {
    #[error("reading speed must be at least 1 WPM")]
    ZeroWpm,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReadingError {
    #[error(transparent)]
    Chunk(#[from] ChunkError),

    #[error(transparent)]
    Pace(#[from] PaceError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("Unknown split mode '{0}', expected words, sentences or paragraphs")]
    UnknownSplitMode(String),

    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
