pub mod config;
pub mod config_file;
pub mod error;

pub use config::{Config, DisplayStyle, HexColor, ReadingConfig, SplitMode};
pub use error::{ChunkError, ConfigError, PaceError, ReadingError};
