use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::config::{Config, SplitMode};
use super::error::ConfigError;

/// On-disk TOML configuration.
/// All fields are optional so partial configs merge over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    pub reading: Option<ReadingSection>,
    pub display: Option<DisplaySection>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReadingSection {
    pub wpm: Option<u32>,
    pub words_per_chunk: Option<usize>,
    pub split: Option<SplitMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisplaySection {
    pub font_size: Option<u16>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
}

/// Platform config path: `<config_dir>/speedread/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("speedread").join("config.toml"))
}

/// Per-directory override file.
pub const LOCAL_CONFIG: &str = ".speedread.toml";

/// Loads `path` strictly: a missing or malformed file is an error.
pub fn load_from_path(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `path` if it exists. Unreadable or malformed files are logged and skipped.
fn load_optional(path: &Path) -> Option<ConfigFile> {
    if !path.exists() {
        return None;
    }
    match load_from_path(path) {
        Ok(file) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            Some(file)
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring config file");
            None
        }
    }
}

/// Cascades the CWD `.speedread.toml` over the platform config.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_optional(&p));
    let local = load_optional(Path::new(LOCAL_CONFIG));

    match (platform, local) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(l)) => l,
        (Some(p), Some(l)) => merge(p, l),
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    let base_reading = base.reading.unwrap_or_default();
    let over_reading = overlay.reading.unwrap_or_default();
    let base_display = base.display.unwrap_or_default();
    let over_display = overlay.display.unwrap_or_default();

    ConfigFile {
        reading: Some(ReadingSection {
            wpm: over_reading.wpm.or(base_reading.wpm),
            words_per_chunk: over_reading.words_per_chunk.or(base_reading.words_per_chunk),
            split: over_reading.split.or(base_reading.split),
        }),
        display: Some(DisplaySection {
            font_size: over_display.font_size.or(base_display.font_size),
            text_color: over_display.text_color.or(base_display.text_color),
            background_color: over_display
                .background_color
                .or(base_display.background_color),
        }),
    }
}

impl ConfigFile {
    /// Writes every present value into `config`, range-checking each one.
    pub fn apply(&self, config: &mut Config) -> Result<(), ConfigError> {
        if let Some(reading) = &self.reading {
            if let Some(wpm) = reading.wpm {
                config.reading.set_wpm(wpm)?;
            }
            if let Some(words) = reading.words_per_chunk {
                config.reading.set_words_per_chunk(words)?;
            }
            if let Some(split) = reading.split {
                config.reading.split = split;
            }
        }

        if let Some(display) = &self.display {
            if let Some(size) = display.font_size {
                config.display.set_font_size(size)?;
            }
            if let Some(color) = &display.text_color {
                config.display.text_color = color.parse()?;
            }
            if let Some(color) = &display.background_color {
                config.display.background_color = color.parse()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::HexColor;
    use std::io::Write;

    #[test]
    fn test_parse_partial_config() {
        let file = parse("[reading]\nwpm = 450\nsplit = \"sentences\"\n", Path::new("t.toml")).unwrap();
        let reading = file.reading.unwrap();
        assert_eq!(reading.wpm, Some(450));
        assert_eq!(reading.words_per_chunk, None);
        assert_eq!(reading.split, Some(SplitMode::Sentences));
        assert!(file.display.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_split() {
        let result = parse("[reading]\nsplit = \"chapters\"\n", Path::new("t.toml"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base = ConfigFile {
            reading: Some(ReadingSection {
                wpm: Some(200),
                words_per_chunk: Some(3),
                split: None,
            }),
            display: Some(DisplaySection {
                font_size: Some(40),
                ..DisplaySection::default()
            }),
        };
        let overlay = ConfigFile {
            reading: Some(ReadingSection {
                wpm: Some(500),
                ..ReadingSection::default()
            }),
            display: None,
        };

        let merged = merge(base, overlay);
        let reading = merged.reading.unwrap();
        assert_eq!(reading.wpm, Some(500));
        assert_eq!(reading.words_per_chunk, Some(3));
        assert_eq!(merged.display.unwrap().font_size, Some(40));
    }

    #[test]
    fn test_apply_sets_values() {
        let file = ConfigFile {
            reading: Some(ReadingSection {
                wpm: Some(600),
                words_per_chunk: Some(4),
                split: Some(SplitMode::Paragraphs),
            }),
            display: Some(DisplaySection {
                font_size: Some(48),
                text_color: Some("#A9B1D6".to_string()),
                background_color: Some("#1A1B26".to_string()),
            }),
        };
        let mut config = Config::default();
        file.apply(&mut config).unwrap();

        assert_eq!(config.reading.wpm, 600);
        assert_eq!(config.reading.words_per_chunk, 4);
        assert_eq!(config.reading.split, SplitMode::Paragraphs);
        assert_eq!(config.display.font_size, 48);
        assert_eq!(
            config.display.background_color,
            HexColor {
                r: 0x1A,
                g: 0x1B,
                b: 0x26
            }
        );
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let file = ConfigFile {
            reading: Some(ReadingSection {
                wpm: Some(2000),
                ..ReadingSection::default()
            }),
            display: None,
        };
        let mut config = Config::default();
        assert!(matches!(
            file.apply(&mut config),
            Err(ConfigError::OutOfRange { field: "wpm", .. })
        ));
        assert_eq!(config.reading.wpm, 300);
    }

    #[test]
    fn test_apply_rejects_bad_color() {
        let file = ConfigFile {
            reading: None,
            display: Some(DisplaySection {
                text_color: Some("red".to_string()),
                ..DisplaySection::default()
            }),
        };
        assert!(matches!(
            file.apply(&mut Config::default()),
            Err(ConfigError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_load_from_path_reads_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "[display]\nfont_size = 22").unwrap();
        let file = load_from_path(tmp.path()).unwrap();
        assert_eq!(file.display.unwrap().font_size, Some(22));
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let result = load_from_path(Path::new("/nonexistent/speedread.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
