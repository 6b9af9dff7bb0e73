use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `SPEEDREAD_LOG=debug`.
pub const LOG_ENV: &str = "SPEEDREAD_LOG";

/// Default log file for TUI runs: `<data_local_dir>/speedread/speedread.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("speedread").join("speedread.log"))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Logs to `path`. Used while the TUI owns the terminal.
pub fn init_file(path: &Path) -> io::Result<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;
    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .map_err(io::Error::other)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

/// Logs warnings and errors to stderr so stdout stays clean for plain output.
pub fn init_stderr() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(io::stderr)
        .try_init()
        .map_err(io::Error::other)
}
