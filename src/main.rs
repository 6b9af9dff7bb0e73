use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use speedread::app::{App, AppEvent, EMPTY_TEXT_WARNING};
use speedread::engine::config_file::{self, ConfigFile};
use speedread::engine::{Config, HexColor, SplitMode};
use speedread::input::{self, LoadedDocument};
use speedread::logging;
use speedread::reading::{PlainDriver, ReadingSession};
use speedread::ui::TuiManager;

/// Speed reader: shows text in small word chunks at a steady pace.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text or PDF file to read; `-` reads stdin
    path: Option<PathBuf>,

    /// PDF page to read (0-based)
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Read this text instead of a file
    #[arg(long, conflicts_with = "path")]
    text: Option<String>,

    /// Reading speed in words per minute (100-1000)
    #[arg(long)]
    wpm: Option<u32>,

    /// Words per chunk (1-5)
    #[arg(long)]
    chunk: Option<usize>,

    /// Split by: words, sentences or paragraphs
    #[arg(long)]
    split: Option<SplitMode>,

    /// Font size in px (20-60)
    #[arg(long)]
    font_size: Option<u16>,

    /// Text color as #RRGGBB
    #[arg(long)]
    fg: Option<HexColor>,

    /// Background color as #RRGGBB
    #[arg(long)]
    bg: Option<HexColor>,

    /// Print chunks to stdout instead of opening the terminal UI
    #[arg(long)]
    plain: bool,

    /// Config file to use instead of the default locations
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file for terminal UI runs
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.plain {
        logging::init_stderr().context("Failed to initialise logging")?;
    } else if let Some(path) = args.log_file.clone().or_else(logging::default_log_path) {
        logging::init_file(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
    }

    let config = resolve_config(&args)?;
    tracing::debug!(?config, "resolved configuration");

    if args.plain {
        run_plain(&args, &config)
    } else {
        run_tui(&args, config)
    }
}

/// Defaults, then config files, then CLI flags. Each layer is range-checked.
fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let file = match &args.config {
        Some(path) => config_file::load_from_path(path)?,
        None => config_file::load_config(),
    };

    let mut config = Config::default();
    file.apply(&mut config).context("Invalid value in config file")?;

    let overrides = ConfigFile {
        reading: Some(config_file::ReadingSection {
            wpm: args.wpm,
            words_per_chunk: args.chunk,
            split: args.split,
        }),
        display: Some(config_file::DisplaySection {
            font_size: args.font_size,
            text_color: args.fg.map(|c| c.to_string()),
            background_color: args.bg.map(|c| c.to_string()),
        }),
    };
    overrides
        .apply(&mut config)
        .context("Invalid command-line option")?;

    Ok(config)
}

fn load_source(args: &Args) -> Option<anyhow::Result<LoadedDocument>> {
    if let Some(text) = &args.text {
        return Some(Ok(LoadedDocument::typed(text.clone())));
    }
    let path = args.path.as_deref()?;
    if path == Path::new("-") {
        return Some(input::text::from_reader(io::stdin().lock(), "stdin").map_err(Into::into));
    }
    Some(input::load_path(path, args.page).map_err(Into::into))
}

fn run_plain(args: &Args, config: &Config) -> anyhow::Result<()> {
    let doc = match load_source(args) {
        Some(result) => result?,
        None => {
            eprintln!("{}", EMPTY_TEXT_WARNING);
            return Ok(());
        }
    };

    if doc.is_blank() {
        eprintln!("{}", EMPTY_TEXT_WARNING);
        return Ok(());
    }

    let mut session = ReadingSession::from_text(&doc.text, &config.reading)?;
    let stdout = io::stdout();
    PlainDriver::new(stdout.lock())
        .run(&mut session)
        .context("Failed to write to stdout")?;
    Ok(())
}

fn run_tui(args: &Args, config: Config) -> anyhow::Result<()> {
    let mut app = App::with_config(config);
    if args.page > 0 {
        app.handle_event(AppEvent::SetPage(args.page));
    }

    match args.path.as_deref() {
        Some(path) if path != Path::new("-") && args.text.is_none() => {
            app.handle_event(AppEvent::LoadFile(path.display().to_string()));
        }
        _ => match load_source(args) {
            Some(Ok(doc)) => app.set_document(doc),
            Some(Err(err)) => return Err(err),
            None => {}
        },
    }

    let mut tui = TuiManager::new().context("Failed to initialise terminal")?;
    tui.run_event_loop(&mut app)?;
    Ok(())
}
