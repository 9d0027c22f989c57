// algotty: time-travel sorting and searching visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotty::dataset::DEFAULT_SIZE;
use algotty::playback::DEFAULT_SPEED;
use algotty::recorder::Category;
use algotty::session::{validate, ConfigError, Visualizer, VisualizerConfig};
use algotty::ui::App;

/// Step through sorting and searching algorithms in the terminal
#[derive(Debug, Parser)]
#[command(name = "algotty", version, about)]
struct Cli {
    /// Algorithm family: sorting or searching
    #[arg(short, long, default_value = "sorting")]
    category: String,

    /// Algorithm id (bubble, selection, insertion, merge, quick, linear, binary, jump)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Number of generated elements (clamped to 5..=50)
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Search target (required for searching)
    #[arg(short, long, allow_hyphen_values = true)]
    target: Option<String>,

    /// Playback speed in percent (1..=100)
    #[arg(short, long, default_value_t = DEFAULT_SPEED)]
    speed: u8,

    /// Seed for the dataset generator
    #[arg(long)]
    seed: Option<u64>,

    /// Comma separated values to use instead of generated data
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i32>>,

    /// Write logs to this file (filtered by ALGOTTY_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("ALGOTTY_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns stdout, so logs only go to a file
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Validate the selection before touching the terminal
    let category: Category = cli
        .category
        .parse()
        .map_err(ConfigError::UnknownCategory)?;
    let algorithm_id = cli
        .algorithm
        .as_deref()
        .unwrap_or_else(|| category.default_algorithm().id());
    let (algorithm, target) = validate(category.id(), algorithm_id, cli.target.as_deref())?;

    let mut visualizer = Visualizer::new(VisualizerConfig {
        dataset_size: cli.size,
        speed: cli.speed,
        seed: cli.seed,
    });
    if let Some(values) = cli.values {
        visualizer.load_values(values);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(visualizer, algorithm, target);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI failed")
}
