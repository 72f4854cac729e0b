use agora::app::{App, AppEvent};
use agora::config::Config;
use agora::feed::SimulatedSource;
use agora::trending::TrendingBoard;
use agora::ui;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Get the config directory path (~/.config/agora/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("agora"))
}

#[derive(Parser, Debug)]
#[command(
    name = "agora",
    about = "Terminal debate board with trending topics and an endless topic feed"
)]
struct Args {
    /// Config file (default: ~/.config/agora/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// TOML file with trending lists, replacing the built-in samples
    #[arg(long, value_name = "FILE")]
    trending: Option<PathBuf>,

    /// Seed for deterministic topic generation
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated latency per feed page, in milliseconds
    #[arg(long, value_name = "N")]
    latency_ms: Option<u64>,
}

/// Send tracing output to a log file so it cannot corrupt the alternate screen.
fn init_tracing(config_dir: &Path) -> Result<()> {
    let log_path = config_dir.join("agora.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Trending data from `path`, or the built-in samples if it cannot be used.
fn load_trending(path: Option<&Path>) -> TrendingBoard {
    let Some(path) = path else {
        return TrendingBoard::samples();
    };
    match TrendingBoard::load(path) {
        Ok(board) => board,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Falling back to sample trending data");
            eprintln!(
                "Warning: could not load trending data from {}: {}",
                path.display(),
                e
            );
            TrendingBoard::samples()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
    }

    init_tracing(&config_dir)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| config_dir.join("config.toml"));
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(ms) = args.latency_ms {
        config.load_latency_ms = ms;
    }

    let trending_path = args.trending.clone().or_else(|| config.trending_file.clone());
    let board = load_trending(trending_path.as_deref());

    let source = SimulatedSource::with_seed(args.seed, config.load_latency(), config.batch_size);
    tracing::debug!(
        seed = ?args.seed,
        latency_ms = config.load_latency_ms,
        batch_size = config.batch_size,
        "Topic source ready"
    );

    let mut app = App::new(&config, board, Arc::new(source));

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    ui::run(&mut app, event_tx, event_rx).await?;

    tracing::info!(
        cards = app.feed.cards().len(),
        pages = app.feed.state().current_page.saturating_sub(1),
        "Session ended"
    );
    println!("Goodbye!");
    Ok(())
}
