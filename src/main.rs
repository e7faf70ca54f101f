use std::io;
use std::path::PathBuf;

use clap::Parser;
use ratatui::prelude::*;

use outbox::app::App;
use outbox::campaign::load_campaigns;
use outbox::config::Config;
use outbox::session::FileSessionStore;
use outbox::store::paths;
use outbox::tui::{self, TerminalGuard};
use outbox::{OutboxError, Result};

/// Browse email campaigns in the terminal.
#[derive(Debug, Parser)]
#[command(name = "outbox", version, about)]
struct Cli {
    /// Config file (defaults to config.toml in the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Campaigns JSON file (overrides the config)
    #[arg(long)]
    campaigns: Option<PathBuf>,
}

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tui::restore_terminal();
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_panic_hook();

    // Log to a file; the terminal belongs to the TUI
    let log_dir = paths::log_dir().ok_or(OutboxError::NoProjectDirs)?;
    std::fs::create_dir_all(&log_dir)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "outbox.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = match cli.config {
        Some(path) => path,
        None => paths::config_path().ok_or(OutboxError::NoProjectDirs)?,
    };
    let config = Config::load_or_create(&config_path)?;

    let campaigns_path = match cli.campaigns.or_else(|| config.campaigns_path.clone()) {
        Some(path) => path,
        None => paths::campaigns_path().ok_or(OutboxError::NoProjectDirs)?,
    };
    let campaigns = load_campaigns(&campaigns_path)?;

    let session_path = paths::session_path().ok_or(OutboxError::NoProjectDirs)?;
    let session = FileSessionStore::open(session_path)?;

    let mut app = App::new(&config, session, campaigns);

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = app.run(&mut terminal);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    result?;
    Ok(())
}
