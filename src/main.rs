// Interactive Tab Bar
// Terminal demo host for the interactive tab bar

// IMPORTS ------------------>>

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use tracing::{error, info, warn};

use interactive_tab_bar::{
    config_validation::{load_and_validate_config, ConfigSource},
    core::{App, TabItem},
    ui::run_app,
    utilities::init_logging,
};

//--------------------------------------------------------<<

#[derive(Parser)]
#[command(name = "interactive-tab-bar", version, about = "Tab bar you can tap or drag across")]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tab to select at startup (overrides application.initial_tab)
    #[arg(short, long)]
    tab: Option<TabItem>,

    /// Write logs to this file (overrides logging.file)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and validate configuration from YAML file
    let validated = load_and_validate_config(cli.config).context("failed to load configuration")?;

    init_logging(&validated.config.logging, cli.log_file)?;
    match &validated.source {
        ConfigSource::File(path) => info!(path = %path.display(), "loaded configuration"),
        ConfigSource::Defaults(path) => warn!(path = %path.display(), "config file not found, using defaults"),
    }

    let mut app = App::from_config(&validated, cli.tab);
    info!(tab = %app.current_tab(), "starting");

    // Setup terminal
    let mut terminal = setup_terminal().context("failed to set up terminal")?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal even when the loop failed
    if let Err(err) = restore_terminal(&mut terminal) {
        error!(%err, "failed to restore terminal");
    }

    if let Err(err) = &result {
        error!(%err, "application error");
    }
    info!("exiting");
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
