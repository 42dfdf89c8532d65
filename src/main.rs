use anyhow::{Context, Result};
use clap::Parser;
use fitnourish::app::App;
use fitnourish::cli::Cli;
use fitnourish::services::HttpPredictionService;
use fitnourish::styles::init_theme;
use fitnourish::utils::{get_config_path, get_log_dir};
use fitnourish::Config;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    setup_panic_hook();

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout belongs to the TUI, so logs only go to the file.
    let file_appender = tracing_appender::rolling::never(&log_dir, "fitnourish.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = get_config_path();
    let mut config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    config.apply_env();
    cli.apply_to(&mut config);
    init_theme(config.theme);
    info!("Using prediction service at {}", config.api_url);

    // Every path returns here so the guard flushes the log file.
    let result = match cli.execute(&config) {
        Ok(Some(status)) => Ok(ExitCode::from(status)),
        Ok(None) => {
            let service = Arc::new(HttpPredictionService::new(&config.api_url));
            App::new(config, config_path, service)
                .and_then(|mut app| app.run())
                .map(|()| ExitCode::SUCCESS)
        }
        Err(e) => Err(e),
    };

    drop(guard);
    result
}
