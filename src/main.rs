use anyhow::{Context, Result};
use clap::Parser;
use roster::app::App;
use roster::cli::Cli;
use roster::config::Config;
use roster::styles::{init_theme, ThemeType};
use tracing::warn;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    setup_panic_hook();

    let log_dir = roster::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout belongs to the TUI, so logs go to a file
    let file_appender = tracing_appender::rolling::never(&log_dir, "roster.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    if cli.execute()? {
        drop(guard);
        return Ok(());
    }

    let config_path = cli.config_path();
    let config = Config::load_or_default(&config_path).context("Failed to load configuration")?;

    let no_color = cli.no_colors || std::env::var_os("NO_COLOR").is_some();
    let theme_type = if no_color {
        ThemeType::NoColor
    } else {
        cli.theme
            .as_deref()
            .unwrap_or(&config.theme)
            .parse()
            .unwrap_or_default()
    };
    init_theme(theme_type);

    for key in config.keymap.invalid_overrides() {
        warn!("Ignoring keymap override with unparseable key {:?}", key);
    }

    let initial_route = cli.initial_route()?;
    let roster = config.roster()?;

    let mut app = App::new(config, roster, initial_route)?;
    let result = app.run();

    drop(guard);

    result
}
