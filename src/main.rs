//! logbot-view - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// logbot-view - TUI for reading chat logs and sharing highlighted lines
#[derive(Parser, Debug)]
#[command(name = "lbv")]
#[command(version)]
#[command(about = "Terminal viewer for chat logs with shareable line highlights")]
pub struct Args {
    /// Path to JSONL log file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Page location to open, e.g. `/perl/20240101#c12-c20`
    #[arg(short, long, default_value = "/")]
    pub url: String,

    /// Rows kept above a restored highlight
    #[arg(long)]
    pub scroll_offset: Option<usize>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = logbot_view::config::load_config_with_precedence(args.config.clone())?;
        let merged = logbot_view::config::merge_config(config_file);
        let with_env = logbot_view::config::apply_env_overrides(merged);
        logbot_view::config::apply_cli_overrides(with_env, args.scroll_offset)
    };

    logbot_view::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let mut input_source = logbot_view::source::detect_input_source(args.file.clone())?;
    let parsed = input_source.load()?;

    for malformed in &parsed.malformed {
        warn!(
            "Parse error at line {}: {}",
            malformed.line_number(),
            malformed.error()
        );
    }
    info!(
        lines = parsed.lines.len(),
        skipped = parsed.malformed.len(),
        "Log loaded"
    );

    let location = logbot_view::highlight::PageLocation::parse(&args.url);
    let mut app_state =
        logbot_view::state::AppState::new(parsed.lines, location, config.scroll_offset);
    app_state.show_header = config.show_header;

    let cli_args = logbot_view::view::CliArgs {
        no_color: args.no_color,
    };
    let final_location = logbot_view::view::run_with_state(app_state, cli_args)?;

    // The shareable location, so it can be copied after quitting
    println!("{final_location}");

    Ok(())
}
