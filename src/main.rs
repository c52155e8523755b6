//! vimodal - a small terminal text editor with vi-style modal editing
//!
//! This is the main entry point. It parses CLI arguments, sets up logging
//! and configuration, then hands off to the terminal event loop.

mod cli;
mod run;

use std::fs::File;
use std::path::Path;

use vimodal::config::Config;
use vimodal::user_config;

/// Route `log` output to a file. The terminal belongs to the editor, so
/// without `--log` nothing is logged at all.
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)
        .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let cli = cli::Cli::parse()?;
    if cli.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Load configuration
    let mut config = Config::default();
    user_config::configure(&mut config);

    // Apply CLI overrides
    cli.apply_to_config(&mut config);
    log::debug!("starting with {:?}", cli);

    run::ensure_terminal()?;
    run::run_terminal_mode(cli.file.as_deref(), &config)
}
