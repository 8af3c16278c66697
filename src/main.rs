//! Full-menu contact book binary.

use anyhow::Result;
use clap::Parser;
use contact_book::config::AppConfig;
use contact_book::logging::init_logging;
use contact_book::shell;
use contact_book::store::{ContactStore, LoadStatus};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the contacts data file (overrides configuration)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then apply command-line overrides
    let mut config = AppConfig::load()?;
    if let Some(data_file) = cli.data_file {
        config.storage.data_file = data_file.display().to_string();
    }
    if let Some(log_level) = cli.log_level {
        config.logging.level = log_level;
    }
    config.validate()?;

    let _guard = init_logging(&config.logging)?;
    info!("Starting contact book");

    let (mut store, status) = ContactStore::load(&config.storage.data_file)?;
    match status {
        LoadStatus::Missing => println!("✅ No existing contacts file found. Starting fresh."),
        LoadStatus::Corrupt => {
            println!("Warning: contacts file is corrupt. Starting with empty contacts.");
        }
        LoadStatus::Loaded => {}
    }

    shell::run_full_menu(&mut store, &config)?;
    Ok(())
}
