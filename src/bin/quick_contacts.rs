//! Minimal contact book entry point: add, search, list, exit.
//!
//! Runs against the same persistent store as the full menu.

use anyhow::Result;
use contact_book::config::AppConfig;
use contact_book::logging::init_logging;
use contact_book::shell;
use contact_book::store::{ContactStore, LoadStatus};

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    let _guard = init_logging(&config.logging)?;

    let (mut store, status) = ContactStore::load(&config.storage.data_file)?;
    if status == LoadStatus::Corrupt {
        println!("Warning: contacts file is corrupt. Starting with empty contacts.");
    }

    shell::run_quick_menu(&mut store)?;
    Ok(())
}
