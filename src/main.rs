use std::io;

use anyhow::Result;
use clap::Parser;

use income_tracker::audit::AuditLogger;
use income_tracker::cli::{menu, App};
use income_tracker::config::{Settings, TrackerPaths};
use income_tracker::storage::EntryStore;

#[derive(Parser)]
#[command(
    name = "income",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal income logging utility",
    long_about = "A menu-driven income tracker. Records cash and deposit \
                  entries with amount, timestamp, and notes to a flat CSV \
                  store, and reports totals and a chronological listing. \
                  The session is fully interactive; there are no flags \
                  beyond --help and --version."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    // Initialize the record store before any read or write
    let store = EntryStore::new(paths.store_file());
    store.ensure_exists()?;

    let app = App {
        store,
        settings,
        audit: AuditLogger::new(paths.audit_log()),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    menu::run(&app, &mut input, &mut output)?;

    Ok(())
}
