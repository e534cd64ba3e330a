//! taskpad interactive shell entry point.
//!
//! # Responsibility
//! - Resolve configuration (data dir, log level, store and notifier choice).
//! - Wire the engine runtime together and hand control to the shell.

mod notify;
mod shell;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use taskpad_core::db::open_db;
use taskpad_core::{
    default_log_level, init_logging, EngineRuntime, MemorySnapshotStore, SqliteSnapshotStore,
};

use crate::notify::TerminalNotifier;

/// Local task list with due-date reminders.
#[derive(Parser)]
#[command(name = "taskpad", version, about)]
struct Cli {
    /// Data directory for the database and logs. Defaults to the platform
    /// data dir.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,

    /// Keep everything in memory; nothing is persisted.
    #[arg(long)]
    ephemeral: bool,

    /// Deny the notification capability; reminder sweeps stay silent.
    #[arg(long)]
    no_notify: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("taskpad: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    std::fs::create_dir_all(&data_dir).map_err(|err| {
        format!(
            "cannot create data directory `{}`: {err}",
            data_dir.display()
        )
    })?;

    let level = cli
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &data_dir.join("logs"))?;

    let notifier = TerminalNotifier::new(!cli.no_notify);

    if cli.ephemeral {
        let store = MemorySnapshotStore::new();
        let runtime = EngineRuntime::start(store, notifier);
        let result = shell::run(&runtime);
        runtime.shutdown();
        result
    } else {
        let conn = open_db(data_dir.join("taskpad.db")).map_err(|err| err.to_string())?;
        let runtime = EngineRuntime::start(SqliteSnapshotStore::new(conn), notifier);
        let result = shell::run(&runtime);
        runtime.shutdown();
        result
    }
}

fn default_data_dir() -> Result<PathBuf, String> {
    dirs::data_dir()
        .map(|dir| dir.join("taskpad"))
        .ok_or_else(|| "no platform data directory available; pass --data-dir".to_string())
}
