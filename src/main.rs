//! `dupback` — a duplicity front-end driven by env-file configuration.
//!
//! # Overview
//!
//! This binary is a thin orchestration layer around
//! [`duplicity`](https://duplicity.gitlab.io).  It resolves layered env-file
//! configuration, validates options, assembles the exact duplicity command
//! line for the requested action, and runs it as a child process.  All real
//! backup work — chunking, encryption, remote transport, retention — happens
//! inside duplicity.
//!
//! # Usage
//!
//! ```text
//! dupback make                        # incremental backup
//! dupback make --full                 # full backup, then prune + cleanup
//! dupback list                        # collection status of the destination
//! dupback content -d "yesterday"      # file listing at a point in time
//! dupback restore -p /tmp/restored    # restore to a fresh path
//! dupback remove_older_backups        # prune past the retention window
//! dupback cleanup                     # drop orphaned signature files
//! ```
//!
//! # Module layout
//!
//! | Module       | Responsibility                                    |
//! |--------------|---------------------------------------------------|
//! | [`cli`]      | Argument types parsed by clap                     |
//! | [`config`]   | Layered env-file loading → `Config` struct        |
//! | [`date`]     | Free-text `--date` canonicalisation               |
//! | [`error`]    | Error taxonomy and fixed exit codes               |
//! | [`runner`]   | Params splicing, echo prefix, process execution   |
//! | [`commands`] | One handler + argument builder per action         |

mod cli;
mod commands;
mod config;
mod date;
mod error;
mod runner;

use std::process::ExitCode;

use clap::Parser;
use console::style;

use cli::{Action, Cli};
use error::BackupError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red().bold());
            ExitCode::from(err.exit_code())
        },
    }
}

/// Resolve configuration, validate options in their observable order
/// (config completeness → restore path → date), then hand off to the
/// exhaustively-matched action handler.
fn dispatch(cli: &Cli) -> Result<(), BackupError> {
    let cfg = config::load(&cli.config_dir())?;

    if cli.action == Action::Restore && cli.path.is_none() {
        return Err(BackupError::MissingRestorePath);
    }

    // Canonicalised even for actions that ignore it, so a bad --date is
    // always reported.
    let date = cli.date.as_deref().map(date::canonicalize).transpose()?;
    let date = date.as_deref();

    match cli.action {
        Action::Make => commands::make::run(cli, &cfg),
        Action::List => commands::list::run(&cfg),
        Action::Content => commands::content::run(&cfg, date),
        Action::Restore => {
            let path = cli.path.as_deref().ok_or(BackupError::MissingRestorePath)?;
            commands::restore::run(&cfg, path, date)
        },
        Action::RemoveOlderBackups => commands::remove::run(&cfg),
        Action::Cleanup => commands::cleanup::run(&cfg),
    }
}
