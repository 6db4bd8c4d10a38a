//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  The `Cli` struct is parsed once in `main` and then
//! passed (by reference) into the action handlers.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(
    name    = "dupback",
    about   = "A duplicity front-end driven by env-file configuration",
    version,
    // Show a compact two-column help layout.
    help_template = "\
{before-help}{name} {version}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
pub struct Cli {
    /// Action to perform.
    #[arg(value_enum)]
    pub action: Action,

    /// Create a full (non-incremental) backup.
    ///
    /// After a full backup completes, old backups and orphaned signatures
    /// are pruned from the destination automatically.
    #[arg(short, long)]
    pub full: bool,

    /// Point-in-time for `content` and `restore`.
    ///
    /// Accepts free-text dates (`"2022-01-01 23:00"`, `"yesterday"`, ...);
    /// the value is canonicalised to `2013-04-30T153859` format before it is
    /// handed to duplicity.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Configuration directory.
    ///
    /// Holds the `config` env-file plus the optional `include` filelist and
    /// `hook` script.  Defaults to `~/.backup`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Destination path for `restore`.
    ///
    /// Must not exist yet; its parent directory must be writeable.
    #[arg(short, long)]
    pub path: Option<String>,
}

impl Cli {
    /// The configuration directory, defaulting to `~/.backup`.
    pub fn config_dir(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".backup")
        })
    }
}

/// The closed set of supported actions.
///
/// Every variant is matched exhaustively in `main`, so adding a new action
/// without wiring up a handler is a compile error rather than a silent no-op.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
pub enum Action {
    /// Make an incremental (or, with `--full`, a full) backup.
    Make,
    /// Show the collection status of the destination.
    List,
    /// List the files contained in the backup.
    Content,
    /// Restore the backup to `--path`.
    Restore,
    /// Remove backups older than the configured retention window.
    RemoveOlderBackups,
    /// Remove orphaned signature files from the destination.
    Cleanup,
}

// ─── Tests ────────────────────────────────────────────────────────────────────
