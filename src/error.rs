//! Error taxonomy and process exit codes.
//!
//! Every way this program can fail is a variant here, and every variant maps
//! to one fixed exit code.  Scripts wrapping `dupback` (cron jobs, monitoring
//! probes) branch on these codes, so the mapping is part of the public
//! interface and must never change:
//!
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! | 0    | success                                         |
//! | 55   | missing required option                         |
//! | 56   | missing configuration key                       |
//! | 57   | duplicity command error (spawn failure)         |
//! | 58   | restore path already exists                     |
//! | 59   | restore path parent directory is not writeable  |
//! | 60   | invalid format for `--date`                     |

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a `dupback` run.
#[derive(Debug, Error)]
pub enum BackupError {
    /// `restore` was invoked without `--path`.
    #[error("--path argument is required for restore action")]
    MissingRestorePath,

    /// A required configuration key was absent after all layers were merged.
    #[error("missed configuration key: {0}")]
    MissingConfigKey(&'static str),

    /// The child process could not be spawned at all.
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The restore target already exists on the filesystem.
    #[error("{} already exists!", .0.display())]
    RestoreTargetExists(PathBuf),

    /// The restore target's parent directory is not writeable.
    #[error("{} is not writeable!", .0.display())]
    ParentNotWriteable(PathBuf),

    /// `--date` could not be parsed.
    #[error("invalid format for --date option '{0}', try 2022-04-12T112456 format")]
    InvalidDate(String),
}

impl BackupError {
    /// The fixed process exit code for this failure.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingRestorePath => 55,
            Self::MissingConfigKey(_) => 56,
            Self::Spawn { .. } => 57,
            Self::RestoreTargetExists(_) => 58,
            Self::ParentNotWriteable(_) => 59,
            Self::InvalidDate(_) => 60,
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
