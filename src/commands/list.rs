//! `dupback list` — collection status of the destination.

use crate::{config::Config, error::BackupError, runner};

/// Show the list of backup sets at the destination.
pub fn run(cfg: &Config) -> Result<(), BackupError> {
    runner::run(cfg, build_list_args(cfg))
}

/// Arguments for `duplicity collection-status`.
pub fn build_list_args(cfg: &Config) -> Vec<String> {
    let cmd = vec![
        cfg.duplicity.clone(),
        "collection-status".into(),
        "--verb".into(),
        "0".into(),
        cfg.destination.clone(),
    ];
    runner::splice_params(cmd, &cfg.params, 4)
}

// ─── Tests ────────────────────────────────────────────────────────────────────
