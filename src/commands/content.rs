//! `dupback content` — list the files contained in the backup.

use crate::{config::Config, error::BackupError, runner};

/// Show the file listing, optionally at a point in time.
///
/// `date` must already be in canonical `%Y-%m-%dT%H%M%S` form (see
/// [`crate::date::canonicalize`]).
pub fn run(cfg: &Config, date: Option<&str>) -> Result<(), BackupError> {
    runner::run(cfg, build_content_args(cfg, date))
}

/// Arguments for `duplicity list-current-files`.
///
/// `--time` lands immediately after the action keyword, before `--verb` and
/// the spliced params.
pub fn build_content_args(cfg: &Config, date: Option<&str>) -> Vec<String> {
    let cmd = vec![
        cfg.duplicity.clone(),
        "list-current-files".into(),
        "--verb".into(),
        "0".into(),
        cfg.destination.clone(),
    ];
    let mut cmd = runner::splice_params(cmd, &cfg.params, 4);

    if let Some(date) = date {
        cmd.insert(2, "--time".into());
        cmd.insert(3, date.into());
    }
    cmd
}

// ─── Tests ────────────────────────────────────────────────────────────────────
