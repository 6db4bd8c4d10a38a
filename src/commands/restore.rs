//! `dupback restore` — restore the backup to a fresh path.
//!
//! Duplicity refuses to restore over existing data, so the target path is
//! validated here before anything is spawned: it must not exist yet, and its
//! parent directory must be writeable.

use std::path::Path;

use faccess::PathExt;

use crate::{config::Config, error::BackupError, runner};

/// Restore the backup to `path`, optionally at a point in time.
///
/// `date` must already be in canonical `%Y-%m-%dT%H%M%S` form.
pub fn run(cfg: &Config, path: &str, date: Option<&str>) -> Result<(), BackupError> {
    check_target(path)?;
    runner::run(cfg, build_restore_args(cfg, path, date))
}

/// Fail early when the restore target is unusable.
///
/// A bare relative name has an empty-string parent, which `access(2)`
/// rejects, so `dupback restore -p out` from an unwritable location fails
/// the same way the absolute-path case does.
pub fn check_target(path: &str) -> Result<(), BackupError> {
    let target = Path::new(path);
    if target.exists() {
        return Err(BackupError::RestoreTargetExists(target.into()));
    }

    let parent = target.parent().unwrap_or(Path::new(""));
    if !parent.writable() {
        return Err(BackupError::ParentNotWriteable(parent.into()));
    }

    Ok(())
}

/// Arguments for a plain `duplicity <dest> <path>` restore.
///
/// `--time` lands right after `--verb 0`, before the spliced params.
pub fn build_restore_args(cfg: &Config, path: &str, date: Option<&str>) -> Vec<String> {
    let cmd = vec![
        cfg.duplicity.clone(),
        "--verb".into(),
        "0".into(),
        cfg.destination.clone(),
        path.into(),
    ];
    let mut cmd = runner::splice_params(cmd, &cfg.params, 3);

    if let Some(date) = date {
        cmd.insert(3, "--time".into());
        cmd.insert(4, date.into());
    }
    cmd
}

// ─── Tests ────────────────────────────────────────────────────────────────────
