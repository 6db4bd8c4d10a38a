//! `dupback make` — create an incremental or full backup.
//!
//! # Full-backup sequence (in order)
//!
//! | # | Step       | Command                                 |
//! |---|------------|-----------------------------------------|
//! | 1 | Hook       | `/bin/sh <config>/hook` (if present)    |
//! | 2 | Backup     | `duplicity full … <source> <dest>`      |
//! | 3 | Retention  | `duplicity remove-older-than …`         |
//! | 4 | Cleanup    | `duplicity cleanup …`                   |
//!
//! A plain `make` runs only step 2 (incremental).  The hook is executed
//! directly even in `DEBUG` echo mode and its exit status is ignored — it is
//! a convenience for things like database dumps, not a gate.

use std::process::Command;

use crate::{
    cli::Cli,
    commands::{cleanup, remove},
    config::Config,
    error::BackupError,
    runner,
};

/// Make a backup; with `--full`, run the whole hook/backup/prune sequence.
pub fn run(cli: &Cli, cfg: &Config) -> Result<(), BackupError> {
    if cli.full {
        run_hook(cli, cfg)?;
    }

    runner::run(cfg, build_make_args(cli, cfg))?;

    if cli.full {
        remove::run(cfg)?;
        cleanup::run(cfg)?;
    }
    Ok(())
}

/// Run the optional pre-backup hook script from the config directory.
///
/// Only a spawn failure of `/bin/sh` itself is an error.
fn run_hook(cli: &Cli, cfg: &Config) -> Result<(), BackupError> {
    let hook = cli.config_dir().join("hook");
    if !hook.is_file() {
        return Ok(());
    }

    Command::new("/bin/sh")
        .arg(&hook)
        .envs(&cfg.vars)
        .status()
        .map_err(|source| BackupError::Spawn {
            command: format!("/bin/sh {}", hook.display()),
            source,
        })?;

    Ok(())
}

/// Arguments for the backup invocation itself.
///
/// The params splice at index 3 keeps log/verbosity extras ahead of the
/// `--exclude-filelist` pair; the `full` keyword is inserted afterwards so
/// it always sits directly behind the binary path.
pub fn build_make_args(cli: &Cli, cfg: &Config) -> Vec<String> {
    let include = cli.config_dir().join("include");

    let cmd = vec![
        cfg.duplicity.clone(),
        "--verb".into(),
        cfg.verbose.clone(),
        "--exclude-filelist".into(),
        include.display().to_string(),
        "--exclude".into(),
        "**".into(),
        cfg.source.clone(),
        cfg.destination.clone(),
    ];
    let mut cmd = runner::splice_params(cmd, &cfg.params, 3);

    if cli.full {
        cmd.insert(1, "full".into());
    }
    cmd
}

// ─── Tests ────────────────────────────────────────────────────────────────────
