//! Command splicing and subprocess execution.
//!
//! The [`splice_params`] helper is where the one piece of real logic in this
//! program lives: inserting the configured `DUPLICITY_PARAMS` tokens into a
//! base command at a fixed, per-action index.  Duplicity is picky about flag
//! ordering (verbosity and log flags must land before the positional
//! source/destination arguments), so the insertion points are part of the
//! contract — do not normalise them.
//!
//! # Debug mode
//!
//! [`echo_prefix`] returns a zero- or one-element `Vec` that is prepended to
//! every command.  When `DEBUG` is set in the configuration it contains
//! `["echo"]`, turning every invocation into a no-op that prints the exact
//! command line — the tests are built on this.

use std::process::Command;

use crate::{config::Config, error::BackupError};

// ─── Splicing ─────────────────────────────────────────────────────────────────

/// Insert the whitespace-split `params` tokens into `cmd` at index `at`.
///
/// An empty (or all-whitespace) `params` string inserts nothing.
pub fn splice_params(mut cmd: Vec<String>, params: &str, at: usize) -> Vec<String> {
    let extra: Vec<String> = params.split_whitespace().map(String::from).collect();
    cmd.splice(at..at, extra);
    cmd
}

// ─── Debug prefix ─────────────────────────────────────────────────────────────

/// Returns `["echo"]` when `DEBUG` is configured, otherwise an empty `Vec`.
///
/// Prepend this to any command that should be echoed rather than executed.
pub fn echo_prefix(cfg: &Config) -> Vec<String> {
    if cfg.debug {
        vec!["echo".into()]
    } else {
        vec![]
    }
}

// ─── Execution ────────────────────────────────────────────────────────────────

/// Run `command` as a child process, blocking until it exits.
///
/// The child inherits stdout/stderr and receives the full resolved variable
/// map — duplicity reads `PASSPHRASE` and the remote credentials from its
/// environment.  Only a spawn failure is an error; the child's own exit
/// status is not interpreted.
pub fn run(cfg: &Config, command: Vec<String>) -> Result<(), BackupError> {
    let mut full = echo_prefix(cfg);
    full.extend(command);

    let Some((prog, rest)) = full.split_first() else {
        return Ok(());
    };

    Command::new(prog)
        .args(rest)
        .envs(&cfg.vars)
        .status()
        .map_err(|source| BackupError::Spawn {
            command: full.join(" "),
            source,
        })?;

    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
