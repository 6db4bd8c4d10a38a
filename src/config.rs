//! Configuration resolution.
//!
//! Settings are plain `KEY=value` env-file entries, layered in precedence
//! order (most specific first):
//!
//! 1. the process environment (variables already exported always win),
//! 2. `.env` in the current working directory,
//! 3. `<config dir>/config` (config dir from `--config`, default `~/.backup`),
//! 4. `.env.default` in the current working directory.
//!
//! A later layer never overwrites a key set by an earlier one.  Absent files
//! are skipped silently; a malformed line within a file is skipped with a
//! warning on stderr.
//!
//! The merged map is materialised once into a [`Config`] struct and passed by
//! reference to the command builders.  The full map is also kept around so it
//! can be exported into every child process — duplicity reads `PASSPHRASE`,
//! `AWS_ACCESS_KEY_ID` and friends from its environment, not from argv.
//!
//! # File format
//!
//! ```text
//! BACKUP_DESTINATION=scp://backup@nas/home
//! BACKUP_SOURCE=/home/alice
//! BACKUP_KEEP=60d
//! AWS_ACCESS_KEY_ID=...
//! AWS_SECRET_ACCESS_KEY=...
//! PASSPHRASE=...
//! DUPLICITY=/usr/bin/duplicity
//! DUPLICITY_PARAMS=--log-file /var/log/duplicity.log --asynchronous-upload
//! DUPLICITY_VERBOSE=2
//! ```

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::error::BackupError;

/// Keys that must be present after all layers are merged, in the order they
/// are checked (the first missing one is the one reported).
pub const REQUIRED_KEYS: [&str; 9] = [
    "BACKUP_DESTINATION",
    "BACKUP_SOURCE",
    "BACKUP_KEEP",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "PASSPHRASE",
    "DUPLICITY",
    "DUPLICITY_PARAMS",
    "DUPLICITY_VERBOSE",
];

/// Resolved configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backup destination URL, e.g. `scp://backup@nas/home`.
    pub destination: String,

    /// Source path backed up by `make`.
    pub source: String,

    /// Retention window for `remove_older_backups`, e.g. `60d`.
    pub keep: String,

    /// Path to the duplicity binary.
    pub duplicity: String,

    /// Extra parameters spliced into every duplicity invocation.
    ///
    /// Split on whitespace at build time; an empty string splices nothing.
    pub params: String,

    /// Verbosity level passed to `make` (other actions always use `0`).
    pub verbose: String,

    /// When set (to anything, including the empty string), commands are
    /// echoed instead of executed.
    pub debug: bool,

    /// The complete merged variable map, exported to every child process.
    pub vars: BTreeMap<String, String>,
}

impl Config {
    /// Validate `vars` and materialise the typed fields.
    ///
    /// Fails with the first missing key from [`REQUIRED_KEYS`].
    pub fn from_vars(vars: BTreeMap<String, String>) -> Result<Self, BackupError> {
        for key in REQUIRED_KEYS {
            if !vars.contains_key(key) {
                return Err(BackupError::MissingConfigKey(key));
            }
        }

        Ok(Self {
            destination: vars["BACKUP_DESTINATION"].clone(),
            source: vars["BACKUP_SOURCE"].clone(),
            keep: vars["BACKUP_KEEP"].clone(),
            duplicity: vars["DUPLICITY"].clone(),
            params: vars["DUPLICITY_PARAMS"].clone(),
            verbose: vars["DUPLICITY_VERBOSE"].clone(),
            debug: vars.contains_key("DEBUG"),
            vars,
        })
    }
}

// ─── Loader ───────────────────────────────────────────────────────────────────

/// Load and validate configuration from all layers.
pub fn load(config_dir: &Path) -> Result<Config, BackupError> {
    let mut vars: BTreeMap<String, String> = std::env::vars().collect();

    let layers = [
        PathBuf::from(".env"),
        config_dir.join("config"),
        PathBuf::from(".env.default"),
    ];
    for layer in &layers {
        merge_file(&mut vars, layer);
    }

    Config::from_vars(vars)
}

/// Merge one env-file layer into `vars` without overwriting existing keys.
///
/// An absent or unreadable file is skipped silently.  A malformed line is
/// skipped with a warning so one typo does not invalidate the whole file.
fn merge_file(vars: &mut BTreeMap<String, String>, path: &Path) {
    let Ok(iter) = dotenvy::from_path_iter(path) else {
        return;
    };

    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.entry(key).or_insert(value);
            },
            Err(err) => {
                eprintln!(
                    "Warning: skipping malformed line in '{}': {err}",
                    path.display()
                );
            },
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn full_vars() -> BTreeMap<String, String> {
        REQUIRED_KEYS
            .iter()
            .map(|k| (k.to_string(), format!("value-of-{k}")))
            .collect()
    }

    // ── from_vars ─────────────────────────────────────────────────────────────

    #[test]
    fn from_vars_populates_typed_fields() {
        let cfg = Config::from_vars(full_vars()).unwrap();
        assert_eq!(cfg.destination, "value-of-BACKUP_DESTINATION");
        assert_eq!(cfg.source, "value-of-BACKUP_SOURCE");
        assert_eq!(cfg.keep, "value-of-BACKUP_KEEP");
        assert_eq!(cfg.duplicity, "value-of-DUPLICITY");
        assert_eq!(cfg.params, "value-of-DUPLICITY_PARAMS");
        assert_eq!(cfg.verbose, "value-of-DUPLICITY_VERBOSE");
        assert!(!cfg.debug);
    }

    #[test]
    fn from_vars_keeps_the_whole_map() {
        let mut vars = full_vars();
        vars.insert("FTP_PASSWORD".into(), "hunter2".into());
        let cfg = Config::from_vars(vars).unwrap();
        // Keys not consumed here must still reach the child environment.
        assert_eq!(cfg.vars["FTP_PASSWORD"], "hunter2");
    }

    #[test]
    fn every_required_key_is_checked() {
        for key in REQUIRED_KEYS {
            let mut vars = full_vars();
            vars.remove(key);
            match Config::from_vars(vars) {
                Err(BackupError::MissingConfigKey(k)) => assert_eq!(k, key),
                other => panic!("expected MissingConfigKey({key}), got {other:?}"),
            }
        }
    }

    #[test]
    fn first_missing_key_wins() {
        let mut vars = full_vars();
        vars.remove("BACKUP_SOURCE");
        vars.remove("PASSPHRASE");
        match Config::from_vars(vars) {
            Err(BackupError::MissingConfigKey(k)) => assert_eq!(k, "BACKUP_SOURCE"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn debug_toggles_on_presence_even_when_empty() {
        let mut vars = full_vars();
        vars.insert("DEBUG".into(), String::new());
        let cfg = Config::from_vars(vars).unwrap();
        assert!(cfg.debug);
    }

    // ── merge_file ────────────────────────────────────────────────────────────

    #[test]
    fn merge_file_reads_pairs() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "BACKUP_KEEP=60d").unwrap();
        writeln!(f, "DUPLICITY=/usr/bin/duplicity").unwrap();

        let mut vars = BTreeMap::new();
        merge_file(&mut vars, f.path());
        assert_eq!(vars["BACKUP_KEEP"], "60d");
        assert_eq!(vars["DUPLICITY"], "/usr/bin/duplicity");
    }

    #[test]
    fn merge_file_never_overwrites() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "BACKUP_KEEP=999d").unwrap();

        let mut vars = BTreeMap::new();
        vars.insert("BACKUP_KEEP".into(), "60d".into());
        merge_file(&mut vars, f.path());
        assert_eq!(vars["BACKUP_KEEP"], "60d");
    }

    #[test]
    fn merge_file_skips_missing_file() {
        let mut vars = BTreeMap::new();
        merge_file(
            &mut vars,
            Path::new("/tmp/this-file-should-never-exist-dupback"),
        );
        assert!(vars.is_empty());
    }

    #[test]
    fn merge_file_keeps_later_lines_after_a_bad_one() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "NOT A VALID LINE").unwrap();
        writeln!(f, "PASSPHRASE=secret").unwrap();

        let mut vars = BTreeMap::new();
        merge_file(&mut vars, f.path());
        assert_eq!(vars.get("PASSPHRASE").map(String::as_str), Some("secret"));
    }

    // ── load (layer precedence via config dir only) ───────────────────────────

    #[test]
    fn load_reads_the_config_dir_layer() {
        let dir = tempfile::tempdir().unwrap();
        let mut body = String::new();
        for key in REQUIRED_KEYS {
            body.push_str(&format!("{key}=from-config-dir\n"));
        }
        std::fs::write(dir.path().join("config"), body).unwrap();

        let cfg = load(dir.path()).unwrap();
        assert_eq!(cfg.destination, "from-config-dir");
    }

    #[test]
    fn load_reports_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        // Empty config dir, no .env files in the test cwd, and none of the
        // required keys exported by the test harness.
        match load(dir.path()) {
            Err(BackupError::MissingConfigKey(_)) => {},
            other => panic!("expected MissingConfigKey, got {other:?}"),
        }
    }
}
