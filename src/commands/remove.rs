//! `dupback remove_older_backups` — prune backups past the retention window.
//!
//! Also triggered automatically after a successful `make --full`.

use crate::{config::Config, error::BackupError, runner};

/// Remove backups older than `BACKUP_KEEP` from the destination.
pub fn run(cfg: &Config) -> Result<(), BackupError> {
    runner::run(cfg, build_remove_args(cfg))
}

/// Arguments for `duplicity remove-older-than`.
///
/// Retention always runs quiet (`--verb 0`) regardless of the configured
/// verbosity, and `--force` makes duplicity actually delete rather than
/// just report.
pub fn build_remove_args(cfg: &Config) -> Vec<String> {
    let cmd = vec![
        cfg.duplicity.clone(),
        "remove-older-than".into(),
        cfg.keep.clone(),
        "--force".into(),
        "--verb".into(),
        "0".into(),
        cfg.destination.clone(),
    ];
    runner::splice_params(cmd, &cfg.params, 6)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn make_cfg() -> Config {
        let vars: BTreeMap<String, String> = [
            ("BACKUP_DESTINATION", "scp://localhost/backup"),
            ("BACKUP_SOURCE", "/home/alice"),
            ("BACKUP_KEEP", "60d"),
            ("AWS_ACCESS_KEY_ID", "key"),
            ("AWS_SECRET_ACCESS_KEY", "secret"),
            ("PASSPHRASE", "pw"),
            ("DUPLICITY", "/usr/bin/duplicity"),
            ("DUPLICITY_PARAMS", "--log-file ~/.backup/duplicity.log"),
            ("DUPLICITY_VERBOSE", "2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Config::from_vars(vars).unwrap()
    }

    #[test]
    fn remove_args_exact_order() {
        let args = build_remove_args(&make_cfg());
        assert_eq!(args, vec![
            "/usr/bin/duplicity",
            "remove-older-than",
            "60d",
            "--force",
            "--verb",
            "0",
            "--log-file",
            "~/.backup/duplicity.log",
            "scp://localhost/backup",
        ]);
    }

    #[test]
    fn remove_args_always_quiet() {
        // DUPLICITY_VERBOSE is 2, but retention forces --verb 0.
        let args = build_remove_args(&make_cfg());
        let i = args.iter().position(|a| a == "--verb").unwrap();
        assert_eq!(args[i + 1], "0");
    }

    #[test]
    fn remove_args_without_params() {
        let mut cfg = make_cfg();
        cfg.params.clear();
        assert_eq!(build_remove_args(&cfg).last().unwrap(), "scp://localhost/backup");
        assert_eq!(build_remove_args(&cfg).len(), 7);
    }

    #[test]
    fn snapshot_remove_args() {
        insta::assert_debug_snapshot!(build_remove_args(&make_cfg()), @r###"
        [
            "/usr/bin/duplicity",
            "remove-older-than",
            "60d",
            "--force",
            "--verb",
            "0",
            "--log-file",
            "~/.backup/duplicity.log",
            "scp://localhost/backup",
        ]
        "###);
    }
}
