//! `dupback cleanup` — remove orphaned signature files.
//!
//! Also triggered automatically after `make --full`, once retention pruning
//! has finished.

use crate::{config::Config, error::BackupError, runner};

/// Delete signature files no longer referenced by any retained backup.
pub fn run(cfg: &Config) -> Result<(), BackupError> {
    runner::run(cfg, build_cleanup_args(cfg))
}

/// Arguments for `duplicity cleanup`.
///
/// `--extra-clean` widens the sweep to old signature chains, not just the
/// files of broken sessions.
pub fn build_cleanup_args(cfg: &Config) -> Vec<String> {
    let cmd = vec![
        cfg.duplicity.clone(),
        "cleanup".into(),
        "--force".into(),
        "--extra-clean".into(),
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
    fn cleanup_args_exact_order() {
        let args = build_cleanup_args(&make_cfg());
        assert_eq!(args, vec![
            "/usr/bin/duplicity",
            "cleanup",
            "--force",
            "--extra-clean",
            "--verb",
            "0",
            "--log-file",
            "~/.backup/duplicity.log",
            "scp://localhost/backup",
        ]);
    }

    #[test]
    fn cleanup_args_without_params() {
        let mut cfg = make_cfg();
        cfg.params.clear();
        let args = build_cleanup_args(&cfg);
        assert_eq!(args, vec![
            "/usr/bin/duplicity",
            "cleanup",
            "--force",
            "--extra-clean",
            "--verb",
            "0",
            "scp://localhost/backup",
        ]);
    }
}
