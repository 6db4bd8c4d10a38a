//! Action handlers.
//!
//! Each file in this module corresponds to one user-facing action:
//!
//! | File         | Invocation                      | Description                          |
//! |--------------|---------------------------------|--------------------------------------|
//! | `make.rs`    | `dupback make [--full]`         | Incremental or full backup           |
//! | `remove.rs`  | `dupback remove_older_backups`  | Prune backups past the keep window   |
//! | `cleanup.rs` | `dupback cleanup`               | Remove orphaned signature files      |
//! | `list.rs`    | `dupback list`                  | Collection status of the destination |
//! | `content.rs` | `dupback content [--date …]`    | List files in the backup             |
//! | `restore.rs` | `dupback restore --path …`      | Restore to a fresh path              |
//!
//! Every handler builds its argument vector with a dedicated `build_*_args`
//! function (kept `pub` so the unit tests can pin the exact token order) and
//! hands it to [`crate::runner::run`].

pub mod cleanup;
pub mod content;
pub mod list;
pub mod make;
pub mod remove;
pub mod restore;
