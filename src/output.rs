//! User-facing progress lines.
//!
//! Everything a user reads on stdout goes through a `format_*` function here.
//! They are pure (no I/O), so tests can pin the exact wording that scripts
//! grep for. Diagnostics that are not part of normal output (encoder
//! failures, blocked artifacts) go through `tracing` on stderr instead.
//!
//! ```text
//! creating red image with resolution of 1920x1080
//! DRY RUN: convert -size 1920x1080 -gravity center -background '#FF0000' ...
//! skipping out/1920x1080/1920x1080-red.mov because it already exists
//! ```

use crate::encoding::BuildCommand;
use std::path::Path;

/// Prefix of every dry-run line.
pub const DRY_RUN_PREFIX: &str = "DRY RUN: ";

/// `DRY RUN: <command line>`
pub fn format_dry_run(command: &BuildCommand) -> String {
    format!("{DRY_RUN_PREFIX}{command}")
}

/// Announces a build, e.g. `creating red image with resolution of 1920x1080`.
pub fn format_creating(description: &str) -> String {
    format!("creating {description}")
}

/// Verbose-mode note for an artifact that is already on disk.
pub fn format_skip(path: &Path) -> String {
    format!("skipping {} because it already exists", path.display())
}
