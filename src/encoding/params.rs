//! Parameter types for encoder invocations.
//!
//! These structs describe *what* to produce, not *how*. The
//! [`command`](super::command) module turns them into argument vectors for a
//! concrete tool, and the [`runner`](super::runner) executes (or simulates)
//! those commands. Keeping them apart lets the planner be tested as pure data.

use crate::types::Resolution;
use std::path::PathBuf;

/// A solid-color still with the resolution label rendered in the center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParams {
    pub output: PathBuf,
    pub resolution: Resolution,
    /// Background fill, already normalized to `#RRGGBB`.
    pub background: String,
}

/// A looping video of a single still.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoParams {
    pub image: PathBuf,
    pub output: PathBuf,
}

/// A cross-fade from one still into another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionParams {
    pub from_image: PathBuf,
    pub to_image: PathBuf,
    pub output: PathBuf,
}
