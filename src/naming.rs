//! Centralized file naming for generated artifacts.
//!
//! Every artifact lives in a per-resolution directory and is named after the
//! resolution label plus one or two color names:
//!
//! ```text
//! 1920x1080/
//! ├── 1920x1080-red.jpg            # still image
//! ├── 1920x1080-red.mov            # looping video of the still
//! └── 1920x1080-red-to-blue.mov    # cross-fade into the next color
//! ```
//!
//! All functions here are pure: the same inputs always give the same names,
//! which is what makes re-runs idempotent.

use crate::types::ResolutionLabel;
use std::path::{Path, PathBuf};

/// Extension for still images.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Extension for looping and transition videos.
pub const VIDEO_EXTENSION: &str = "mov";

/// `<label>-<color>.jpg`
pub fn image_file_name(label: &ResolutionLabel, color: &str) -> String {
    format!("{label}-{color}.{IMAGE_EXTENSION}")
}

/// `<label>-<color>.mov`
pub fn video_file_name(label: &ResolutionLabel, color: &str) -> String {
    format!("{label}-{color}.{VIDEO_EXTENSION}")
}

/// `<label>-<from>-to-<to>.mov`
pub fn transition_file_name(label: &ResolutionLabel, from: &str, to: &str) -> String {
    format!("{label}-{}.{VIDEO_EXTENSION}", transition_stem(from, to))
}

/// The part of a transition name that stands where a color name stands in a
/// video name. Videos and transitions share an extension, so a palette is
/// only usable when these stems never equal a color name or each other.
pub fn transition_stem(from: &str, to: &str) -> String {
    format!("{from}-to-{to}")
}

/// Directory holding every artifact of one resolution.
pub fn resolution_dir(output_dir: &Path, label: &ResolutionLabel) -> PathBuf {
    output_dir.join(label.as_str())
}
