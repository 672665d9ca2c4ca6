//! Shared test utilities for the swatchgen test suite.
//!
//! Palette builders and small filesystem helpers used by the planner,
//! orchestrator and driver tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! touch(&tmp.path().join("1920x1080/1920x1080-red.jpg"));
//! let colors = palette(&["red", "blue"]);
//! ```

use crate::types::Color;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// =========================================================================
// Palettes
// =========================================================================

/// Colors with the given names and a placeholder hex value each.
pub fn palette(names: &[&str]) -> Vec<Color> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Color::new(*name, format!("{:06X}", i * 0x111111)))
        .collect()
}

/// red, green, blue with their real hex values.
pub fn rgb_palette() -> Vec<Color> {
    vec![
        Color::new("red", "FF0000"),
        Color::new("green", "00FF00"),
        Color::new("blue", "0000FF"),
    ]
}

// =========================================================================
// Filesystem
// =========================================================================

/// Create an empty file, including missing parent directories.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"").unwrap();
}

/// Write `content` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Number of regular files anywhere under `dir`.
pub fn file_count(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}
