//! Input data shared by every stage: palette colors and target resolutions.
//!
//! Both lists are loaded once at startup (see [`inputs`](crate::inputs)) and
//! never mutated afterwards. Palette order matters: it defines which color a
//! transition fades into.

use serde::Deserialize;
use std::fmt;

/// A named palette entry.
///
/// `hex` is passed through to the image encoder as-is apart from the leading
/// `#`, which is optional in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

impl Color {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Hex value with exactly one leading `#` (`FF0000` and `#FF0000` both
    /// become `#FF0000`).
    pub fn hex_code(&self) -> String {
        format!("#{}", self.hex.trim_start_matches('#'))
    }
}

/// Target pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The `WIDTHxHEIGHT` label used for directory and file names.
    pub fn label(&self) -> ResolutionLabel {
        ResolutionLabel(format!("{}x{}", self.width, self.height))
    }
}

/// String form of a [`Resolution`], e.g. `1920x1080`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionLabel(String);

impl ResolutionLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolutionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
