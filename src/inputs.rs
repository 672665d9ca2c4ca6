//! Loading of the palette and resolution lists.
//!
//! Both files are YAML sequences:
//!
//! ```yaml
//! # colors.yaml
//! - name: red
//!   hex: "FF0000"
//! - name: blue
//!   hex: "#0000FF"
//! ```
//!
//! ```yaml
//! # resolutions.yaml
//! - width: 1920
//!   height: 1080
//! ```
//!
//! An empty file is an empty list. Anything that cannot be read or parsed is
//! an error; the binary treats it as fatal before any work is attempted.
//!
//! Color names become file names, so the palette is also rejected when two
//! of its artifacts would share one (see [`naming::transition_stem`]).

use crate::naming;
use crate::plan::successor;
use crate::types::{Color, Resolution};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("error reading {kind} file {}: {source}", path.display())]
    Read {
        kind: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("error parsing {kind} file {}: {source}", path.display())]
    Parse {
        kind: &'static str,
        path: PathBuf,
        source: serde_yml::Error,
    },
    #[error("invalid {kind} file {}: {message}", path.display())]
    Invalid {
        kind: &'static str,
        path: PathBuf,
        message: String,
    },
}

/// Everything the driver needs, loaded once and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub colors: Vec<Color>,
    pub resolutions: Vec<Resolution>,
}

impl Inputs {
    pub fn new(colors: Vec<Color>, resolutions: Vec<Resolution>) -> Self {
        Self {
            colors,
            resolutions,
        }
    }

    /// Load both input files.
    pub fn load(colors_path: &Path, resolutions_path: &Path) -> Result<Self, InputError> {
        Ok(Self {
            colors: load_colors(colors_path)?,
            resolutions: load_resolutions(resolutions_path)?,
        })
    }
}

/// Load the ordered palette. Names must be non-empty and unique, and no two
/// artifacts may end up with the same file name.
pub fn load_colors(path: &Path) -> Result<Vec<Color>, InputError> {
    let colors: Vec<Color> = load_yaml_list("colors", path)?;
    let mut seen: HashSet<String> = HashSet::new();
    for color in &colors {
        if color.name.is_empty() {
            return Err(invalid("colors", path, "color name must not be empty"));
        }
        if !seen.insert(color.name.clone()) {
            return Err(invalid(
                "colors",
                path,
                format!("duplicate color name '{}'", color.name),
            ));
        }
    }
    for (index, color) in colors.iter().enumerate() {
        let Some(next) = successor(&colors, index) else {
            continue;
        };
        let stem = naming::transition_stem(&color.name, &next.name);
        if !seen.insert(stem.clone()) {
            return Err(invalid(
                "colors",
                path,
                format!("transition '{stem}' has the same file name as another artifact"),
            ));
        }
    }
    Ok(colors)
}

/// Load the target resolutions. Both dimensions must be non-zero.
pub fn load_resolutions(path: &Path) -> Result<Vec<Resolution>, InputError> {
    let resolutions: Vec<Resolution> = load_yaml_list("resolutions", path)?;
    if let Some(bad) = resolutions.iter().find(|r| r.width == 0 || r.height == 0) {
        return Err(invalid(
            "resolutions",
            path,
            format!("resolution {} has a zero dimension", bad.label()),
        ));
    }
    Ok(resolutions)
}

fn load_yaml_list<T: DeserializeOwned>(
    kind: &'static str,
    path: &Path,
) -> Result<Vec<T>, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yml::from_str(&content).map_err(|source| InputError::Parse {
        kind,
        path: path.to_path_buf(),
        source,
    })
}

fn invalid(kind: &'static str, path: &Path, message: impl Into<String>) -> InputError {
    InputError::Invalid {
        kind,
        path: path.to_path_buf(),
        message: message.into(),
    }
}
