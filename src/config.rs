//! Encoder configuration module.
//!
//! Handles loading and validating an optional TOML file that tunes how the
//! external encoders are invoked. Without a file, the stock defaults below
//! are used; they reproduce the classic look (white Arial label, one frame
//! every ten seconds, ten-second diagonal wipe).
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [image]
//! font = "Arial"            # Font for the resolution label
//! pointsize = 72            # Label size in points
//! text_color = "white"      # Label fill color
//!
//! [video]
//! frame_rate = "1/10"       # Input frame rate for the looping video
//! codec = "libx264"
//! pixel_format = "yuv420p"
//!
//! [transition]
//! duration = 10             # Seconds, for both input loops and the fade
//! effect = "diagbr"         # ffmpeg xfade transition name
//!
//! [tools]
//! convert = "convert"       # ImageMagick binary
//! ffmpeg = "ffmpeg"
//! ```
//!
//! Files are sparse: override only the values you need. Unknown keys are
//! rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Encoder settings loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Still image rendering (ImageMagick).
    pub image: ImageConfig,
    /// Looping video encoding (ffmpeg).
    pub video: VideoConfig,
    /// Cross-fade transition encoding (ffmpeg).
    pub transition: TransitionConfig,
    /// External binaries.
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    pub font: String,
    pub pointsize: u32,
    pub text_color: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            font: "Arial".to_string(),
            pointsize: 72,
            text_color: "white".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoConfig {
    /// Passed to ffmpeg's `-r`; fractions like `1/10` are allowed.
    pub frame_rate: String,
    pub codec: String,
    pub pixel_format: String,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            frame_rate: "1/10".to_string(),
            codec: "libx264".to_string(),
            pixel_format: "yuv420p".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    pub duration: u32,
    pub effect: String,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration: 10,
            effect: "diagbr".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub convert: String,
    pub ffmpeg: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            convert: "convert".to_string(),
            ffmpeg: "ffmpeg".to_string(),
        }
    }
}

impl EncoderConfig {
    /// Validate config values are usable by the encoders.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.image.pointsize == 0 {
            return Err(ConfigError::Validation(
                "image.pointsize must be non-zero".into(),
            ));
        }
        if self.transition.duration == 0 {
            return Err(ConfigError::Validation(
                "transition.duration must be non-zero".into(),
            ));
        }
        let required = [
            ("image.font", &self.image.font),
            ("image.text_color", &self.image.text_color),
            ("video.frame_rate", &self.video.frame_rate),
            ("video.codec", &self.video.codec),
            ("video.pixel_format", &self.video.pixel_format),
            ("transition.effect", &self.transition.effect),
            ("tools.convert", &self.tools.convert),
            ("tools.ffmpeg", &self.tools.ffmpeg),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Parse and validate encoder settings from TOML text.
pub fn parse_config(content: &str) -> Result<EncoderConfig, ConfigError> {
    let config: EncoderConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load encoder settings from a file, or the stock defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<EncoderConfig, ConfigError> {
    match path {
        Some(path) => parse_config(&fs::read_to_string(path)?),
        None => Ok(EncoderConfig::default()),
    }
}

/// Returns a fully-commented stock config with every key and its default.
///
/// Printed by `--print-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# swatchgen encoder configuration
# ===============================
# All settings are optional. Values shown below are the defaults.
# Pass the file with --encoder-config <path>. Unknown keys cause an error.

[image]
# Font used for the centered resolution label.
font = "Arial"
# Label size in points.
pointsize = 72
# Label fill color (any ImageMagick color name or #hex).
text_color = "white"

[video]
# Input frame rate of the still image; 1/10 shows one frame per ten seconds.
frame_rate = "1/10"
codec = "libx264"
pixel_format = "yuv420p"

[transition]
# Length in seconds of each looped input and of the cross-fade itself.
duration = 10
# ffmpeg xfade transition name (diagbr = diagonal wipe, bottom-right).
effect = "diagbr"

[tools]
# ImageMagick binary used for still images.
convert = "convert"
# ffmpeg binary used for videos and transitions.
ffmpeg = "ffmpeg"
"##
}
