//! Typed command construction for the external encoders.
//!
//! A [`BuildCommand`] is a program plus an argument vector. Nothing is ever
//! interpolated into a shell string, so color names and paths containing
//! spaces or quotes reach the encoder untouched. The [`Display`](fmt::Display)
//! form quotes arguments POSIX-style so dry-run output can be pasted into a
//! shell.

use super::params::{ImageParams, TransitionParams, VideoParams};
use crate::config::EncoderConfig;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// One external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<OsString>,
    /// The file this command writes.
    pub output: PathBuf,
}

impl BuildCommand {
    /// ImageMagick `label:` render on a solid background.
    pub fn image(params: &ImageParams, config: &EncoderConfig) -> Self {
        let size = params.resolution.label().to_string();
        let args = vec![
            "-size".into(),
            size.clone().into(),
            "-gravity".into(),
            "center".into(),
            "-background".into(),
            params.background.clone().into(),
            "-fill".into(),
            config.image.text_color.clone().into(),
            "-font".into(),
            config.image.font.clone().into(),
            "-pointsize".into(),
            config.image.pointsize.to_string().into(),
            format!("label:{size}").into(),
            params.output.clone().into_os_string(),
        ];
        Self {
            program: config.tools.convert.clone(),
            args,
            output: params.output.clone(),
        }
    }

    /// ffmpeg encode of a single still at a low frame rate.
    pub fn video(params: &VideoParams, config: &EncoderConfig) -> Self {
        let args = vec![
            "-r".into(),
            config.video.frame_rate.clone().into(),
            "-i".into(),
            params.image.clone().into_os_string(),
            "-c:v".into(),
            config.video.codec.clone().into(),
            "-pix_fmt".into(),
            config.video.pixel_format.clone().into(),
            params.output.clone().into_os_string(),
        ];
        Self {
            program: config.tools.ffmpeg.clone(),
            args,
            output: params.output.clone(),
        }
    }

    /// ffmpeg `xfade` between two looped stills.
    pub fn transition(params: &TransitionParams, config: &EncoderConfig) -> Self {
        let duration = config.transition.duration.to_string();
        let filter = format!(
            "[0][1]xfade=transition={}:duration={}",
            config.transition.effect, duration
        );
        let args = vec![
            "-loop".into(),
            "1".into(),
            "-t".into(),
            duration.clone().into(),
            "-i".into(),
            params.from_image.clone().into_os_string(),
            "-loop".into(),
            "1".into(),
            "-t".into(),
            duration.into(),
            "-i".into(),
            params.to_image.clone().into_os_string(),
            "-filter_complex".into(),
            filter.into(),
            "-c:v".into(),
            config.video.codec.clone().into(),
            "-pix_fmt".into(),
            config.video.pixel_format.clone().into(),
            params.output.clone().into_os_string(),
        ];
        Self {
            program: config.tools.ffmpeg.clone(),
            args,
            output: params.output.clone(),
        }
    }

    /// Arguments as UTF-8 (lossy), convenient for assertions and display.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_quote(&self.program))?;
        for arg in self.args_lossy() {
            write!(f, " {}", shell_quote(&arg))?;
        }
        Ok(())
    }
}

/// Quote `arg` for a POSIX shell only when it contains characters the shell
/// would interpret.
fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | ',' | '=' | '+')
        });
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
