//! Artifact planning: which files one resolution needs.
//!
//! For every palette color the planner produces a triple of artifacts, in
//! build order:
//!
//! 1. **Image**: the solid-color still.
//! 2. **Video**: a looping video of that still (depends on 1).
//! 3. **Transition**: a cross-fade into the *next* color's still (depends on
//!    1 and on the next color's image).
//!
//! "Next" wraps around, so the last color fades back into the first and the
//! palette closes into a cycle. A one-color palette transitions into itself;
//! an empty palette plans nothing.
//!
//! Planning is pure: no filesystem access, no hidden state. Identical inputs
//! always give identical paths and commands, which is what lets the
//! orchestrator decide skip/build purely from file existence.

use crate::config::EncoderConfig;
use crate::encoding::{BuildCommand, ImageParams, TransitionParams, VideoParams};
use crate::naming;
use crate::types::{Color, Resolution};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Image,
    Video,
    Transition,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Transition => "transition",
        })
    }
}

/// One file to produce, with everything needed to decide and build it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    pub kind: ArtifactKind,
    pub target: PathBuf,
    /// Files the build command reads. Empty for images.
    pub inputs: Vec<PathBuf>,
    /// Human-readable summary, e.g. `red image with resolution of 1920x1080`.
    pub description: String,
    pub command: BuildCommand,
}

/// The three artifacts of one palette color at one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorArtifacts {
    pub color: Color,
    pub next: Color,
    pub image: ArtifactSpec,
    pub video: ArtifactSpec,
    pub transition: ArtifactSpec,
}

impl ColorArtifacts {
    /// The artifacts in build order: image, video, transition.
    pub fn in_build_order(&self) -> [&ArtifactSpec; 3] {
        [&self.image, &self.video, &self.transition]
    }
}

/// Index of the color that follows `index` in a palette of `len` colors.
///
/// Returns `None` for an empty palette or an out-of-range index.
pub fn successor_index(index: usize, len: usize) -> Option<usize> {
    (index < len).then(|| (index + 1) % len)
}

/// The color that follows `colors[index]`, wrapping at the end.
pub fn successor(colors: &[Color], index: usize) -> Option<&Color> {
    successor_index(index, colors.len()).map(|i| &colors[i])
}

/// Plan every artifact for one resolution, in palette order.
pub fn plan_resolution(
    colors: &[Color],
    resolution: Resolution,
    output_dir: &Path,
    config: &EncoderConfig,
) -> Vec<ColorArtifacts> {
    let label = resolution.label();
    let dir = naming::resolution_dir(output_dir, &label);
    let image_path = |color: &Color| dir.join(naming::image_file_name(&label, &color.name));

    colors
        .iter()
        .enumerate()
        .filter_map(|(index, color)| {
            let next = successor(colors, index)?;
            let image_target = image_path(color);
            let next_image = image_path(next);
            let video_target = dir.join(naming::video_file_name(&label, &color.name));
            let transition_name = naming::transition_file_name(&label, &color.name, &next.name);
            let transition_target = dir.join(&transition_name);

            let image = ArtifactSpec {
                kind: ArtifactKind::Image,
                inputs: Vec::new(),
                description: format!("{} image with resolution of {}", color.name, label),
                command: BuildCommand::image(
                    &ImageParams {
                        output: image_target.clone(),
                        resolution,
                        background: color.hex_code(),
                    },
                    config,
                ),
                target: image_target.clone(),
            };

            let video = ArtifactSpec {
                kind: ArtifactKind::Video,
                inputs: vec![image_target.clone()],
                description: format!(
                    "{} video with resolution of {} from {}",
                    color.name,
                    label,
                    image_target.display()
                ),
                command: BuildCommand::video(
                    &VideoParams {
                        image: image_target.clone(),
                        output: video_target.clone(),
                    },
                    config,
                ),
                target: video_target,
            };

            let transition = ArtifactSpec {
                kind: ArtifactKind::Transition,
                inputs: vec![image_target.clone(), next_image.clone()],
                description: format!(
                    "{} transition video with resolution of {}",
                    transition_name, label
                ),
                command: BuildCommand::transition(
                    &TransitionParams {
                        from_image: image_target,
                        to_image: next_image,
                        output: transition_target.clone(),
                    },
                    config,
                ),
                target: transition_target,
            };

            Some(ColorArtifacts {
                color: color.clone(),
                next: next.clone(),
                image,
                video,
                transition,
            })
        })
        .collect()
}
