//! External encoder invocations.
//!
//! | Artifact | Tool | Builder |
//! |---|---|---|
//! | **Image** | ImageMagick `convert` (`label:` on a solid background) | [`BuildCommand::image`] |
//! | **Video** | `ffmpeg` (single still, low frame rate, H.264) | [`BuildCommand::video`] |
//! | **Transition** | `ffmpeg` (`xfade` between two looped stills) | [`BuildCommand::transition`] |
//!
//! The module is split into:
//! - **Parameters**: what each artifact needs, independent of any tool
//! - **Command**: typed argument vectors built from parameters and [`EncoderConfig`](crate::config::EncoderConfig)
//! - **Runner**: [`CommandRunner`] trait + [`ProcessRunner`]

pub mod command;
mod params;
pub mod runner;

pub use command::BuildCommand;
pub use params::{ImageParams, TransitionParams, VideoParams};
pub use runner::{CommandRunner, ProcessRunner, RunMode, RunOutcome};
