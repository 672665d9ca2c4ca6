//! # swatchgen
//!
//! Generates a matrix of placeholder media: for every color of a palette and
//! every target resolution, a solid-color still, a looping video of that
//! still, and a cross-fade into the next color. The encoders themselves are
//! external (ImageMagick `convert` and `ffmpeg`); this crate decides what to
//! build, in which order, and whether anything needs building at all.
//!
//! # Architecture: Plan → Decide → Run
//!
//! ```text
//! 1. Plan     colors × resolution  →  ArtifactSpec triples   (pure)
//! 2. Decide   ArtifactSpec         →  skip | build           (file existence)
//! 3. Run      BuildCommand         →  encoder process        (or DRY RUN line)
//! ```
//!
//! - **Determinism**: names depend only on the resolution label and color
//!   names, so every run plans exactly the same paths.
//! - **Idempotence**: an artifact is built only when its target is missing.
//!   A second run over a complete directory issues no commands.
//! - **Testability**: planning and command construction are pure data; the
//!   [`CommandRunner`](encoding::CommandRunner) trait lets tests record
//!   commands instead of spawning encoders.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `Color`, `Resolution`, `ResolutionLabel` |
//! | [`inputs`] | YAML loading of the palette and resolution lists |
//! | [`config`] | Optional TOML encoder settings with stock defaults |
//! | [`naming`] | File and directory names of every artifact |
//! | [`encoding`] | Typed encoder commands and the runner that executes them |
//! | [`plan`] | Per-resolution artifact triples with cyclic next-color pairing |
//! | [`build`] | Skip/build decision and dispatch per artifact |
//! | [`generate`] | Driver over all resolutions |
//! | [`output`] | User-facing progress line formatting |
//!
//! # Design Decisions
//!
//! ## Existence Is the Only Cache Key
//!
//! There is no manifest and no hashing. If the file is there, it is done.
//! Deleting a file forces just that artifact to be rebuilt.
//!
//! ## Argument Vectors, Not Shell Strings
//!
//! Encoders are spawned directly with an argument list. Color names and paths
//! are never interpreted by a shell, and the three command kinds can be
//! asserted on as plain data.
//!
//! ## Best Effort
//!
//! A failing encoder is logged and the batch continues. Dependents of a
//! failed still are not attempted in the same run; re-running picks up
//! whatever is still missing.

pub mod build;
pub mod config;
pub mod encoding;
pub mod generate;
pub mod inputs;
pub mod naming;
pub mod output;
pub mod plan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
