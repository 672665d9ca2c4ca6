//! The driver: every resolution × every palette color.
//!
//! Resolutions are processed in input order; within a resolution, colors in
//! palette order; within a color, image → video → transition. A transition
//! therefore runs before the next color's still exists on a first run; the
//! orchestrator warns about that and issues it anyway. Everything is
//! sequential and each encoder blocks until it exits.
//!
//! ## Output Structure
//!
//! ```text
//! <output-dir>/
//! ├── 1920x1080/
//! │   ├── 1920x1080-red.jpg
//! │   ├── 1920x1080-red.mov
//! │   ├── 1920x1080-red-to-blue.mov
//! │   ├── 1920x1080-blue.jpg
//! │   ├── 1920x1080-blue.mov
//! │   └── 1920x1080-blue-to-red.mov
//! └── 1280x720/
//!     └── ...
//! ```
//!
//! In live mode each resolution directory is created before its first
//! artifact. Dry-run mode touches nothing on disk.

use crate::build::{ArtifactOutcome, ArtifactReport, BuildReport, Orchestrator};
use crate::config::EncoderConfig;
use crate::encoding::{CommandRunner, ProcessRunner, RunMode};
use crate::inputs::Inputs;
use crate::naming;
use crate::plan::plan_resolution;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Everything about a run that is not the palette or resolution list.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub mode: RunMode,
    pub encoder: EncoderConfig,
}

/// Generate all artifacts by spawning the real encoders.
pub fn generate(inputs: &Inputs, options: &GenerateOptions) -> BuildReport {
    let runner = ProcessRunner::new(options.mode);
    generate_with_runner(&runner, inputs, options)
}

/// Generate all artifacts using a specific runner (allows testing with mock).
pub fn generate_with_runner(
    runner: &impl CommandRunner,
    inputs: &Inputs,
    options: &GenerateOptions,
) -> BuildReport {
    let orchestrator = Orchestrator::new(runner, options.mode);
    let mut report = BuildReport::default();

    for resolution in &inputs.resolutions {
        let label = resolution.label();
        let planned = plan_resolution(
            &inputs.colors,
            *resolution,
            &options.output_dir,
            &options.encoder,
        );
        debug!(resolution = %label, colors = planned.len(), "processing resolution");

        if planned.is_empty() {
            continue;
        }

        if !options.mode.dry_run {
            let dir = naming::resolution_dir(&options.output_dir, &label);
            if let Err(err) = std::fs::create_dir_all(&dir) {
                warn!(dir = %dir.display(), error = %err, "cannot create resolution directory");
                let reason = format!("cannot create {}: {err}", dir.display());
                report.artifacts.extend(planned.iter().flat_map(|color| {
                    color.in_build_order().map(|spec| ArtifactReport {
                        kind: spec.kind,
                        target: spec.target.clone(),
                        outcome: ArtifactOutcome::Failed(reason.clone()),
                    })
                }));
                continue;
            }
        }

        report
            .artifacts
            .extend(orchestrator.build_resolution(&planned));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::runner::tests::MockRunner;
    use crate::plan::ArtifactKind;
    use crate::test_helpers::{file_count, palette, touch};
    use crate::types::{Color, Resolution};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn red_blue_hd() -> Inputs {
        Inputs::new(
            vec![Color::new("red", "#FF0000"), Color::new("blue", "#0000FF")],
            vec![Resolution::new(1920, 1080)],
        )
    }

    fn options(output_dir: &Path, dry_run: bool) -> GenerateOptions {
        GenerateOptions {
            output_dir: output_dir.to_path_buf(),
            mode: RunMode {
                dry_run,
                verbose: false,
            },
            encoder: EncoderConfig::default(),
        }
    }

    fn relative(paths: Vec<PathBuf>, root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn red_blue_scenario_issues_six_commands() {
        let tmp = TempDir::new().unwrap();
        let runner = MockRunner::materializing();

        let report = generate_with_runner(&runner, &red_blue_hd(), &options(tmp.path(), false));

        assert_eq!(report.built(), 6);
        assert_eq!(
            relative(runner.outputs(), tmp.path()),
            vec![
                "1920x1080/1920x1080-red.jpg",
                "1920x1080/1920x1080-red.mov",
                "1920x1080/1920x1080-red-to-blue.mov",
                "1920x1080/1920x1080-blue.jpg",
                "1920x1080/1920x1080-blue.mov",
                "1920x1080/1920x1080-blue-to-red.mov",
            ]
        );
    }

    #[test]
    fn red_blue_scenario_keeps_per_color_order() {
        let tmp = TempDir::new().unwrap();
        let runner = MockRunner::materializing();
        let report = generate_with_runner(&runner, &red_blue_hd(), &options(tmp.path(), false));

        for color in ["red", "blue"] {
            let kinds: Vec<ArtifactKind> = report
                .artifacts
                .iter()
                .filter(|a| {
                    let name = a.target.file_name().unwrap().to_string_lossy();
                    name.starts_with(&format!("1920x1080-{color}."))
                        || name.starts_with(&format!("1920x1080-{color}-to-"))
                })
                .map(|a| a.kind)
                .collect();
            assert_eq!(
                kinds,
                vec![
                    ArtifactKind::Image,
                    ArtifactKind::Video,
                    ArtifactKind::Transition
                ],
                "order for {color}"
            );
        }
    }

    #[test]
    fn second_run_issues_no_commands() {
        let tmp = TempDir::new().unwrap();
        let first = MockRunner::materializing();
        generate_with_runner(&first, &red_blue_hd(), &options(tmp.path(), false));

        let second = MockRunner::materializing();
        let report = generate_with_runner(&second, &red_blue_hd(), &options(tmp.path(), false));

        assert!(second.get_commands().is_empty());
        assert_eq!(report.skipped(), 6);
    }

    #[test]
    fn existing_image_is_skipped_and_still_referenced() {
        let tmp = TempDir::new().unwrap();
        let red_jpg = tmp.path().join("1920x1080/1920x1080-red.jpg");
        touch(&red_jpg);

        let runner = MockRunner::materializing();
        let report = generate_with_runner(&runner, &red_blue_hd(), &options(tmp.path(), false));

        assert_eq!(report.artifacts[0].outcome, ArtifactOutcome::Skipped);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.built(), 5);

        let commands = runner.get_commands();
        let red = red_jpg.to_string_lossy().into_owned();
        let reads_red = |name: &str| {
            commands
                .iter()
                .find(|c| c.output.file_name().is_some_and(|f| f == name))
                .is_some_and(|c| c.args_lossy().contains(&red))
        };
        assert!(reads_red("1920x1080-red.mov"));
        assert!(reads_red("1920x1080-red-to-blue.mov"));
        assert!(reads_red("1920x1080-blue-to-red.mov"));
        assert!(
            !commands
                .iter()
                .any(|c| c.output == red_jpg),
            "existing image must not be rebuilt"
        );
    }

    #[test]
    fn empty_palette_issues_nothing() {
        let tmp = TempDir::new().unwrap();
        let inputs = Inputs::new(Vec::new(), vec![Resolution::new(1920, 1080)]);
        let runner = MockRunner::new();

        let report = generate_with_runner(&runner, &inputs, &options(tmp.path(), false));

        assert!(report.artifacts.is_empty());
        assert!(runner.get_commands().is_empty());
        assert!(!tmp.path().join("1920x1080").exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let runner = MockRunner::new();

        generate_with_runner(&runner, &red_blue_hd(), &options(tmp.path(), true));

        assert_eq!(file_count(tmp.path()), 0);
        assert!(!tmp.path().join("1920x1080").exists());
    }

    #[test]
    fn dry_run_enumerates_same_commands_as_live() {
        let inputs = Inputs::new(
            palette(&["red", "green", "blue"]),
            vec![Resolution::new(1920, 1080), Resolution::new(640, 480)],
        );

        let dry_dir = TempDir::new().unwrap();
        let dry = MockRunner::new();
        generate_with_runner(&dry, &inputs, &options(dry_dir.path(), true));

        let live_dir = TempDir::new().unwrap();
        let live = MockRunner::materializing();
        generate_with_runner(&live, &inputs, &options(live_dir.path(), false));

        let dry_commands = dry.get_commands();
        let live_commands = live.get_commands();
        assert_eq!(dry_commands.len(), 18);
        assert_eq!(dry_commands.len(), live_commands.len());
        assert_eq!(
            relative(dry.outputs(), dry_dir.path()),
            relative(live.outputs(), live_dir.path())
        );
    }

    #[test]
    fn resolutions_are_processed_in_input_order() {
        let tmp = TempDir::new().unwrap();
        let inputs = Inputs::new(
            palette(&["red"]),
            vec![Resolution::new(640, 480), Resolution::new(1920, 1080)],
        );
        let runner = MockRunner::materializing();

        let report = generate_with_runner(&runner, &inputs, &options(tmp.path(), false));

        let dirs: Vec<String> = report
            .artifacts
            .iter()
            .map(|a| {
                a.target
                    .parent()
                    .and_then(|p| p.file_name())
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(
            dirs,
            vec!["640x480", "640x480", "640x480", "1920x1080", "1920x1080", "1920x1080"]
        );
    }

    #[test]
    fn live_mode_creates_resolution_directory() {
        let tmp = TempDir::new().unwrap();
        let output_dir = tmp.path().join("nested/out");
        let runner = MockRunner::materializing();

        generate_with_runner(&runner, &red_blue_hd(), &options(&output_dir, false));

        assert!(output_dir.join("1920x1080").is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn unwritable_output_fails_resolution_without_commands() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the output directory should be.
        let output_dir = tmp.path().join("blocked");
        fs::write(&output_dir, b"").unwrap();
        let runner = MockRunner::materializing();

        let report = generate_with_runner(&runner, &red_blue_hd(), &options(&output_dir, false));

        assert_eq!(report.failed(), 6);
        assert!(runner.get_commands().is_empty());
    }
}
