//! Build orchestration: the skip/build decision for each planned artifact.
//!
//! # Decision
//!
//! The only input to the decision is whether the target path exists at the
//! moment it is checked. Contents, timestamps and sizes are never consulted,
//! so deleting a file is the way to force it to be rebuilt. Re-running over a
//! complete output directory issues no commands at all.
//!
//! ```text
//! target exists?  ── yes ──▶ Skipped
//!       │
//!       no
//!       ▼
//! input failed earlier in this pass?  ── yes, live mode ──▶ Blocked (warning, no command)
//!       │
//!       no (or dry run)
//!       ▼
//! runner.run(command) ──▶ Built | DryRun | Failed
//! ```
//!
//! # Dependencies
//!
//! Videos and transitions read stills. [`Orchestrator::build_resolution`]
//! walks a resolution strictly in palette order, image → video → transition
//! per color, so a color's own still is always decided before anything that
//! reads it. A transition also reads the *next* color's still, which that
//! order reaches only later (except for the last color, whose successor
//! wraps around to the first).
//!
//! In live mode the inputs are checked before each command:
//!
//! - an input whose own build already failed or was blocked in this pass
//!   blocks the artifact (warning, no command);
//! - any other missing input, typically the next color's still, is logged as
//!   a warning and the command is issued anyway.
//!
//! In dry-run mode nothing is ever written, so missing inputs are expected
//! and the check is skipped; dry-run output therefore lists exactly the
//! commands a live run from the same starting state would execute.
//!
//! Failures never abort the batch. Each artifact's fate is recorded in an
//! [`ArtifactReport`] and processing moves on.

use crate::encoding::{CommandRunner, RunMode, RunOutcome};
use crate::output;
use crate::plan::{ArtifactKind, ArtifactSpec, ColorArtifacts};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::warn;

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactOutcome {
    /// Target already existed; nothing was run.
    Skipped,
    /// The build command ran successfully.
    Built,
    /// The build command was printed but not run.
    DryRun,
    /// The build command (or its preparation) failed.
    Failed(String),
    /// An input failed to build earlier in the same pass; no command was issued.
    Blocked(Vec<PathBuf>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    pub target: PathBuf,
    pub outcome: ArtifactOutcome,
}

/// Outcomes of a whole run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub artifacts: Vec<ArtifactReport>,
}

impl BuildReport {
    pub fn count(&self, pred: impl Fn(&ArtifactOutcome) -> bool) -> usize {
        self.artifacts.iter().filter(|a| pred(&a.outcome)).count()
    }

    pub fn built(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::Built))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::Skipped))
    }

    pub fn dry_run(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::DryRun))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::Failed(_)))
    }

    pub fn blocked(&self) -> usize {
        self.count(|o| matches!(o, ArtifactOutcome::Blocked(_)))
    }
}

/// Decides and dispatches builds for planned artifacts.
pub struct Orchestrator<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    mode: RunMode,
}

impl<'a, R: CommandRunner + ?Sized> Orchestrator<'a, R> {
    pub fn new(runner: &'a R, mode: RunMode) -> Self {
        Self { runner, mode }
    }

    /// Check and, if needed, build one artifact.
    pub fn build_artifact(&self, spec: &ArtifactSpec) -> ArtifactReport {
        self.report(spec, &HashSet::new())
    }

    /// Check and build every artifact of one resolution, in palette order.
    pub fn build_resolution(&self, planned: &[ColorArtifacts]) -> Vec<ArtifactReport> {
        let mut unavailable = HashSet::new();
        let mut reports = Vec::new();
        for spec in planned.iter().flat_map(|color| color.in_build_order()) {
            let report = self.report(spec, &unavailable);
            if matches!(
                report.outcome,
                ArtifactOutcome::Failed(_) | ArtifactOutcome::Blocked(_)
            ) {
                unavailable.insert(spec.target.clone());
            }
            reports.push(report);
        }
        reports
    }

    fn report(&self, spec: &ArtifactSpec, unavailable: &HashSet<PathBuf>) -> ArtifactReport {
        ArtifactReport {
            kind: spec.kind,
            target: spec.target.clone(),
            outcome: self.decide_and_build(spec, unavailable),
        }
    }

    /// `unavailable` holds targets that failed or were blocked earlier in
    /// the same pass.
    fn decide_and_build(
        &self,
        spec: &ArtifactSpec,
        unavailable: &HashSet<PathBuf>,
    ) -> ArtifactOutcome {
        if spec.target.exists() {
            if self.mode.verbose {
                println!("{}", output::format_skip(&spec.target));
            }
            return ArtifactOutcome::Skipped;
        }

        if !self.mode.dry_run {
            let (failed, pending): (Vec<PathBuf>, Vec<PathBuf>) = spec
                .inputs
                .iter()
                .filter(|input| !input.exists())
                .cloned()
                .partition(|input| unavailable.contains(input));
            if !failed.is_empty() {
                warn!(
                    artifact = %spec.target.display(),
                    failed = ?failed,
                    "not building {} because its inputs failed to build", spec.kind
                );
                return ArtifactOutcome::Blocked(failed);
            }
            if !pending.is_empty() {
                warn!(
                    artifact = %spec.target.display(),
                    missing = ?pending,
                    "building {} before its inputs exist", spec.kind
                );
            }
        }

        println!("{}", output::format_creating(&spec.description));
        match self.runner.run(&spec.command) {
            RunOutcome::Succeeded => ArtifactOutcome::Built,
            RunOutcome::DryRun => ArtifactOutcome::DryRun,
            RunOutcome::FailedToStart(err) => {
                ArtifactOutcome::Failed(format!("failed to start: {err}"))
            }
            RunOutcome::Failed(Some(code)) => {
                ArtifactOutcome::Failed(format!("exited with status {code}"))
            }
            RunOutcome::Failed(None) => {
                ArtifactOutcome::Failed("terminated by signal".to_string())
            }
        }
    }
}
