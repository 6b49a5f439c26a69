//! Release orchestration
//!
//! A release moves through a fixed sequence of phases:
//!
//! ```text
//! Init -> PassCheck -> [BeforeRelease] -> StartRelease -> Execute
//! ```
//!
//! Each phase returns a [Step] naming the next phase or the final [Outcome].
//! Preflight and hook failures surface as `Err` and end the run with status 1.

pub mod plan;

pub use plan::ReleasePlan;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::{compute_next_versions, NextVersionSet};
use crate::error::{ReleaseError, Result};
use crate::hooks::BeforeRelease;
use crate::manifest::PackageManifest;
use crate::preflight::{default_tasks, run_preflight, PreflightTask};
use crate::process::CommandRunner;
use crate::ui::{self, Prompter, ReleaseProgress};

/// Answers collected from the operator for one release attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSession {
    /// Chosen version, e.g. `1.5.0`
    pub version: String,
    /// Operator-supplied release tag, defaults to `v<version>`
    pub tag: String,
}

/// How a release run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Tag pushed, commits pushed, package published
    Published(ReleaseSession),
    /// Pushing the tag failed; nothing was published
    PushFailed(ReleaseSession),
    /// The operator declined the confirmation prompt
    Canceled,
    /// Dry run: commands were listed, not executed
    Rehearsed(ReleaseSession),
}

impl Outcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Published(_) | Outcome::Canceled | Outcome::Rehearsed(_) => 0,
            Outcome::PushFailed(_) => 1,
        }
    }
}

#[derive(Debug)]
enum Phase {
    Init,
    PassCheck,
    BeforeRelease,
    StartRelease,
    Execute(ReleaseSession),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::Init => "init",
            Phase::PassCheck => "pass_check",
            Phase::BeforeRelease => "before_release",
            Phase::StartRelease => "start_release",
            Phase::Execute(_) => "execute",
        }
    }
}

enum Step {
    Next(Phase),
    Done(Outcome),
}

/// Drives one release attempt from preflight to publish.
pub struct ReleaseOrchestrator<R, P> {
    config: Config,
    manifest: PackageManifest,
    next_versions: NextVersionSet,
    runner: R,
    prompter: P,
    preflight: Vec<PreflightTask>,
    before_release: BeforeRelease,
    dry_run: bool,
}

impl<R: CommandRunner, P: Prompter> ReleaseOrchestrator<R, P> {
    /// Creates an orchestrator for the manifest's current version.
    ///
    /// The hook comes from `config.before_release` and the preflight tasks
    /// from [default_tasks]; both can be replaced before [run](Self::run).
    ///
    /// # Errors
    /// * `ReleaseError::InvalidVersionFormat` - if the manifest version is
    ///   malformed. Nothing has been executed at that point.
    pub fn new(config: Config, manifest: PackageManifest, runner: R, prompter: P) -> Result<Self> {
        let next_versions = compute_next_versions(&manifest.version)?;
        let before_release = BeforeRelease::from_command(config.before_release.clone());

        Ok(ReleaseOrchestrator {
            config,
            manifest,
            next_versions,
            runner,
            prompter,
            preflight: default_tasks(),
            before_release,
            dry_run: false,
        })
    }

    pub fn with_before_release(mut self, hook: BeforeRelease) -> Self {
        self.before_release = hook;
        self
    }

    pub fn with_preflight(mut self, tasks: Vec<PreflightTask>) -> Self {
        self.preflight = tasks;
        self
    }

    /// List the release commands instead of running them; the hook is skipped
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn next_versions(&self) -> &NextVersionSet {
        &self.next_versions
    }

    /// Runs every phase until the release reaches a terminal outcome.
    pub fn run(mut self) -> Result<Outcome> {
        let mut phase = Phase::Init;
        loop {
            debug!(phase = phase.name(), "entering phase");
            match self.advance(phase)? {
                Step::Next(next) => phase = next,
                Step::Done(outcome) => {
                    info!(exit_code = outcome.exit_code(), "release finished: {:?}", outcome);
                    return Ok(outcome);
                }
            }
        }
    }

    fn advance(&mut self, phase: Phase) -> Result<Step> {
        match phase {
            Phase::Init => {
                run_preflight(&self.runner, &self.preflight)?;
                Ok(Step::Next(Phase::PassCheck))
            }
            Phase::PassCheck => {
                if self.before_release.is_none() {
                    Ok(Step::Next(Phase::StartRelease))
                } else if self.dry_run {
                    ui::display_warning("Dry run: skipping the before_release hook");
                    Ok(Step::Next(Phase::StartRelease))
                } else {
                    Ok(Step::Next(Phase::BeforeRelease))
                }
            }
            Phase::BeforeRelease => {
                std::mem::take(&mut self.before_release).complete(&self.runner)?;
                Ok(Step::Next(Phase::StartRelease))
            }
            Phase::StartRelease => self.start_release(),
            Phase::Execute(session) => Ok(Step::Done(self.execute(session))),
        }
    }

    fn start_release(&mut self) -> Result<Step> {
        let ready = self.prompter.confirm(&format!(
            "Current version: {}, Please confirm if all ready to release ?",
            self.manifest.version
        ))?;
        if !ready {
            ui::display_info("Canceled release");
            return Ok(Step::Done(Outcome::Canceled));
        }

        let choices = self.next_versions.list();
        let index = self.prompter.select("Choose a release version", &choices)?;
        let version = choices
            .get(index)
            .cloned()
            .ok_or(ReleaseError::InvalidSelection(index))?;

        let tag = self
            .prompter
            .input("Input a release tag", &format!("v{}", version))?;
        ui::validate_release_tag(&tag).map_err(ReleaseError::InvalidReleaseTag)?;

        Ok(Step::Next(Phase::Execute(ReleaseSession { version, tag })))
    }

    /// Runs the release commands in order.
    ///
    /// Only the tag push is checked: the commit, version and changelog steps
    /// are assumed to succeed, and nothing is published unless the tag
    /// reached the remote.
    fn execute(&self, session: ReleaseSession) -> Outcome {
        let plan = ReleasePlan::new(&self.config, &session);

        if self.dry_run {
            ui::display_planned_commands(&plan.commands());
            return Outcome::Rehearsed(session);
        }

        let progress = ReleaseProgress::start(&format!(
            "Start to release \"{} {}\"",
            self.manifest.display_name(),
            session.version
        ));

        progress.info("Create a release commit ...");
        self.run_unchecked(&progress, &plan.stage_all);
        self.run_unchecked(&progress, &plan.build_commit);
        self.run_unchecked(&progress, &plan.bump_manifest);

        progress.info("Update CHANGELOG ...");
        self.run_unchecked(&progress, &plan.changelog);
        self.run_unchecked(&progress, &plan.stage_changelog);
        self.run_unchecked(&progress, &plan.changelog_commit);

        progress.info("Publishing ....");
        self.run_unchecked(&progress, &plan.tag);

        let failure = match self.runner.run(&plan.push_tag) {
            Ok(output) if output.is_success() => None,
            Ok(output) => Some(output.stderr),
            Err(e) => Some(e.to_string()),
        };

        if let Some(detail) = failure {
            progress.fail(&format!(
                "Failed to push tag v{} to {}, please see the error message below.",
                session.version, self.config.remote
            ));
            progress.finish();
            eprintln!("{}", detail.trim_end());
            return Outcome::PushFailed(session);
        }

        progress.succeed(&format!(
            "Released tag v{} to {} successfully",
            session.version, self.config.remote
        ));
        progress.info("Release to the package registry ....");
        self.run_unchecked(&progress, &plan.push_commits);
        self.run_unchecked(&progress, &plan.publish);
        progress.finish();

        ui::display_success("Release finished");
        Outcome::Published(session)
    }

    fn run_unchecked(&self, progress: &ReleaseProgress, command: &str) {
        match self.runner.run(command) {
            Ok(output) if output.is_success() => debug!(command, "release step finished"),
            Ok(output) => progress.suspend(|| {
                warn!(
                    command,
                    code = ?output.code,
                    stderr = %output.stderr.trim(),
                    "release step exited non-zero, continuing"
                )
            }),
            Err(e) => progress.suspend(|| {
                warn!(command, error = %e, "release step could not start, continuing")
            }),
        }
    }
}
