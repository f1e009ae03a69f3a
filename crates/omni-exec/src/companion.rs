//! Companion tool and self-upgrade invocations
//!
//! After provisioning, each selected target is handed to an external
//! companion tool (`<companion> <init|update> --ai <target>`). `update` also
//! upgrades the installed package through `npm` before syncing. Both run in
//! the project directory with inherited streams.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::runner::{Exit, Invocation, ProcessRunner};

/// Environment variable overriding the companion executable.
pub const COMPANION_ENV: &str = "OMNI_SKILL_COMPANION";

/// Companion executable used when [`COMPANION_ENV`] is unset.
pub const DEFAULT_COMPANION: &str = "skill-companion";

/// Package manager used for self-upgrade.
pub const PACKAGE_MANAGER: &str = "npm";

/// Package spec installed by self-upgrade.
pub const SELF_UPDATE_PACKAGE: &str = "omni-skill@latest";

/// Which companion subcommand to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanionMode {
    Init,
    Update,
}

impl CompanionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Update => "update",
        }
    }
}

impl std::fmt::Display for CompanionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs the companion tool for individual targets.
pub struct Companion<'a> {
    runner: &'a dyn ProcessRunner,
    program: OsString,
    cwd: PathBuf,
}

impl<'a> Companion<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, program: impl AsRef<OsStr>, cwd: &Path) -> Self {
        Self {
            runner,
            program: program.as_ref().to_os_string(),
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn invocation(&self, mode: CompanionMode, target: &str) -> Invocation {
        Invocation::new(&self.program)
            .args([mode.as_str(), "--ai", target])
            .current_dir(&self.cwd)
    }

    /// Run `<companion> <mode> --ai <target>`.
    ///
    /// A missing executable surfaces as [`crate::ExecError::NotFound`].
    pub fn run(&self, mode: CompanionMode, target: &str) -> Result<Exit> {
        let invocation = self.invocation(mode, target);
        info!(command = %invocation.command_line(), "running companion");
        self.runner.run(&invocation)
    }

    /// Run update mode and fall back to init mode when update does not
    /// succeed. The fallback's exit is returned.
    pub fn update_or_init(&self, target: &str) -> Result<Exit> {
        let exit = self.run(CompanionMode::Update, target)?;
        if exit.success() {
            return Ok(exit);
        }

        debug!(ai = target, code = ?exit.raw_code(), "companion update failed, retrying init");
        self.run(CompanionMode::Init, target)
    }
}

/// `npm install omni-skill@latest` in `cwd`.
pub fn self_update_invocation(cwd: &Path) -> Invocation {
    Invocation::new(PACKAGE_MANAGER)
        .args(["install", SELF_UPDATE_PACKAGE])
        .current_dir(cwd)
}

/// Run the self-upgrade. Callers decide how to report failures.
pub fn self_update(runner: &dyn ProcessRunner, cwd: &Path) -> Result<Exit> {
    let invocation = self_update_invocation(cwd);
    info!(command = %invocation.command_line(), "upgrading package");
    runner.run(&invocation)
}
