//! Update command implementation
//!
//! Replays the selection saved by `init`: upgrades the package, re-syncs
//! every pair and refreshes the companion tool's output.

use colored::Colorize;
use omni_core::StateStore;
use omni_exec::companion::self_update;
use omni_exec::{CompanionMode, ProcessRunner};
use tracing::{debug, warn};

use crate::context::{SKIP_SELF_UPDATE_ENV, Settings};
use crate::error::Result;

/// Run the update command
///
/// The saved selection is validated before anything else runs, so a
/// missing or corrupt state file never triggers an upgrade.
pub fn run_update(settings: &Settings, runner: &dyn ProcessRunner) -> Result<()> {
    let selection = StateStore::in_dir(&settings.cwd).load()?;
    println!("{} Targets: {}", "=>".blue().bold(), selection.to_string().yellow());

    if settings.skip_self_update {
        debug!("self-upgrade skipped by {}", SKIP_SELF_UPDATE_ENV);
    } else {
        upgrade_package(settings, runner);
    }

    super::provision(settings, &selection, "Re-initializing")?;
    super::run_companion(settings, runner, &selection, CompanionMode::Update);

    println!("{} Done! omni-skill updated.", "OK".green().bold());
    Ok(())
}

/// Best-effort self-upgrade; failures only warn.
fn upgrade_package(settings: &Settings, runner: &dyn ProcessRunner) {
    println!("{} Updating omni-skill package...", "=>".blue().bold());

    match self_update(runner, &settings.cwd) {
        Ok(exit) if exit.success() => {
            println!("{} Package updated.", "OK".green().bold());
        }
        Ok(exit) => {
            warn!(code = exit.exit_code(), "package upgrade failed, continuing");
        }
        Err(e) => {
            warn!(error = %e, "package upgrade could not run, continuing");
        }
    }
}
