//! Init command implementation
//!
//! Provisions the selected targets into the working directory and records
//! the selection for later `update` runs.

use colored::Colorize;
use omni_core::StateStore;
use omni_exec::{CompanionMode, ProcessRunner};

use crate::context::Settings;
use crate::error::{CliError, Result};

/// Run the init command
pub fn run_init(settings: &Settings, runner: &dyn ProcessRunner, ai: &[String]) -> Result<()> {
    if ai.is_empty() {
        return Err(CliError::init_usage("init requires at least one --ai <target>"));
    }

    let selection = omni_core::resolve(ai)?;
    println!("{} Targets: {}", "=>".blue().bold(), selection.to_string().yellow());

    super::provision(settings, &selection, "Initializing")?;
    StateStore::in_dir(&settings.cwd).save(&selection);
    super::run_companion(settings, runner, &selection, CompanionMode::Init);

    println!("{} Done! omni-skill initialized.", "OK".green().bold());
    Ok(())
}
