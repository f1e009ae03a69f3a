//! Install command implementation
//!
//! Copies user-authored skills into `skills/` and asks the skill creator to
//! generate the per-target outputs for each one.

use std::ffi::OsString;
use std::path::Path;

use colored::Colorize;
use omni_core::{InstallStatus, InstalledSkill, discover_skills, install_skill};
use omni_exec::ProcessRunner;
use omni_exec::interpreter::{DELEGATE_MODULE, PYTHON_ENV};
use tracing::warn;

use crate::context::Settings;
use crate::error::Result;

/// Run the install command
///
/// `path` is resolved against the working directory. Copy failures abort;
/// generation failures only warn.
pub fn run_install(settings: &Settings, runner: &dyn ProcessRunner, path: &Path) -> Result<()> {
    let skills = discover_skills(&settings.cwd.join(path))?;

    let mut installed = Vec::with_capacity(skills.len());
    for skill in &skills {
        let result = install_skill(skill, &settings.cwd)?;
        match result.status {
            InstallStatus::Copied => {
                println!(
                    "{} Installed {} -> {}",
                    "=>".blue().bold(),
                    result.name.cyan(),
                    result.dest.display()
                );
            }
            InstallStatus::SkippedSameLocation => {
                println!("   Skipping {} (already in place)", result.name.dimmed());
            }
        }
        installed.push(result);
    }

    generate(settings, runner, &installed);

    println!(
        "{} Done! {} skill{} installed.",
        "OK".green().bold(),
        installed.len(),
        if installed.len() == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Regenerate outputs for each installed skill.
///
/// A missing interpreter prints a hint and stops the step.
fn generate(settings: &Settings, runner: &dyn ProcessRunner, installed: &[InstalledSkill]) {
    let interpreter = super::delegate::skill_creator(settings, runner);

    for skill in installed {
        let args = [
            OsString::from("--repo-root"),
            settings.cwd.clone().into_os_string(),
            OsString::from("generate"),
            skill.spec.clone().into_os_string(),
        ];

        match interpreter.run_module(DELEGATE_MODULE, &args) {
            Ok(exit) if exit.success() => {
                println!("   Generated outputs for {}", skill.name.cyan());
            }
            Ok(exit) => {
                warn!(skill = %skill.name, code = exit.exit_code(), "generator failed");
            }
            Err(e) if e.is_not_found() => {
                warn!(error = %e, "generator not run");
                eprintln!(
                    "{} no Python interpreter found; set {} and re-run install to generate outputs",
                    "hint:".yellow().bold(),
                    PYTHON_ENV
                );
                return;
            }
            Err(e) => warn!(skill = %skill.name, error = %e, "generator could not run"),
        }
    }
}
