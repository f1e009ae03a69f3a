//! Command implementations for omni-cli

pub mod delegate;
pub mod init;
pub mod install;
pub mod update;

pub use delegate::run_delegate;
pub use init::run_init;
pub use install::run_install;
pub use update::run_update;

use colored::Colorize;
use omni_core::{PairStatus, ProvisionReport, Provisioner, Selection};
use omni_exec::{Companion, CompanionMode, ProcessRunner};
use tracing::{debug, warn};

use crate::cli::Mode;
use crate::context::{SKIP_COMPANION_ENV, Settings};
use crate::error::Result;

/// Run a parsed mode and return the process exit code.
pub fn execute(mode: Mode, settings: &Settings, runner: &dyn ProcessRunner) -> Result<i32> {
    match mode {
        Mode::Init(args) => run_init(settings, runner, &args.ai).map(|()| 0),
        Mode::Update(_) => run_update(settings, runner).map(|()| 0),
        Mode::Install(args) => run_install(settings, runner, &args.path).map(|()| 0),
        Mode::Delegate(args) => run_delegate(settings, runner, &args),
        Mode::Help(text) => {
            print!("{text}");
            Ok(0)
        }
    }
}

/// Sync every pair for `selection` and stamp versions, printing progress
/// under `heading` (e.g. "Initializing").
fn provision(settings: &Settings, selection: &Selection, heading: &str) -> Result<ProvisionReport> {
    println!(
        "{} {} skills in: {}",
        "=>".blue().bold(),
        heading,
        settings.cwd.display()
    );

    let package = settings.package();
    let report = Provisioner::new(&package, &settings.cwd).run(selection)?;
    print_report(&report);
    Ok(report)
}

fn print_report(report: &ProvisionReport) {
    for entry in &report.pairs {
        match entry.status {
            PairStatus::Synced { .. } => {
                println!("   Syncing {} (replace items)", entry.pair.dest.cyan());
            }
            status => {
                let reason = status.skip_reason().unwrap_or_default();
                println!("   Skipping {} ({})", entry.pair.dest.dimmed(), reason);
            }
        }
    }
    println!(
        "   Version {} stamped in {} director{}",
        report.version.yellow(),
        report.stamps.len(),
        if report.stamps.len() == 1 { "y" } else { "ies" }
    );
}

/// Hand each selected target to the companion tool.
///
/// Failures never abort the command: a missing executable prints a hint and
/// stops the step, a failing target is reported and the next one runs.
fn run_companion(
    settings: &Settings,
    runner: &dyn ProcessRunner,
    selection: &Selection,
    mode: CompanionMode,
) {
    if settings.skip_companion {
        debug!("companion step skipped by {}", SKIP_COMPANION_ENV);
        return;
    }

    let companion = Companion::new(runner, &settings.companion, &settings.cwd);
    let program = settings.companion.to_string_lossy();

    for target in selection.iter() {
        let result = match mode {
            CompanionMode::Init => companion.run(CompanionMode::Init, target),
            CompanionMode::Update => companion.update_or_init(target),
        };

        match result {
            Ok(exit) if exit.success() => {}
            Ok(exit) => {
                warn!(ai = target, %mode, code = exit.exit_code(), "companion tool failed");
            }
            Err(e) if e.is_not_found() => {
                warn!(program = %program, "companion tool not found");
                eprintln!(
                    "{} {} not found; install it or set {}=1 to skip this step",
                    "hint:".yellow().bold(),
                    program,
                    SKIP_COMPANION_ENV
                );
                return;
            }
            Err(e) => warn!(ai = target, error = %e, "companion tool could not run"),
        }
    }
}
