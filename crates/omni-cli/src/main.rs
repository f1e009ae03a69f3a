//! omni-skill CLI
//!
//! Provisions AI assistant skill bundles into a project (`init`, `update`)
//! and forwards every other command to the skill creator module.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use std::ffi::OsString;

use colored::Colorize;
use omni_exec::SystemRunner;

use context::Settings;
use error::Result;

fn main() {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            if let Some(help) = e.help() {
                eprintln!();
                eprint!("{help}");
            }
            e.exit_code()
        }
    };

    std::process::exit(code);
}

fn run(args: Vec<OsString>) -> Result<i32> {
    let mode = cli::parse(args)?;
    logging::init(mode.verbose());

    let settings = Settings::from_env()?;
    commands::execute(mode, &settings, &SystemRunner)
}
