//! CLI argument parsing
//!
//! Only `init`, `update` and `install` are parsed here. Any other first
//! token, and an empty argument list, is forwarded unchanged to the skill
//! creator module, so top-level flags like `--help` belong to the delegate.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Command, CommandFactory, FromArgMatches, Parser};
use omni_core::CLI_NAME;
use omni_core::targets;

use crate::error::{CliError, Result};

/// Subcommand provisioning a project.
pub const INIT: &str = "init";
/// Subcommand re-provisioning from saved state.
pub const UPDATE: &str = "update";
/// Subcommand copying user skills into the project.
pub const INSTALL: &str = "install";

/// Initialize skills for target AI assistants
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "init", bin_name = "omni-skill init")]
pub struct InitArgs {
    /// Target AI assistant (repeatable)
    #[arg(long = "ai", value_name = "target")]
    pub ai: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Update the package and re-sync the targets saved by init
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "update", bin_name = "omni-skill update")]
pub struct UpdateArgs {}

/// Install a skill directory, or every skill in a directory, into skills/
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "install", bin_name = "omni-skill install")]
pub struct InstallArgs {
    /// Skill directory or directory of skills
    pub path: PathBuf,
}

/// What the process should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Init(InitArgs),
    Update(UpdateArgs),
    Install(InstallArgs),
    /// Forward these arguments to the skill creator module
    Delegate(Vec<OsString>),
    /// Print this help text and exit successfully
    Help(String),
}

impl Mode {
    pub fn verbose(&self) -> bool {
        matches!(self, Self::Init(args) if args.verbose)
    }
}

/// Decide the mode from the raw arguments (without the binary name).
pub fn parse(args: Vec<OsString>) -> Result<Mode> {
    match args.first().and_then(|first| first.to_str()) {
        Some(INIT) => parse_subcommand(init_command(), &args, Mode::Init, init_help()),
        Some(UPDATE) => {
            let command = UpdateArgs::command();
            let usage = command.clone().render_usage().to_string();
            parse_subcommand(command, &args, Mode::Update, usage)
        }
        Some(INSTALL) => {
            let command = InstallArgs::command();
            let usage = command.clone().render_usage().to_string();
            parse_subcommand(command, &args, Mode::Install, usage)
        }
        _ => Ok(Mode::Delegate(args)),
    }
}

fn parse_subcommand<T: FromArgMatches>(
    command: Command,
    args: &[OsString],
    wrap: fn(T) -> Mode,
    help: String,
) -> Result<Mode> {
    let parsed = command
        .try_get_matches_from(args)
        .and_then(|matches| T::from_arg_matches(&matches));

    match parsed {
        Ok(value) => Ok(wrap(value)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Mode::Help(e.to_string()))
        }
        Err(e) => Err(CliError::Usage {
            message: clap_message(&e),
            help,
        }),
    }
}

/// First line of a clap error without its `error: ` prefix.
fn clap_message(e: &clap::Error) -> String {
    let text = e.to_string();
    let first = text.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

fn init_command() -> Command {
    InitArgs::command().override_help(init_help())
}

/// Usage text for `init`, listing every accepted target.
pub fn init_help() -> String {
    let supported = targets::supported_targets().join("|");
    format!(
        "Usage: {CLI_NAME} init --ai <target> [--ai <target>]... [-v]
  <target>: {supported}

Options:
      --ai <target>  Target AI assistant (repeatable)
  -v, --verbose      Enable debug logging
  -h, --help         Print help

Examples:
  {CLI_NAME} init --ai claude
  {CLI_NAME} init --ai cursor --ai windsurf
  {CLI_NAME} init --ai all
"
    )
}
