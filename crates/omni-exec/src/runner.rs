//! Blocking child-process execution

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::error::{ExecError, Result};

/// A fully described child-process call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// Variables set on top of the inherited environment
    pub envs: Vec<(OsString, OsString)>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            envs: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.envs
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Program name for messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Program and arguments as one shell-like line, for logs and messages.
    pub fn command_line(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit {
    code: Option<i32>,
}

impl Exit {
    /// Child exited with `code`.
    pub fn code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Child was terminated without an exit code (e.g. by a signal).
    pub fn terminated() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn raw_code(&self) -> Option<i32> {
        self.code
    }

    /// Exit code to propagate; a terminated child maps to 1.
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }
}

impl From<ExitStatus> for Exit {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs invocations to completion.
///
/// Implementations must report a missing executable as
/// [`ExecError::NotFound`] so callers can fall back to another candidate.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<Exit>;
}

/// Spawns real processes with inherited standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<Exit> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .envs(invocation.envs.iter().map(|(k, v)| (k, v)));
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }

        debug!(command = %invocation.command_line(), "spawning");

        let status = cmd.status().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExecError::NotFound {
                    program: invocation.program_name(),
                }
            } else {
                ExecError::Spawn {
                    program: invocation.program_name(),
                    source: e,
                }
            }
        })?;

        let exit = Exit::from(status);
        debug!(command = %invocation.command_line(), code = ?exit.raw_code(), "finished");
        Ok(exit)
    }
}
