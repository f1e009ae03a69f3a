//! Interpreter discovery and module delegation
//!
//! The delegated CLI is a Python module shipped under the package's `src/`
//! directory. Candidates are tried in order: the explicit override first,
//! then the platform defaults. The first candidate that starts decides the
//! outcome, whatever its exit code.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExecError, Result};
use crate::runner::{Exit, Invocation, ProcessRunner};

/// Environment variable naming an explicit interpreter executable.
pub const PYTHON_ENV: &str = "OMNI_SKILL_PYTHON";

/// Module search path variable augmented with the package library dir.
pub const MODULE_PATH_ENV: &str = "PYTHONPATH";

/// Module that receives delegated commands.
pub const DELEGATE_MODULE: &str = "skill_creator.cli";

/// Separator for path-list environment variables on this platform.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: &str = ";";
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: &str = ":";

/// One interpreter executable to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub program: OsString,
    /// Arguments placed before `-m <module>` (e.g. `-3` for the Windows launcher)
    pub extra_args: Vec<OsString>,
}

impl Candidate {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            extra_args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.extra_args.push(arg.as_ref().to_os_string());
        self
    }

    fn label(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.extra_args)
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Default interpreter names for the current platform.
pub fn platform_defaults() -> Vec<Candidate> {
    if cfg!(windows) {
        vec![Candidate::new("python"), Candidate::new("py").with_arg("-3")]
    } else {
        vec![Candidate::new("python3"), Candidate::new("python")]
    }
}

/// Ordered candidates: explicit override (if non-empty), then defaults.
pub fn candidates(override_program: Option<&OsStr>) -> Vec<Candidate> {
    override_program
        .filter(|p| !p.is_empty())
        .map(Candidate::new)
        .into_iter()
        .chain(platform_defaults())
        .collect()
}

/// Prefix `lib_dir` to an existing module search path value.
///
/// The existing value is kept verbatim after the separator.
pub fn module_search_path(lib_dir: &Path, existing: Option<&OsStr>) -> OsString {
    let mut value = lib_dir.as_os_str().to_os_string();
    if let Some(existing) = existing.filter(|e| !e.is_empty()) {
        value.push(PATH_LIST_SEPARATOR);
        value.push(existing);
    }
    value
}

/// Runs the delegated module through the first available interpreter.
pub struct Interpreter<'a> {
    runner: &'a dyn ProcessRunner,
    candidates: Vec<Candidate>,
    envs: Vec<(OsString, OsString)>,
    cwd: Option<PathBuf>,
}

impl<'a> Interpreter<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, candidates: Vec<Candidate>) -> Self {
        Self {
            runner,
            candidates,
            envs: Vec::new(),
            cwd: None,
        }
    }

    /// Set an environment variable for the interpreter process.
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.envs
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Build the invocation for one candidate.
    pub fn invocation(&self, candidate: &Candidate, module: &str, args: &[OsString]) -> Invocation {
        let mut invocation = Invocation::new(&candidate.program)
            .args(&candidate.extra_args)
            .arg("-m")
            .arg(module)
            .args(args);
        invocation.envs = self.envs.clone();
        invocation.cwd = self.cwd.clone();
        invocation
    }

    /// Run `python -m <module> <args...>`.
    ///
    /// # Errors
    /// - [`ExecError::InterpreterNotFound`] when every candidate is missing
    /// - [`ExecError::Spawn`] when a candidate exists but cannot start
    pub fn run_module(&self, module: &str, args: &[OsString]) -> Result<Exit> {
        let mut tried = Vec::new();

        for candidate in &self.candidates {
            let invocation = self.invocation(candidate, module, args);
            match self.runner.run(&invocation) {
                Err(ExecError::NotFound { .. }) => {
                    debug!(candidate = %candidate.label(), "interpreter candidate not found");
                    tried.push(candidate.label());
                }
                other => return other,
            }
        }

        Err(ExecError::InterpreterNotFound { tried })
    }
}
