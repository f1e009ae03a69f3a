//! Scripted process runner.
//!
//! [`ScriptedRunner`] implements [`ProcessRunner`] without spawning. Each
//! program can be given an exit code or marked missing; every invocation is
//! recorded for assertions.

use std::cell::RefCell;
use std::collections::HashMap;

use omni_exec::{ExecError, Exit, Invocation, ProcessRunner};

#[derive(Debug, Clone, Copy)]
enum Script {
    Exit(i32),
    Missing,
}

/// Fake runner returning scripted outcomes per program name.
///
/// Programs without a script exit with code 0.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    scripts: HashMap<String, Script>,
    /// Per command-line overrides, checked before per-program scripts
    lines: HashMap<String, Script>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// `program` exits with `code`.
    pub fn exits(mut self, program: &str, code: i32) -> Self {
        self.scripts.insert(program.to_string(), Script::Exit(code));
        self
    }

    /// `program` is not installed.
    pub fn missing(mut self, program: &str) -> Self {
        self.scripts.insert(program.to_string(), Script::Missing);
        self
    }

    /// The exact command line `line` exits with `code`.
    pub fn line_exits(mut self, line: &str, code: i32) -> Self {
        self.lines.insert(line.to_string(), Script::Exit(code));
        self
    }

    /// Every invocation so far, in order.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Command lines of every invocation so far.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> omni_exec::Result<Exit> {
        self.calls.borrow_mut().push(invocation.clone());

        let program = invocation.program_name();
        let script = self
            .lines
            .get(&invocation.command_line())
            .or_else(|| self.scripts.get(&program))
            .copied()
            .unwrap_or(Script::Exit(0));

        match script {
            Script::Exit(code) => Ok(Exit::code(code)),
            Script::Missing => Err(ExecError::NotFound { program }),
        }
    }
}
