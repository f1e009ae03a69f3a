//! Delegation to the skill creator module
//!
//! Everything that is not `init` or `update` runs as
//! `python -m skill_creator.cli <args...>` with the package's `src/`
//! directory prefixed to the module search path.

use std::ffi::OsString;

use omni_exec::interpreter::{self, DELEGATE_MODULE, MODULE_PATH_ENV};
use omni_exec::{Interpreter, ProcessRunner};

use crate::context::Settings;
use crate::error::Result;

/// Run the delegated module and return its exit code.
pub fn run_delegate(settings: &Settings, runner: &dyn ProcessRunner, args: &[OsString]) -> Result<i32> {
    let exit = skill_creator(settings, runner).run_module(DELEGATE_MODULE, args)?;
    Ok(exit.exit_code())
}

/// Interpreter set up to import the package's modules from `settings.cwd`.
pub(crate) fn skill_creator<'a>(settings: &Settings, runner: &'a dyn ProcessRunner) -> Interpreter<'a> {
    let lib_dir = settings.package().lib_dir();
    let search_path = interpreter::module_search_path(&lib_dir, settings.module_path.as_deref());

    Interpreter::new(runner, interpreter::candidates(settings.python.as_deref()))
        .env(MODULE_PATH_ENV, search_path)
        .current_dir(&settings.cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use omni_test_utils::ScriptedRunner;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn settings(python: Option<&str>) -> Settings {
        Settings {
            cwd: PathBuf::from("/work"),
            package_root: PathBuf::from("/pkg"),
            python: python.map(OsString::from),
            module_path: None,
            skip_companion: false,
            skip_self_update: false,
            companion: "skill-companion".into(),
        }
    }

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_delegate_forwards_arguments_unchanged() {
        let runner = ScriptedRunner::new().exits("/opt/python", 4);

        let code = run_delegate(&settings(Some("/opt/python")), &runner, &args(&["list", "--json"]))
            .unwrap();

        assert_eq!(code, 4);
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].command_line(), "/opt/python -m skill_creator.cli list --json");
        assert_eq!(
            calls[0].envs,
            vec![(OsString::from("PYTHONPATH"), OsString::from("/pkg/src"))]
        );
        assert_eq!(calls[0].cwd, Some(PathBuf::from("/work")));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_delegate_keeps_existing_module_path() {
        let runner = ScriptedRunner::new();
        let mut settings = settings(None);
        settings.module_path = Some("/site".into());

        run_delegate(&settings, &runner, &[]).unwrap();

        assert_eq!(
            runner.calls()[0].envs,
            vec![(OsString::from("PYTHONPATH"), OsString::from("/pkg/src:/site"))]
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_delegate_falls_back_to_default_names() {
        let runner = ScriptedRunner::new().missing("/opt/python").missing("python3");

        let code = run_delegate(&settings(Some("/opt/python")), &runner, &args(&["--help"])).unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            runner.command_lines(),
            vec![
                "/opt/python -m skill_creator.cli --help",
                "python3 -m skill_creator.cli --help",
                "python -m skill_creator.cli --help",
            ]
        );
    }

    #[test]
    fn test_delegate_without_interpreter_exits_127() {
        let runner = ScriptedRunner::new()
            .missing("python3")
            .missing("python")
            .missing("py");

        let err = run_delegate(&settings(None), &runner, &[]).unwrap_err();

        assert!(matches!(err, CliError::Exec(_)));
        assert_eq!(err.exit_code(), 127);
        assert!(err.to_string().contains("OMNI_SKILL_PYTHON"));
    }
}
