//! Process settings
//!
//! Everything omni-skill takes from its environment is read once into
//! [`Settings`] in `main` and passed down explicitly.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use omni_core::PackageLayout;
use omni_exec::companion::{COMPANION_ENV, DEFAULT_COMPANION};
use omni_exec::interpreter::{MODULE_PATH_ENV, PYTHON_ENV};

use crate::error::{CliError, Result};

/// Package root override.
pub const HOME_ENV: &str = "OMNI_SKILL_HOME";
/// Set to `1` to skip the companion tool step.
pub const SKIP_COMPANION_ENV: &str = "OMNI_SKILL_SKIP_COMPANION";
/// Set to `1` to skip the self-upgrade in `update`.
pub const SKIP_SELF_UPDATE_ENV: &str = "OMNI_SKILL_SKIP_SELF_UPDATE";

/// Environment-derived settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Project directory being provisioned
    pub cwd: PathBuf,
    /// Installed package root
    pub package_root: PathBuf,
    /// Explicit interpreter executable
    pub python: Option<OsString>,
    /// Existing module search path, kept after the package library dir
    pub module_path: Option<OsString>,
    pub skip_companion: bool,
    pub skip_self_update: bool,
    /// Companion tool executable
    pub companion: OsString,
}

impl Settings {
    /// Read settings from the current process.
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let exe = std::env::current_exe().ok();
        Self::from_vars(|key| std::env::var_os(key), cwd, exe.as_deref())
    }

    /// Build settings from a variable lookup, working directory and the
    /// path of the running executable.
    pub fn from_vars(
        vars: impl Fn(&str) -> Option<OsString>,
        cwd: PathBuf,
        exe: Option<&Path>,
    ) -> Result<Self> {
        let package_root = match vars(HOME_ENV).filter(|v| !v.is_empty()) {
            Some(home) => PathBuf::from(home),
            None => exe
                .and_then(Path::parent)
                .and_then(Path::parent)
                .map(Path::to_path_buf)
                .ok_or_else(|| {
                    CliError::user(format!(
                        "Cannot locate the omni-skill package root. Set {HOME_ENV} to the package directory."
                    ))
                })?,
        };

        let flag = |key: &str| vars(key).is_some_and(|v| v == "1");

        Ok(Self {
            cwd,
            package_root,
            python: vars(PYTHON_ENV).filter(|v| !v.is_empty()),
            module_path: vars(MODULE_PATH_ENV).filter(|v| !v.is_empty()),
            skip_companion: flag(SKIP_COMPANION_ENV),
            skip_self_update: flag(SKIP_SELF_UPDATE_ENV),
            companion: vars(COMPANION_ENV)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| OsString::from(DEFAULT_COMPANION)),
        })
    }

    pub fn package(&self) -> PackageLayout {
        PackageLayout::new(&self.package_root)
    }
}
