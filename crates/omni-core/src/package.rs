//! Package root layout
//!
//! The package root is the installed distribution that ships the skill
//! bundles, the per-target directories and the interpreter sources.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

/// Directory holding the interpreter module sources.
pub const LIB_DIR: &str = "src";
/// General skill bundle.
pub const SKILLS_DIR: &str = "skills";
/// Shared skill-creator bundle.
pub const SKILL_CREATOR_DIR: &str = ".shared/skill-creator";
/// Manifest carrying the package version.
pub const MANIFEST_FILE: &str = "package.json";
/// Version used when the manifest is missing or has no version.
pub const UNKNOWN_VERSION: &str = "unknown";

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    version: Option<serde_json::Value>,
}

/// Paths inside an installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory added to the interpreter module search path.
    pub fn lib_dir(&self) -> PathBuf {
        self.root.join(LIB_DIR)
    }

    /// Resolve a package-relative path.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Version recorded in the package manifest.
    ///
    /// Falls back to [`UNKNOWN_VERSION`] when the manifest is missing,
    /// unreadable, or its version is empty.
    pub fn version(&self) -> String {
        let path = self.root.join(MANIFEST_FILE);
        let Ok(content) = std::fs::read_to_string(&path) else {
            debug!(path = %path.display(), "no package manifest");
            return UNKNOWN_VERSION.to_string();
        };

        let version = match serde_json::from_str::<Manifest>(&content) {
            Ok(Manifest {
                version: Some(serde_json::Value::String(v)),
            }) => v.trim().to_string(),
            Ok(Manifest { version: Some(v) }) if !v.is_null() => v.to_string(),
            Ok(_) => String::new(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unreadable package manifest");
                String::new()
            }
        };

        if version.is_empty() {
            UNKNOWN_VERSION.to_string()
        } else {
            version
        }
    }
}
