//! Init/update state persistence
//!
//! `init` records the chosen targets in `.omni-skill.json` so that `update`
//! can replay the same selection. The file is validated with the same
//! rules as command-line tokens, so a hand-edited or stale file is caught
//! instead of silently syncing nothing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::resolver::{self, Selection};
use crate::{Error, Result};

/// File name of the persisted selection, relative to the project root.
pub const STATE_FILE: &str = ".omni-skill.json";

/// On-disk shape of the state file.
///
/// Unknown fields are ignored so newer versions can add data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub ais: Vec<String>,
}

/// Reads and writes the persisted selection for one project.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store for the project rooted at `cwd`.
    pub fn in_dir(cwd: &Path) -> Self {
        Self {
            path: cwd.join(STATE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `selection`, best-effort.
    ///
    /// Write failures are logged and swallowed so that a completed init is
    /// never reported as failed. Returns whether the file was written.
    pub fn save(&self, selection: &Selection) -> bool {
        let state = PersistedState {
            ais: selection.iter().map(str::to_string).collect(),
        };

        let content = match serde_json::to_string_pretty(&state) {
            Ok(json) => json + "\n",
            Err(e) => {
                warn!(error = %e, "failed to serialize selection state");
                return false;
            }
        };

        match omni_fs::io::write_text(&self.path, &content) {
            Ok(()) => {
                debug!(path = %self.path.display(), targets = %selection, "saved selection state");
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to save selection state");
                false
            }
        }
    }

    /// Load and validate the persisted selection.
    ///
    /// # Errors
    /// - [`Error::MissingState`] when the file does not exist
    /// - [`Error::CorruptState`] when it cannot be read or parsed, names an
    ///   unknown target, or resolves to an empty selection
    pub fn load(&self) -> Result<Selection> {
        if !self.path.exists() {
            return Err(Error::MissingState {
                path: self.path.clone(),
            });
        }

        let content = omni_fs::io::read_text(&self.path).map_err(|e| self.corrupt(e))?;
        let state: PersistedState = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;

        let tokens = state.ais.iter().filter(|token| !token.trim().is_empty());
        let selection = match resolver::resolve(tokens) {
            Ok(selection) => selection,
            Err(Error::UnknownTarget { value }) => {
                return Err(self.corrupt(format!("unknown target '{value}'")));
            }
            Err(e) => return Err(e),
        };

        if selection.is_empty() {
            return Err(self.corrupt("ais is empty"));
        }

        debug!(path = %self.path.display(), targets = %selection, "loaded selection state");
        Ok(selection)
    }

    fn corrupt(&self, reason: impl ToString) -> Error {
        Error::CorruptState {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}
