//! Error types for omni-core

use std::path::PathBuf;

use crate::CLI_NAME;

/// Result type for omni-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in omni-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested target is not in the catalog
    #[error("Unknown --ai value: '{value}'")]
    UnknownTarget { value: String },

    /// `update` ran without a prior `init`
    #[error("Missing {}. Please run: {} init --ai <target>", .path.display(), CLI_NAME)]
    MissingState { path: PathBuf },

    /// The saved selection cannot be used
    #[error(
        "Invalid {} ({}). Please delete it and re-run: {} init --ai <target>",
        .path.display(),
        .reason,
        CLI_NAME
    )]
    CorruptState { path: PathBuf, reason: String },

    /// The `install` argument does not exist
    #[error("Path not found: {}", .path.display())]
    InstallPathMissing { path: PathBuf },

    /// A skills directory without any installable skill
    #[error("No {} found in: {}", crate::install::SKILL_SPEC_FILE, .path.display())]
    NoSkillsFound { path: PathBuf },

    /// The `install` argument is a plain file
    #[error(
        "Invalid path: {}. Must be a skill directory or skills directory.",
        .path.display()
    )]
    InvalidInstallPath { path: PathBuf },

    /// Filesystem error from omni-fs
    #[error(transparent)]
    Fs(#[from] omni_fs::Error),
}
