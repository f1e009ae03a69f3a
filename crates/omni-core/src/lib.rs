//! Core provisioning layer for omni-skill
//!
//! This crate decides *what* gets provisioned into a project:
//!
//! - [`targets`]: the fixed catalog of AI integrations and their sync rules
//! - [`resolver`]: turns raw `--ai` tokens into a validated [`Selection`]
//! - [`state`]: persists the selection between `init` and `update`
//! - [`package`]: locates bundles and the version inside the package root
//! - [`provision`]: applies sync pairs and writes version stamps
//! - [`install`]: copies user-authored skills into the project
//!
//! Nothing here reads the process environment or spawns processes.

pub mod error;
pub mod install;
pub mod package;
pub mod provision;
pub mod resolver;
pub mod state;
pub mod targets;

pub use error::{Error, Result};
pub use install::{InstallStatus, InstalledSkill, SkillBundle, discover_skills, install_skill};
pub use package::PackageLayout;
pub use provision::{PairReport, PairStatus, ProvisionReport, Provisioner};
pub use resolver::{Selection, resolve};
pub use state::StateStore;
pub use targets::{SyncPair, TargetRule};

/// Name of the command users run, used in remediation messages.
pub const CLI_NAME: &str = "omni-skill";
