//! Subprocess launching for omni-skill
//!
//! omni-skill hands most of its work to external programs:
//!
//! - the Python interpreter running the `skill_creator.cli` module
//! - an optional companion tool run once per selected target
//! - `npm` for self-upgrade during `update`
//!
//! All calls are blocking, inherit the parent's standard streams and go
//! through the [`ProcessRunner`] trait so orchestration can be tested
//! without spawning anything.

pub mod companion;
pub mod error;
pub mod interpreter;
pub mod runner;

pub use companion::{Companion, CompanionMode};
pub use error::{ExecError, Result};
pub use interpreter::{Candidate, Interpreter};
pub use runner::{Exit, Invocation, ProcessRunner, SystemRunner};
