//! Shared test utilities for the omni-skill workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each build their own package and project trees. It is a dev-dependency
//! only and never published.
//!
//! # Modules
//!
//! - [`package`]: [`PackageFixture`] builder for a fake installed package
//! - [`project`]: [`TestProject`] scratch working directory with assertions
//! - [`runner`]: [`ScriptedRunner`] process runner that never spawns

pub mod package;
pub mod project;
pub mod runner;

pub use package::PackageFixture;
pub use project::TestProject;
pub use runner::ScriptedRunner;
