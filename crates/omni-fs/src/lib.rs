//! Filesystem primitives for omni-skill
//!
//! Provides recursive tree copy, replace-in-place directory sync, whole-tree
//! replacement and atomic file writes used to provision skill bundles into
//! a project.

pub mod error;
pub mod io;
pub mod path;
pub mod tree;

pub use error::{Error, Result};
pub use path::{canonical, same_location};
pub use tree::{SyncOutcome, copy_tree, replace_tree, sync_tree_replace};
