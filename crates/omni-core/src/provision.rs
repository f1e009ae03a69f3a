//! Provisioning plan
//!
//! Builds the ordered list of sync pairs for a selection, applies them with
//! [`omni_fs::sync_tree_replace`] and stamps the package version into each
//! selected target's base directories.

use std::path::{Path, PathBuf};

use omni_fs::SyncOutcome;
use tracing::info;

use crate::package::{PackageLayout, SKILL_CREATOR_DIR, SKILLS_DIR};
use crate::resolver::Selection;
use crate::targets::SyncPair;
use crate::Result;

/// File written into every base directory of a selected target.
pub const VERSION_FILE: &str = "VERSION";

/// Pairs synced for every selection, before any target pairs.
pub const BASE_PAIRS: [SyncPair; 2] = [
    SyncPair::mirrored(SKILLS_DIR),
    SyncPair::mirrored(SKILL_CREATOR_DIR),
];

/// What happened to a single sync pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairStatus {
    /// Destination entries replaced from the source
    Synced { entries: usize },
    /// The package does not ship this source
    SkippedMissingSource,
    /// Source and destination are the same directory
    SkippedSameLocation,
}

impl PairStatus {
    pub fn is_skipped(&self) -> bool {
        !matches!(self, Self::Synced { .. })
    }

    /// Short reason shown for skipped pairs.
    pub fn skip_reason(&self) -> Option<&'static str> {
        match self {
            Self::Synced { .. } => None,
            Self::SkippedMissingSource => Some("not found in package"),
            Self::SkippedSameLocation => Some("source equals destination"),
        }
    }
}

/// Result of syncing one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairReport {
    pub pair: SyncPair,
    pub status: PairStatus,
}

/// Everything a provisioning run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionReport {
    pub pairs: Vec<PairReport>,
    /// Version written into the stamp files
    pub version: String,
    /// Every `VERSION` file written
    pub stamps: Vec<PathBuf>,
}

impl ProvisionReport {
    pub fn synced_count(&self) -> usize {
        self.pairs.iter().filter(|r| !r.status.is_skipped()).count()
    }
}

/// Ordered sync pairs for a selection: base bundles first, then each
/// target's pairs in selection order.
pub fn build_sync_pairs(selection: &Selection) -> Vec<SyncPair> {
    BASE_PAIRS
        .iter()
        .copied()
        .chain(selection.rules().flat_map(|rule| rule.sync_pairs.iter().copied()))
        .collect()
}

/// Applies a selection from a package root into a project directory.
#[derive(Debug, Clone, Copy)]
pub struct Provisioner<'a> {
    package: &'a PackageLayout,
    cwd: &'a Path,
}

impl<'a> Provisioner<'a> {
    pub fn new(package: &'a PackageLayout, cwd: &'a Path) -> Self {
        Self { package, cwd }
    }

    /// Sync all pairs, stamp versions, and report what happened.
    ///
    /// Stops at the first filesystem error; earlier pairs stay applied.
    pub fn run(&self, selection: &Selection) -> Result<ProvisionReport> {
        let pairs = self.sync_pairs(&build_sync_pairs(selection))?;
        let version = self.package.version();
        let stamps = self.write_version_files(selection, &version)?;

        Ok(ProvisionReport {
            pairs,
            version,
            stamps,
        })
    }

    /// Apply pairs in order.
    pub fn sync_pairs(&self, pairs: &[SyncPair]) -> Result<Vec<PairReport>> {
        pairs.iter().map(|pair| self.sync_pair(pair)).collect()
    }

    /// Apply one pair with replace-in-place semantics.
    pub fn sync_pair(&self, pair: &SyncPair) -> Result<PairReport> {
        let src = self.package.join(pair.source_path());
        let dest = self.cwd.join(pair.dest_path());

        let status = if omni_fs::same_location(&src, &dest) {
            PairStatus::SkippedSameLocation
        } else {
            match omni_fs::sync_tree_replace(&src, &dest)? {
                SyncOutcome::Synced { entries } => PairStatus::Synced { entries },
                SyncOutcome::SkippedMissingSource => PairStatus::SkippedMissingSource,
            }
        };

        match status.skip_reason() {
            Some(reason) => info!(dest = pair.dest, reason, "skipped sync pair"),
            None => info!(dest = pair.dest, "synced pair"),
        }

        Ok(PairReport {
            pair: *pair,
            status,
        })
    }

    /// Write `VERSION` into every base directory of every selected target.
    pub fn write_version_files(&self, selection: &Selection, version: &str) -> Result<Vec<PathBuf>> {
        let content = format!("{version}\n");
        let mut written = Vec::new();

        for rule in selection.rules() {
            for base_dir in rule.base_dirs {
                let path = self.cwd.join(base_dir).join(VERSION_FILE);
                if written.contains(&path) {
                    continue;
                }
                omni_fs::io::write_text(&path, &content)?;
                written.push(path);
            }
        }

        Ok(written)
    }
}
