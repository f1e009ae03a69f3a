//! Core types for the target registry

use std::path::Path;

/// A source/destination pair copied during provisioning.
///
/// `source` is relative to the package root, `dest` to the project
/// working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyncPair {
    pub source: &'static str,
    pub dest: &'static str,
}

impl SyncPair {
    /// Pair whose source and destination use the same relative path.
    pub const fn mirrored(path: &'static str) -> Self {
        Self {
            source: path,
            dest: path,
        }
    }

    pub fn source_path(&self) -> &Path {
        Path::new(self.source)
    }

    pub fn dest_path(&self) -> &Path {
        Path::new(self.dest)
    }
}

/// Provisioning rule for one AI integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetRule {
    /// Machine identifier used with `--ai` (e.g. "claude")
    pub name: &'static str,
    /// Human-readable name (e.g. "Claude Code")
    pub display_name: &'static str,
    /// Directories synced for this target, applied in order
    pub sync_pairs: &'static [SyncPair],
    /// Directories that receive a `VERSION` stamp
    pub base_dirs: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_pair() {
        let pair = SyncPair::mirrored(".claude/skills");
        assert_eq!(pair.source, pair.dest);
        assert_eq!(pair.dest_path(), Path::new(".claude/skills"));
    }
}
