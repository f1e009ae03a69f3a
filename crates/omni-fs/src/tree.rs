//! Recursive directory copy and replace-in-place sync
//!
//! Two primitives drive every provisioning step:
//!
//! - [`copy_tree`] merges a source tree into a destination. Files with the
//!   same name are overwritten, everything else in the destination is kept.
//! - [`sync_tree_replace`] removes each destination entry that the source
//!   declares at its top level before copying it again, so files deleted
//!   from a bundle disappear from the project on the next sync.
//!
//! Only top-level entries are pruned. A stale file nested below an entry is
//! removed because the whole entry is recreated, but destination entries the
//! source no longer declares at all are left in place.

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Outcome of a [`sync_tree_replace`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The source existed and `entries` top-level entries were replaced.
    Synced { entries: usize },
    /// The source does not exist; the destination was not touched.
    SkippedMissingSource,
}

/// Recursively copy `src` into `dest`, merging with existing content.
///
/// Does nothing when `src` does not exist. Intermediate directories of
/// `dest` are created. When `src` is a single file it is copied to `dest`.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    if !src.exists() {
        debug!(src = %src.display(), "copy source missing, nothing to do");
        return Ok(());
    }

    if !src.is_dir() {
        return copy_file(src, dest);
    }

    ensure_dir(dest)?;

    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| Error::walk(src, e))?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            ensure_dir(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Replace every top-level entry of `src` inside `dest`.
///
/// For each entry directly under `src`, the same-named entry under `dest` is
/// removed (recursively, missing is fine) and then recreated as a copy.
/// Entries in `dest` that `src` does not contain are left untouched.
pub fn sync_tree_replace(src: &Path, dest: &Path) -> Result<SyncOutcome> {
    if !src.exists() {
        debug!(src = %src.display(), "sync source missing, skipping");
        return Ok(SyncOutcome::SkippedMissingSource);
    }

    if !src.is_dir() {
        remove_path(dest)?;
        copy_file(src, dest)?;
        return Ok(SyncOutcome::Synced { entries: 1 });
    }

    ensure_dir(dest)?;

    let mut entries = fs::read_dir(src)
        .map_err(|e| Error::io(src, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(src, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in &entries {
        let source = entry.path();
        let target = dest.join(entry.file_name());

        remove_path(&target)?;
        if source.is_dir() {
            copy_tree(&source, &target)?;
        } else {
            copy_file(&source, &target)?;
        }
        debug!(entry = %target.display(), "replaced entry");
    }

    Ok(SyncOutcome::Synced {
        entries: entries.len(),
    })
}

/// Make `dest` an exact copy of `src`, dropping whatever was there before.
///
/// Unlike [`sync_tree_replace`], nothing in `dest` survives. A missing
/// `src` is an error because the old `dest` would be lost for nothing.
pub fn replace_tree(src: &Path, dest: &Path) -> Result<()> {
    if !src.exists() {
        return Err(Error::io(
            src,
            std::io::Error::new(std::io::ErrorKind::NotFound, "source does not exist"),
        ));
    }

    remove_path(dest)?;
    copy_tree(src, dest)?;
    debug!(src = %src.display(), dest = %dest.display(), "replaced tree");
    Ok(())
}

/// Remove a file, symlink or directory tree. Absence is not an error.
fn remove_path(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::io(path, e)),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match removed {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(Error::io(path, e)),
        _ => Ok(()),
    }
}

/// Create `path` as a directory, replacing a file that sits in the way.
fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_file() {
        remove_path(path)?;
    }
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Copy a single file, replacing a directory that sits in the way.
fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if dest.is_dir() {
        remove_path(dest)?;
    }
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::copy(src, dest).map_err(|e| Error::io(dest, e))?;
    Ok(())
}
