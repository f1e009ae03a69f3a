//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
/// Parent directories are created as needed.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives next to the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    // Every failure past this point must remove the temp file
    let filled = fill_locked(&mut temp_file, &temp_path, path, content);
    drop(temp_file);
    if let Err(e) = filled {
        discard(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        discard(&temp_path);
        Error::io(path, e)
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Lock `file`, write and sync `content`, then unlock.
fn fill_locked(file: &mut File, temp_path: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let lock_failed = |_: std::io::Error| Error::LockFailed {
        path: path.to_path_buf(),
    };

    file.lock_exclusive().map_err(lock_failed)?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(temp_path, e))?;
    FileExt::unlock(file).map_err(lock_failed)
}

/// Best-effort removal of a leftover temp file.
fn discard(temp_path: &Path) {
    if let Err(e) = fs::remove_file(temp_path) {
        tracing::debug!(path = %temp_path.display(), error = %e, "could not remove temp file");
    }
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
