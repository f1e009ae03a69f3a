//! [`PackageFixture`] builder for a fake installed omni-skill package.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary package root laid out like an installed distribution.
///
/// # Example
///
/// ```rust,no_run
/// use omni_test_utils::PackageFixture;
///
/// let package = PackageFixture::with_bundles("1.2.3")
///     .with_dir(".claude/skills")
///     .with_dir(".cursor/commands");
/// assert!(package.root().join("skills/demo/SKILL.md").exists());
/// ```
pub struct PackageFixture {
    temp_dir: TempDir,
}

impl Default for PackageFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageFixture {
    /// An empty package root: no manifest, no bundles.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("PackageFixture::new: failed to create temp dir: {e}")),
        }
    }

    /// A package with `package.json`, the general skill bundle, the shared
    /// skill-creator bundle and an interpreter module stub under `src/`.
    pub fn with_bundles(version: &str) -> Self {
        let fixture = Self::new();
        fixture.write("package.json", &format!("{{\n  \"name\": \"omni-skill\",\n  \"version\": \"{version}\"\n}}\n"));
        fixture.write("skills/demo/SKILL.md", "# demo skill\n");
        fixture.write("skills/demo/skillspec.json", "{\"name\": \"demo\"}\n");
        fixture.write(".shared/skill-creator/scripts/search.py", "print('search')\n");
        fixture.write("src/skill_creator/__init__.py", "");
        fixture.write("src/skill_creator/cli.py", "print('skill creator')\n");
        fixture
    }

    /// Add a directory holding a `README.md` that names it.
    pub fn with_dir(self, relative: &str) -> Self {
        self.write(&format!("{relative}/README.md"), &format!("managed: {relative}\n"));
        self
    }

    /// Return the package root path.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `relative`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("PackageFixture::write: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("PackageFixture::write: failed to write {}: {e}", path.display()));
    }

    /// Remove a file or directory tree from the package.
    ///
    /// # Panics
    /// Panics if the path exists and cannot be removed.
    pub fn remove(&self, relative: &str) {
        let path = self.root().join(relative);
        let result = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        if let Err(e) = result {
            if e.kind() != std::io::ErrorKind::NotFound {
                panic!("PackageFixture::remove: failed to remove {}: {e}", path.display());
            }
        }
    }
}
