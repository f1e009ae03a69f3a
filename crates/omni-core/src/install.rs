//! Installing user-authored skills
//!
//! A skill is a directory holding a [`SKILL_SPEC_FILE`]. `install` accepts
//! either one skill directory or a directory whose children are skills, and
//! copies each skill to `skills/<name>` inside the project.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::package::SKILLS_DIR;
use crate::{Error, Result};

/// File that marks a directory as a skill.
pub const SKILL_SPEC_FILE: &str = "skillspec.json";

/// A skill found on disk, ready to be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBundle {
    /// Directory name, reused as the installed name
    pub name: String,
    pub source: PathBuf,
}

/// What [`install_skill`] did with a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    Copied,
    /// The bundle already lives at its install location
    SkippedSameLocation,
}

/// A skill placed inside the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledSkill {
    pub name: String,
    pub dest: PathBuf,
    /// Spec file of the installed copy
    pub spec: PathBuf,
    pub status: InstallStatus,
}

/// Find the skills under `path`.
///
/// A directory containing [`SKILL_SPEC_FILE`] is a single skill. Otherwise
/// every direct child holding the spec file is a skill, in name order.
pub fn discover_skills(path: &Path) -> Result<Vec<SkillBundle>> {
    if !path.exists() {
        return Err(Error::InstallPathMissing {
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(Error::InvalidInstallPath {
            path: path.to_path_buf(),
        });
    }

    let root = omni_fs::canonical(path)?;
    if root.join(SKILL_SPEC_FILE).is_file() {
        return Ok(vec![bundle(root)?]);
    }

    let entries = fs::read_dir(&root)
        .map_err(|e| omni_fs::Error::io(&root, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| omni_fs::Error::io(&root, e))?;

    let mut skills = entries
        .into_iter()
        .map(|entry| entry.path())
        .filter(|child| child.join(SKILL_SPEC_FILE).is_file())
        .map(bundle)
        .collect::<Result<Vec<_>>>()?;
    skills.sort_by(|a, b| a.name.cmp(&b.name));

    if skills.is_empty() {
        return Err(Error::NoSkillsFound { path: root });
    }
    debug!(count = skills.len(), root = %root.display(), "discovered skills");
    Ok(skills)
}

fn bundle(source: PathBuf) -> Result<SkillBundle> {
    let Some(name) = source.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Err(Error::InvalidInstallPath { path: source });
    };
    Ok(SkillBundle { name, source })
}

/// Copy `skill` to `skills/<name>` under `cwd`, replacing any previous copy.
///
/// Installing a skill that already sits at its destination leaves it alone.
pub fn install_skill(skill: &SkillBundle, cwd: &Path) -> Result<InstalledSkill> {
    let dest = cwd.join(SKILLS_DIR).join(&skill.name);

    let status = if omni_fs::same_location(&skill.source, &dest) {
        debug!(skill = %skill.name, "skill already in place");
        InstallStatus::SkippedSameLocation
    } else {
        omni_fs::replace_tree(&skill.source, &dest)?;
        InstallStatus::Copied
    };

    Ok(InstalledSkill {
        name: skill.name.clone(),
        spec: dest.join(SKILL_SPEC_FILE),
        dest,
        status,
    })
}
