//! Behavioural tests for copy_tree and sync_tree_replace

use assert_fs::prelude::*;
use omni_fs::{SyncOutcome, copy_tree, replace_tree, sync_tree_replace};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;

fn bundle(temp: &assert_fs::TempDir) -> assert_fs::fixture::ChildPath {
    let src = temp.child("pkg/skills");
    src.child("review/SKILL.md").write_str("# review").unwrap();
    src.child("review/scripts/run.py").write_str("print('hi')").unwrap();
    src.child("README.md").write_str("bundle readme").unwrap();
    src
}

#[test]
fn copy_tree_copies_nested_entries() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = bundle(&temp);
    let dest = temp.child("project/skills");

    copy_tree(src.path(), dest.path()).unwrap();

    dest.child("review/SKILL.md").assert("# review");
    dest.child("review/scripts/run.py").assert("print('hi')");
    dest.child("README.md").assert("bundle readme");
}

#[test]
fn copy_tree_missing_source_is_noop() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dest = temp.child("project/skills");

    copy_tree(temp.child("absent").path(), dest.path()).unwrap();

    dest.assert(predicate::path::missing());
}

#[test]
fn copy_tree_merges_and_keeps_unrelated_content() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = bundle(&temp);
    let dest = temp.child("project/skills");
    dest.child("mine/notes.md").write_str("user notes").unwrap();
    dest.child("review/local.md").write_str("local tweak").unwrap();
    dest.child("README.md").write_str("old readme").unwrap();

    copy_tree(src.path(), dest.path()).unwrap();

    dest.child("mine/notes.md").assert("user notes");
    // Directories merge rather than replace
    dest.child("review/local.md").assert("local tweak");
    dest.child("README.md").assert("bundle readme");
}

#[test]
fn copy_tree_single_file_source() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("pkg/AGENTS.md");
    src.write_str("agents").unwrap();
    let dest = temp.child("project/AGENTS.md");

    copy_tree(src.path(), dest.path()).unwrap();

    dest.assert("agents");
}

#[test]
fn sync_replace_removes_stale_files_inside_declared_entries() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = bundle(&temp);
    let dest = temp.child("project/skills");
    dest.child("review/old_script.py").write_str("stale").unwrap();

    let outcome = sync_tree_replace(src.path(), dest.path()).unwrap();

    assert_eq!(outcome, SyncOutcome::Synced { entries: 2 });
    dest.child("review/old_script.py").assert(predicate::path::missing());
    dest.child("review/SKILL.md").assert("# review");
}

#[test]
fn sync_replace_leaves_undeclared_entries_alone() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = bundle(&temp);
    let dest = temp.child("project/skills");
    dest.child("custom-skill/SKILL.md").write_str("user skill").unwrap();

    sync_tree_replace(src.path(), dest.path()).unwrap();

    dest.child("custom-skill/SKILL.md").assert("user skill");
}

#[test]
fn sync_replace_missing_source_reports_skip_and_leaves_dest() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dest = temp.child("project/.cursor/commands");
    dest.child("keep.md").write_str("keep").unwrap();

    let outcome = sync_tree_replace(temp.child("pkg/.cursor/commands").path(), dest.path()).unwrap();

    assert_eq!(outcome, SyncOutcome::SkippedMissingSource);
    dest.child("keep.md").assert("keep");
}

#[test]
fn sync_replace_switches_entry_kind() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("pkg/.kiro");
    src.child("steering/rules.md").write_str("rules").unwrap();
    src.child("settings.json").write_str("{}").unwrap();
    let dest = temp.child("project/.kiro");
    // Destination has a file where the source has a directory, and vice versa
    dest.child("steering").write_str("not a dir").unwrap();
    dest.child("settings.json/nested.txt").write_str("not a file").unwrap();

    sync_tree_replace(src.path(), dest.path()).unwrap();

    dest.child("steering/rules.md").assert("rules");
    dest.child("settings.json").assert("{}");
}

#[test]
fn sync_replace_is_idempotent() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = bundle(&temp);
    let dest = temp.child("project/skills");

    sync_tree_replace(src.path(), dest.path()).unwrap();
    let first = fs::read(dest.child("review/scripts/run.py").path()).unwrap();
    sync_tree_replace(src.path(), dest.path()).unwrap();
    let second = fs::read(dest.child("review/scripts/run.py").path()).unwrap();

    assert_eq!(first, second);
    dest.child("README.md").assert("bundle readme");
}

#[test]
fn sync_replace_empty_source_creates_dest() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = temp.child("pkg/.codex");
    src.create_dir_all().unwrap();
    let dest = temp.child("project/.codex");

    let outcome = sync_tree_replace(src.path(), dest.path()).unwrap();

    assert_eq!(outcome, SyncOutcome::Synced { entries: 0 });
    dest.assert(predicate::path::is_dir());
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    fn is_root() -> bool {
        match std::process::Command::new("id").arg("-u").output() {
            Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
            Err(_) => false,
        }
    }

    #[test]
    fn sync_replace_into_readonly_dest_fails() {
        if is_root() {
            eprintln!("Skipping test: running as root bypasses permission checks");
            return;
        }
        let temp = assert_fs::TempDir::new().unwrap();
        let src = bundle(&temp);
        let dest = temp.child("project/skills");
        dest.create_dir_all().unwrap();
        fs::set_permissions(dest.path(), Permissions::from_mode(0o555)).unwrap();

        let result = sync_tree_replace(src.path(), dest.path());

        let _ = fs::set_permissions(dest.path(), Permissions::from_mode(0o755));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("I/O error"), "got: {err}");
    }

    #[test]
    fn copy_tree_follows_symlinked_directories() {
        let temp = assert_fs::TempDir::new().unwrap();
        let shared = temp.child("shared");
        shared.child("data.json").write_str("[]").unwrap();
        let src = temp.child("pkg/.agent");
        src.create_dir_all().unwrap();
        std::os::unix::fs::symlink(shared.path(), src.child("data").path()).unwrap();
        let dest = temp.child("project/.agent");

        copy_tree(src.path(), dest.path()).unwrap();

        dest.child("data/data.json").assert("[]");
        assert!(!fs::symlink_metadata(dest.child("data").path()).unwrap().file_type().is_symlink());
    }
}

#[test]
fn replace_tree_drops_previous_content() {
    let temp = assert_fs::TempDir::new().unwrap();
    let src = bundle(&temp);
    let dest = temp.child("project/skills");
    dest.child("review/stale.md").write_str("old").unwrap();
    dest.child("mine/SKILL.md").write_str("# mine").unwrap();

    replace_tree(src.path(), dest.path()).unwrap();

    dest.child("review/SKILL.md").assert("# review");
    dest.child("README.md").assert("bundle readme");
    dest.child("review/stale.md").assert(predicate::path::missing());
    dest.child("mine").assert(predicate::path::missing());
}

#[test]
fn replace_tree_missing_source_keeps_destination() {
    let temp = assert_fs::TempDir::new().unwrap();
    let dest = temp.child("project/skills");
    dest.child("mine/SKILL.md").write_str("# mine").unwrap();

    let result = replace_tree(temp.child("absent").path(), dest.path());

    assert!(result.is_err());
    dest.child("mine/SKILL.md").assert("# mine");
}
