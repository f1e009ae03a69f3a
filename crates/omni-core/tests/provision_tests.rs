//! Provisioning runs against a fake package

use omni_core::package::SKILL_CREATOR_DIR;
use omni_core::provision::{VERSION_FILE, build_sync_pairs};
use omni_core::targets::BUILTIN_RULES;
use omni_core::{PackageLayout, PairStatus, Provisioner, Selection, SyncPair, resolve};
use omni_test_utils::{PackageFixture, TestProject};
use pretty_assertions::assert_eq;

fn full_package() -> PackageFixture {
    let mut package = PackageFixture::with_bundles("1.2.3");
    for rule in &BUILTIN_RULES {
        for pair in rule.sync_pairs {
            package = package.with_dir(pair.source);
        }
    }
    package
}

#[test]
fn run_syncs_bundles_and_selected_targets() {
    let package = full_package();
    let project = TestProject::new();
    let layout = PackageLayout::new(package.root());

    let report = Provisioner::new(&layout, project.root())
        .run(&resolve(["claude"]).unwrap())
        .unwrap();

    assert_eq!(report.synced_count(), 3);
    project.assert_file_content("skills/demo/SKILL.md", "# demo skill\n");
    project.assert_file_exists(".shared/skill-creator/scripts/search.py");
    project.assert_file_content(".claude/skills/README.md", "managed: .claude/skills\n");
    project.assert_file_not_exists(".cursor");
}

#[test]
fn run_stamps_version_in_base_dirs() {
    let package = full_package();
    let project = TestProject::new();
    let layout = PackageLayout::new(package.root());

    let report = Provisioner::new(&layout, project.root())
        .run(&resolve(["claude", "antigravity"]).unwrap())
        .unwrap();

    assert_eq!(report.version, "1.2.3");
    assert_eq!(report.stamps.len(), 3);
    project.assert_file_content(".claude/VERSION", "1.2.3\n");
    project.assert_file_content(".agent/VERSION", "1.2.3\n");
    project.assert_file_content(".shared/VERSION", "1.2.3\n");
}

#[test]
fn run_all_stamps_every_target() {
    let package = full_package();
    let project = TestProject::new();
    let layout = PackageLayout::new(package.root());

    Provisioner::new(&layout, project.root())
        .run(&Selection::all())
        .unwrap();

    for rule in &BUILTIN_RULES {
        for base_dir in rule.base_dirs {
            project.assert_file_content(&format!("{base_dir}/{VERSION_FILE}"), "1.2.3\n");
        }
    }
}

#[test]
fn missing_sources_are_skipped_not_errors() {
    // Package ships bundles but no per-target directories
    let package = PackageFixture::with_bundles("0.9.0");
    let project = TestProject::new();
    project.write(".cursor/commands/mine.md", "user command");
    let layout = PackageLayout::new(package.root());

    let report = Provisioner::new(&layout, project.root())
        .run(&resolve(["cursor"]).unwrap())
        .unwrap();

    let cursor = report
        .pairs
        .iter()
        .find(|r| r.pair.dest == ".cursor/commands")
        .unwrap();
    assert_eq!(cursor.status, PairStatus::SkippedMissingSource);
    project.assert_file_content(".cursor/commands/mine.md", "user command");
    // The version stamp is still written for the selected target
    project.assert_file_content(".cursor/VERSION", "0.9.0\n");
}

#[test]
fn unknown_version_without_manifest() {
    let package = PackageFixture::new().with_dir("skills/demo");
    let project = TestProject::new();
    let layout = PackageLayout::new(package.root());

    let report = Provisioner::new(&layout, project.root())
        .run(&resolve(["kiro"]).unwrap())
        .unwrap();

    assert_eq!(report.version, "unknown");
    project.assert_file_content(".kiro/VERSION", "unknown\n");
}

#[test]
fn resync_prunes_files_removed_from_package() {
    let package = full_package();
    package.write("skills/demo/old.md", "old");
    let project = TestProject::new();
    let layout = PackageLayout::new(package.root());
    let selection = resolve(["claude"]).unwrap();
    let provisioner = Provisioner::new(&layout, project.root());

    provisioner.run(&selection).unwrap();
    project.assert_file_exists("skills/demo/old.md");

    package.remove("skills/demo/old.md");
    provisioner.run(&selection).unwrap();

    project.assert_file_not_exists("skills/demo/old.md");
    project.assert_file_exists("skills/demo/SKILL.md");
}

#[test]
fn user_content_next_to_managed_entries_survives() {
    let package = full_package();
    let project = TestProject::new();
    project.write("skills/my-own/SKILL.md", "mine");
    project.write(".claude/settings.json", "{}");
    let layout = PackageLayout::new(package.root());

    Provisioner::new(&layout, project.root())
        .run(&resolve(["claude"]).unwrap())
        .unwrap();

    project.assert_file_content("skills/my-own/SKILL.md", "mine");
    project.assert_file_content(".claude/settings.json", "{}");
}

#[test]
fn running_inside_the_package_skips_every_pair() {
    let package = full_package();
    let layout = PackageLayout::new(package.root());

    let report = Provisioner::new(&layout, package.root())
        .run(&resolve(["claude"]).unwrap())
        .unwrap();

    assert!(
        report
            .pairs
            .iter()
            .all(|r| r.status == PairStatus::SkippedSameLocation)
    );
    assert_eq!(report.synced_count(), 0);
}

#[test]
fn sync_pair_reports_entry_count() {
    let package = full_package();
    package.write(".shared/skill-creator/data/pack.json", "[]");
    let project = TestProject::new();
    let layout = PackageLayout::new(package.root());

    let report = Provisioner::new(&layout, project.root())
        .sync_pair(&SyncPair::mirrored(SKILL_CREATOR_DIR))
        .unwrap();

    assert_eq!(report.status, PairStatus::Synced { entries: 2 });
}

#[test]
fn build_sync_pairs_for_all_covers_every_rule() {
    let pairs = build_sync_pairs(&Selection::all());
    let expected: usize = 2 + BUILTIN_RULES.iter().map(|r| r.sync_pairs.len()).sum::<usize>();
    assert_eq!(pairs.len(), expected);
}
