//! Built-in target rules - SINGLE SOURCE OF TRUTH
//!
//! Every supported `--ai` value except `all` has exactly one entry here.
//! Supporting a new integration means adding one entry to this table.

use super::{SyncPair, TargetRule};

/// Number of built-in targets.
pub const BUILTIN_COUNT: usize = 13;

/// All built-in target rules, in catalog order.
pub static BUILTIN_RULES: [TargetRule; BUILTIN_COUNT] = [
    TargetRule {
        name: "claude",
        display_name: "Claude Code",
        sync_pairs: &[SyncPair::mirrored(".claude/skills")],
        base_dirs: &[".claude"],
    },
    TargetRule {
        name: "cursor",
        display_name: "Cursor",
        sync_pairs: &[SyncPair::mirrored(".cursor/commands")],
        base_dirs: &[".cursor"],
    },
    TargetRule {
        name: "windsurf",
        display_name: "Windsurf",
        sync_pairs: &[SyncPair::mirrored(".windsurf/workflows")],
        base_dirs: &[".windsurf"],
    },
    TargetRule {
        name: "antigravity",
        display_name: "Antigravity",
        sync_pairs: &[SyncPair::mirrored(".agent"), SyncPair::mirrored(".shared")],
        base_dirs: &[".agent", ".shared"],
    },
    TargetRule {
        name: "copilot",
        display_name: "GitHub Copilot",
        sync_pairs: &[SyncPair::mirrored(".github/skills")],
        base_dirs: &[".github"],
    },
    TargetRule {
        name: "kiro",
        display_name: "Kiro",
        sync_pairs: &[SyncPair::mirrored(".kiro")],
        base_dirs: &[".kiro"],
    },
    TargetRule {
        name: "codex",
        display_name: "Codex",
        sync_pairs: &[SyncPair::mirrored(".codex")],
        base_dirs: &[".codex"],
    },
    TargetRule {
        name: "qoder",
        display_name: "Qoder",
        sync_pairs: &[SyncPair::mirrored(".qoder")],
        base_dirs: &[".qoder"],
    },
    TargetRule {
        name: "roocode",
        display_name: "Roo Code",
        sync_pairs: &[SyncPair::mirrored(".roocode")],
        base_dirs: &[".roocode"],
    },
    TargetRule {
        name: "gemini",
        display_name: "Gemini CLI",
        sync_pairs: &[SyncPair::mirrored(".gemini")],
        base_dirs: &[".gemini"],
    },
    TargetRule {
        name: "trae",
        display_name: "Trae",
        sync_pairs: &[SyncPair::mirrored(".trae")],
        base_dirs: &[".trae"],
    },
    TargetRule {
        name: "opencode",
        display_name: "OpenCode",
        sync_pairs: &[SyncPair::mirrored(".opencode")],
        base_dirs: &[".opencode"],
    },
    TargetRule {
        name: "continue",
        display_name: "Continue",
        sync_pairs: &[SyncPair::mirrored(".continue")],
        base_dirs: &[".continue"],
    },
];
