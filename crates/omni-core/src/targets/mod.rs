//! AI target registry
//!
//! A static catalog mapping each concrete target to its [`TargetRule`].
//! The catalog plus the [`ALL`] alias defines which `--ai` values are valid.

mod builtins;
mod types;

pub use builtins::{BUILTIN_COUNT, BUILTIN_RULES};
pub use types::{SyncPair, TargetRule};

/// Alias that expands to every concrete target.
pub const ALL: &str = "all";

/// Concrete target names in catalog order (without `all`).
pub fn concrete_targets() -> impl Iterator<Item = &'static str> {
    BUILTIN_RULES.iter().map(|rule| rule.name)
}

/// Every accepted `--ai` value in catalog order, ending with `all`.
pub fn supported_targets() -> Vec<&'static str> {
    concrete_targets().chain(std::iter::once(ALL)).collect()
}

/// Look up the rule for a concrete target.
///
/// Returns `None` for `all` and for unknown names.
pub fn rule(target: &str) -> Option<&'static TargetRule> {
    BUILTIN_RULES.iter().find(|rule| rule.name == target)
}

/// Check whether a normalized token is accepted (including `all`).
pub fn is_supported(token: &str) -> bool {
    token == ALL || rule(token).is_some()
}
