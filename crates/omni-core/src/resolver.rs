//! Target resolution
//!
//! Turns raw `--ai` tokens into a validated, deduplicated [`Selection`].
//! Resolution is pure: no filesystem or process access.

use serde::Serialize;

use crate::targets::{self, TargetRule};
use crate::{Error, Result};

/// Ordered, deduplicated set of concrete targets chosen for an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    targets: Vec<&'static str>,
}

impl Selection {
    /// Selection containing every concrete target in catalog order.
    pub fn all() -> Self {
        Self {
            targets: targets::concrete_targets().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Target names in selection order.
    pub fn names(&self) -> &[&'static str] {
        &self.targets
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.targets.iter().copied()
    }

    /// Rules for the selected targets, in selection order.
    pub fn rules(&self) -> impl Iterator<Item = &'static TargetRule> + '_ {
        self.targets.iter().filter_map(|name| targets::rule(name))
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.targets.join(", "))
    }
}

/// Normalize a raw token: trim surrounding whitespace and lowercase.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Resolve raw target tokens into a [`Selection`].
///
/// - Every token is normalized; any unsupported token fails the whole call.
/// - If any token is `all`, the result is the full catalog.
/// - Otherwise duplicates are dropped, keeping first-occurrence order.
/// - No tokens resolve to an empty selection.
pub fn resolve<I, S>(tokens: I) -> Result<Selection>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selected: Vec<&'static str> = Vec::new();
    let mut wants_all = false;

    for token in tokens {
        let token = normalize(token.as_ref());
        if !targets::is_supported(&token) {
            return Err(Error::UnknownTarget { value: token });
        }

        match targets::rule(&token) {
            Some(rule) if !selected.contains(&rule.name) => selected.push(rule.name),
            Some(_) => {}
            None => wants_all = true,
        }
    }

    if wants_all {
        return Ok(Selection::all());
    }

    Ok(Selection { targets: selected })
}
