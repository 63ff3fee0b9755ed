//! Exclusion rules deciding which template paths never reach the output.
//!
//! Matching is deliberately coarse: a plain rule excludes any path whose
//! template-relative form contains it, or whose own name equals it. A rule
//! starting with `*` excludes relative paths ending with the remainder.

use crate::constants::EXCLUDE_PATTERNS;
use std::path::Path;

/// A single exclusion rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionRule {
    /// `*suffix`: the relative path ends with `suffix`.
    Suffix(String),
    /// The relative path contains the literal, or the name equals it.
    Plain(String),
}

impl ExclusionRule {
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_prefix('*') {
            Some(suffix) => Self::Suffix(suffix.to_string()),
            None => Self::Plain(pattern.to_string()),
        }
    }

    fn matches(&self, relative: &str, name: &str) -> bool {
        match self {
            Self::Suffix(suffix) => relative.ends_with(suffix.as_str()),
            Self::Plain(literal) => relative.contains(literal.as_str()) || name == literal.as_str(),
        }
    }
}

/// Ordered set of exclusion rules. Any match excludes.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    rules: Vec<ExclusionRule>,
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(EXCLUDE_PATTERNS)
    }
}

impl ExclusionFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rules = patterns.into_iter().map(|p| ExclusionRule::parse(p.as_ref())).collect();
        Self { rules }
    }

    /// Returns true when `path` must not be copied.
    ///
    /// `path` is compared in its `template_root`-relative form, using `/` as
    /// separator. Paths outside the root are compared as given.
    pub fn should_exclude<P: AsRef<Path>, R: AsRef<Path>>(&self, path: P, template_root: R) -> bool {
        let path = path.as_ref();
        let relative = path.strip_prefix(template_root.as_ref()).unwrap_or(path);
        let relative = relative.to_string_lossy().replace('\\', "/");
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();

        self.rules.iter().any(|rule| rule.matches(&relative, &name))
    }
}
