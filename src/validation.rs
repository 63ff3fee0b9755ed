//! Cross-field checks on a loaded configuration.
//! All rules run; violations are reported together.

use crate::config::Configuration;
use crate::error::{Error, Result};
use regex::Regex;

/// Identifier syntax required for the generated app struct.
pub(crate) const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

pub const MAIN_BUNDLE_PREFIX_RULE: &str = "mainBundleId must start with bundleIdPrefix";
pub const CLIP_BUNDLE_PREFIX_RULE: &str = "clipBundleId must start with bundleIdPrefix";
pub const CLIP_BUNDLE_SUFFIX_RULE: &str = "clipBundleId should end with '.Clip'";
pub const STRUCT_NAME_RULE: &str = "structName must be a valid Swift identifier";
pub const START_URL_RULE: &str = "startURL must start with http:// or https://";

/// Returns the description of every violated rule, in rule order.
pub fn collect_violations(config: &Configuration) -> Result<Vec<String>> {
    let prefix = &config.project.bundle_id_prefix;
    let app = &config.app;
    let identifier = Regex::new(IDENTIFIER_PATTERN)?;

    let checks = [
        (app.main_bundle_id.starts_with(prefix.as_str()), MAIN_BUNDLE_PREFIX_RULE),
        (app.clip_bundle_id.starts_with(prefix.as_str()), CLIP_BUNDLE_PREFIX_RULE),
        (app.clip_bundle_id.ends_with(".Clip"), CLIP_BUNDLE_SUFFIX_RULE),
        (identifier.is_match(&app.struct_name), STRUCT_NAME_RULE),
        (
            app.start_url.starts_with("http://") || app.start_url.starts_with("https://"),
            START_URL_RULE,
        ),
    ];

    Ok(checks
        .into_iter()
        .filter(|(passed, _)| !passed)
        .map(|(_, rule)| rule.to_string())
        .collect())
}

/// Gate run before any filesystem mutation.
///
/// # Errors
/// * `Error::ValidationFailed` listing every violated rule
pub fn validate_config(config: &Configuration) -> Result<()> {
    let violations = collect_violations(config)?;
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::ValidationFailed(violations))
    }
}
