//! Placeholder substitution for template files.
//! Replaces `${key}` tokens with resolved values. Flat keys only: no
//! escaping, no nesting, no re-scanning of inserted values.

use crate::config::Configuration;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Placeholder key to replacement value, in substitution order.
pub type VariableSet = IndexMap<String, String>;

/// Builds the complete variable set from a configuration.
pub fn variables_from_config(config: &Configuration) -> VariableSet {
    let project = &config.project;
    let app = &config.app;
    [
        ("projectName", &project.name),
        ("displayName", &project.display_name),
        ("bundleIdPrefix", &project.bundle_id_prefix),
        ("mainBundleId", &app.main_bundle_id),
        ("clipBundleId", &app.clip_bundle_id),
        ("structName", &app.struct_name),
        ("startURL", &app.start_url),
        ("associatedDomain", &config.domains.associated_domain),
        ("version", &project.version),
        ("buildNumber", &project.build_number),
        ("deploymentTarget", &config.ios.deployment_target),
        ("xcodeVersion", &config.ios.xcode_version),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.clone()))
    .collect()
}

/// Restricts `variables` to `keys`, in the order of `keys`. Unknown keys are ignored.
pub fn select_variables(variables: &VariableSet, keys: &[&str]) -> VariableSet {
    keys.iter()
        .filter_map(|k| variables.get(*k).map(|v| (k.to_string(), v.clone())))
        .collect()
}

/// Replaces every `${key}` occurrence for each key in `variables`.
/// Placeholders without a matching key are left untouched.
pub fn substitute(text: &str, variables: &VariableSet) -> String {
    let mut content = text.to_string();
    for (key, value) in variables {
        content = content.replace(&format!("${{{key}}}"), value);
    }
    content
}

/// Lists the distinct `${...}` tokens still present in `text`.
pub fn unresolved_placeholders(text: &str) -> Result<Vec<String>> {
    let placeholder = Regex::new(r"\$\{[^}]+\}")?;
    let mut found: Vec<String> = Vec::new();
    for m in placeholder.find_iter(text) {
        if !found.iter().any(|f| f == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }
    Ok(found)
}

/// Applies substitution to one file of the output tree, in place.
///
/// # Errors
/// * `Error::MissingTargetFile` if the file does not exist; callers treat it as a warning
/// * `Error::IoError` if reading or writing fails
pub fn update_file(output_root: &Path, relative: &str, variables: &VariableSet) -> Result<()> {
    let full_path = output_root.join(relative);
    if !full_path.is_file() {
        return Err(Error::MissingTargetFile { path: relative.to_string() });
    }

    let content = fs::read_to_string(&full_path)?;
    let rendered = substitute(&content, variables);
    if rendered != content {
        fs::write(&full_path, rendered)?;
    }
    debug!("Substituted {:?} in {}", variables.keys().collect::<Vec<_>>(), relative);
    Ok(())
}
