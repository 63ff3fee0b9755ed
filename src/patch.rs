//! Structural edits on the project descriptor and entitlement renames.
//!
//! The descriptor is patched by an explicit list of operations applied in
//! order, rather than free-form text surgery.

use crate::config::TargetNames;
use crate::constants::{ENTITLEMENTS_EXTENSION, TEMPLATE_CLIP_TARGET, TEMPLATE_MAIN_TARGET};
use crate::error::{Error, Result};
use crate::renderer::{substitute, VariableSet};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// One edit on descriptor text.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOp {
    /// `${key}` placeholder substitution.
    Substitute(VariableSet),
    /// Replaces `from` with `to` only where a line starts with `from`.
    LineAnchored { from: String, to: String },
    /// Replaces every occurrence of `from` anywhere.
    Literal { from: String, to: String },
}

impl PatchOp {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::Substitute(variables) => substitute(text, variables),
            Self::LineAnchored { from, to } => text
                .split_inclusive('\n')
                .map(|line| match line.strip_prefix(from.as_str()) {
                    Some(rest) => format!("{to}{rest}"),
                    None => line.to_string(),
                })
                .collect(),
            Self::Literal { from, to } => text.replace(from.as_str(), to),
        }
    }
}

/// `{target}.entitlements`
pub fn entitlements_file(target: &str) -> String {
    format!("{target}.{ENTITLEMENTS_EXTENSION}")
}

/// Builds the ordered operation list for the project descriptor.
///
/// Flat substitution runs first, then target section headers (line-anchored,
/// two-space indent), then the clip dependency reference, then the two
/// code-signing entitlement references.
pub fn descriptor_patches(variables: VariableSet, targets: &TargetNames) -> Vec<PatchOp> {
    let entitlements = |target: &str| format!("CODE_SIGN_ENTITLEMENTS: \"{}\"", entitlements_file(target));

    vec![
        PatchOp::Substitute(variables),
        PatchOp::LineAnchored {
            from: format!("  {TEMPLATE_MAIN_TARGET}:"),
            to: format!("  {}:", targets.main),
        },
        PatchOp::LineAnchored {
            from: format!("  {TEMPLATE_CLIP_TARGET}:"),
            to: format!("  {}:", targets.clip),
        },
        PatchOp::Literal {
            from: format!("      - target: {TEMPLATE_CLIP_TARGET}"),
            to: format!("      - target: {}", targets.clip),
        },
        PatchOp::Literal {
            from: entitlements(TEMPLATE_MAIN_TARGET),
            to: entitlements(&targets.main),
        },
        PatchOp::Literal {
            from: entitlements(TEMPLATE_CLIP_TARGET),
            to: entitlements(&targets.clip),
        },
    ]
}

/// Applies `patches` in order.
pub fn apply_patches(text: &str, patches: &[PatchOp]) -> String {
    patches.iter().fold(text.to_string(), |content, op| op.apply(&content))
}

/// Patches the descriptor at `output_root/relative` in place.
///
/// # Errors
/// * `Error::MissingTargetFile` if the descriptor is absent
pub fn patch_descriptor(output_root: &Path, relative: &str, patches: &[PatchOp]) -> Result<()> {
    let path = output_root.join(relative);
    if !path.is_file() {
        return Err(Error::MissingTargetFile { path: relative.to_string() });
    }
    let content = fs::read_to_string(&path)?;
    fs::write(&path, apply_patches(&content, patches))?;
    debug!("Applied {} patch operations to {}", patches.len(), relative);
    Ok(())
}

/// Result of renaming one entitlements file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    /// Source absent or destination already present.
    Skipped,
}

/// Renames `{template}.entitlements` to `{target}.entitlements`.
/// Idempotent: skipped when the source is missing or the destination exists.
pub fn rename_entitlements(output_root: &Path, template: &str, target: &str) -> Result<RenameOutcome> {
    let from = output_root.join(entitlements_file(template));
    let to = output_root.join(entitlements_file(target));
    if !from.exists() || to.exists() {
        debug!("Skipping rename of {}", from.display());
        return Ok(RenameOutcome::Skipped);
    }
    fs::rename(&from, &to)?;
    Ok(RenameOutcome::Renamed { from, to })
}

/// Renames both entitlement files for the resolved target names.
pub fn rename_all_entitlements(output_root: &Path, targets: &TargetNames) -> Result<Vec<RenameOutcome>> {
    Ok(vec![
        rename_entitlements(output_root, TEMPLATE_MAIN_TARGET, &targets.main)?,
        rename_entitlements(output_root, TEMPLATE_CLIP_TARGET, &targets.clip)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = "name: ${projectName}
targets:
  MainApp:
    type: application
    dependencies:
      - target: MainAppClip
    settings:
      CODE_SIGN_ENTITLEMENTS: \"MainApp.entitlements\"
  MainAppClip:
    settings:
      CODE_SIGN_ENTITLEMENTS: \"MainAppClip.entitlements\"
  NotMainApp:
    type: framework
";

    fn targets() -> TargetNames {
        TargetNames { main: "Acme".to_string(), clip: "AcmeClip".to_string() }
    }

    #[test]
    fn test_line_anchored_only_matches_line_start() {
        let op = PatchOp::LineAnchored { from: "  MainApp:".to_string(), to: "  Acme:".to_string() };
        assert_eq!(op.apply("  MainApp:\n  XMainApp:\n    MainApp:\n"), "  Acme:\n  XMainApp:\n    MainApp:\n");
    }

    #[test]
    fn test_descriptor_patches() {
        let mut vars = VariableSet::new();
        vars.insert("projectName".to_string(), "Acme".to_string());
        let patched = apply_patches(DESCRIPTOR, &descriptor_patches(vars, &targets()));

        assert!(patched.starts_with("name: Acme\n"));
        assert!(patched.contains("\n  Acme:\n"));
        assert!(patched.contains("\n  AcmeClip:\n"));
        assert!(patched.contains("      - target: AcmeClip\n"));
        assert!(patched.contains("CODE_SIGN_ENTITLEMENTS: \"Acme.entitlements\""));
        assert!(patched.contains("CODE_SIGN_ENTITLEMENTS: \"AcmeClip.entitlements\""));
        assert!(patched.contains("\n  NotMainApp:\n"));
        assert!(!patched.contains("MainAppClip"));
    }
}
