//! Common constants used throughout the generator.

/// Name of the generator executable, excluded when it sits inside the template.
pub const GENERATOR_NAME: &str = "generate-whitelabel";

/// Script name of the generator in templates that predate the binary.
pub const LEGACY_GENERATOR_SCRIPT: &str = "generate_whitelabel.py";

/// Configuration file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "whitelabel.config.json";

/// Paths never copied from the template into the output.
/// A leading `*` marks a suffix rule; anything else is a plain rule.
pub const EXCLUDE_PATTERNS: [&str; 13] = [
    ".git",
    ".gitignore",
    "*.xcodeproj",
    "*.xcworkspace",
    "DerivedData",
    ".DS_Store",
    "__pycache__",
    "*.pyc",
    GENERATOR_NAME,
    LEGACY_GENERATOR_SCRIPT,
    DEFAULT_CONFIG_FILE,
    "cyango.config.json",
    "WHITELABEL.md",
];

/// Project descriptor patched by the structural patcher.
pub const PROJECT_DESCRIPTOR: &str = "project.yml";

/// Target labels used by the template's project descriptor.
pub const TEMPLATE_MAIN_TARGET: &str = "MainApp";
pub const TEMPLATE_CLIP_TARGET: &str = "MainAppClip";

pub const ENTITLEMENTS_EXTENSION: &str = "entitlements";

/// Files receiving substitution after the descriptor and entitlements,
/// each with the variable keys it is allowed to see.
pub const FILES_TO_UPDATE: [(&str, &[&str]); 9] = [
    ("Info.plist", &["displayName"]),
    ("Info-Clip.plist", &["displayName"]),
    ("Sources/App/App.swift", &["structName", "associatedDomain"]),
    ("Sources/App/AppConfig.swift", &["startURL"]),
    ("Package.swift", &["projectName"]),
    ("privacy_policy.md", &["displayName"]),
    ("xtool-Info.plist", &["displayName"]),
    ("xtool.yml", &["mainBundleId"]),
    ("BUILD_INSTRUCTIONS.md", &["projectName"]),
];

/// Variables visible to the main app entitlements (template name).
pub const MAIN_ENTITLEMENTS_VARIABLES: &[&str] = &["associatedDomain"];

/// Variables visible to the app clip entitlements (template name).
pub const CLIP_ENTITLEMENTS_VARIABLES: &[&str] = &["mainBundleId", "associatedDomain"];

/// Variables visible to the project descriptor.
pub const DESCRIPTOR_VARIABLES: &[&str] = &[
    "projectName",
    "bundleIdPrefix",
    "mainBundleId",
    "clipBundleId",
    "version",
    "buildNumber",
    "deploymentTarget",
    "xcodeVersion",
];
