//! Configuration handling for the generator.
//! Loads the white-label configuration document (JSON, or YAML by extension)
//! and derives the target names used by the structural patcher.

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Parsed configuration document. Read-only once loaded.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Configuration {
    pub project: ProjectSection,
    pub app: AppSection,
    pub domains: DomainsSection,
    pub ios: IosSection,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    pub name: String,
    pub display_name: String,
    pub bundle_id_prefix: String,
    #[serde(deserialize_with = "string_or_number")]
    pub version: String,
    #[serde(deserialize_with = "string_or_number")]
    pub build_number: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppSection {
    pub main_bundle_id: String,
    pub clip_bundle_id: String,
    pub struct_name: String,
    #[serde(rename = "startURL")]
    pub start_url: String,
    #[serde(default)]
    pub main_target_name: Option<String>,
    #[serde(default)]
    pub clip_target_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainsSection {
    pub associated_domain: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IosSection {
    #[serde(deserialize_with = "string_or_number")]
    pub deployment_target: String,
    #[serde(deserialize_with = "string_or_number")]
    pub xcode_version: String,
}

/// Accepts `"1.0"` as well as `1.0`; numbers keep their written form (`17.0` stays `17.0`).
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}

/// Build target names: the main app and its companion app clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNames {
    pub main: String,
    pub clip: String,
}

impl Configuration {
    /// Resolves target names, defaulting to `name` and `name + "Clip"`.
    pub fn target_names(&self) -> TargetNames {
        let main =
            self.app.main_target_name.clone().unwrap_or_else(|| self.project.name.clone());
        let clip = self
            .app
            .clip_target_name
            .clone()
            .unwrap_or_else(|| format!("{}Clip", self.project.name));
        TargetNames { main, clip }
    }
}

/// Returns the candidate locations for a configuration path: first relative
/// to the current directory, then relative to the generator's home.
pub fn config_candidates<P: AsRef<Path>>(config_path: P, home_dir: &Path) -> Vec<PathBuf> {
    let config_path = config_path.as_ref();
    let cwd = std::env::current_dir().unwrap_or_default();
    let mut candidates = vec![cwd.join(config_path)];
    let fallback = home_dir.join(config_path);
    if !candidates.contains(&fallback) {
        candidates.push(fallback);
    }
    candidates
}

/// Finds the first existing configuration file among the candidates.
///
/// # Errors
/// * `Error::ConfigNotFound` if no candidate exists
pub fn resolve_config_path<P: AsRef<Path>>(config_path: P, home_dir: &Path) -> Result<PathBuf> {
    let config_path = config_path.as_ref();
    let candidates = config_candidates(config_path, home_dir);
    for candidate in &candidates {
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(Error::ConfigNotFound {
        path: config_path.display().to_string(),
        tried: candidates.iter().map(|c| c.display().to_string()).collect::<Vec<_>>().join(", "),
    })
}

fn is_yaml(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("yml") | Some("yaml"))
}

/// Parses configuration content. `source` is only used for error messages.
///
/// # Errors
/// * `Error::MalformedConfig` with the parser's line and column
pub fn parse_config(content: &str, source: &Path, yaml: bool) -> Result<Configuration> {
    let path = source.display().to_string();
    if yaml {
        serde_yaml::from_str(content).map_err(|e| {
            let (line, column) =
                e.location().map(|l| (l.line(), l.column())).unwrap_or((0, 0));
            Error::MalformedConfig { path, line, column, message: e.to_string() }
        })
    } else {
        serde_json::from_str(content).map_err(|e| Error::MalformedConfig {
            path,
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })
    }
}

/// Loads the configuration document.
///
/// # Arguments
/// * `config_path` - Path as given on the command line
/// * `home_dir` - Generator home, used when the path is not found from the current directory
///
/// # Returns
/// * `Result<(PathBuf, Configuration)>` - Resolved path and parsed configuration
pub fn load_config<P: AsRef<Path>>(
    config_path: P,
    home_dir: &Path,
) -> Result<(PathBuf, Configuration)> {
    let resolved = resolve_config_path(config_path, home_dir)?;
    debug!("Loading configuration from {}", resolved.display());
    let content = std::fs::read_to_string(&resolved)?;
    let config = parse_config(&content, &resolved, is_yaml(&resolved))?;
    Ok((resolved, config))
}
