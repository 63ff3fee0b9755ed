//! Interactive configuration: asks for every value in turn instead of
//! reading a configuration document.
//!
//! Each question derives its default from earlier answers, so accepting
//! every default still yields a configuration that passes validation.

use crate::config::{AppSection, Configuration, DomainsSection, IosSection, ProjectSection};
use crate::error::Result;
use crate::prompt::Prompter;
use crate::validation::{
    CLIP_BUNDLE_PREFIX_RULE, CLIP_BUNDLE_SUFFIX_RULE, IDENTIFIER_PATTERN, MAIN_BUNDLE_PREFIX_RULE,
    START_URL_RULE, STRUCT_NAME_RULE,
};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use url::Url;

const BUNDLE_PREFIX_PATTERN: &str = r"^[a-z][a-z0-9]*(\.[a-z][a-z0-9]*)*$";
const DOMAIN_PATTERN: &str = r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*$";
const DEPLOYMENT_TARGET_PATTERN: &str = r"^\d+\.\d+$";

/// Answers collected so far, keyed by configuration field name.
pub type Answers = IndexMap<String, String>;

type Check = std::result::Result<(), String>;

/// One configuration value to ask for.
pub struct Question {
    pub key: &'static str,
    pub prompt: &'static str,
    pub default: fn(&Answers) -> String,
    pub validate: fn(&str, &Answers) -> Check,
}

fn answer<'a>(answers: &'a Answers, key: &str) -> &'a str {
    answers.get(key).map(String::as_str).unwrap_or_default()
}

fn is_match(pattern: &str, value: &str) -> bool {
    Regex::new(pattern).map(|re| re.is_match(value)).unwrap_or(false)
}

fn required(value: &str, what: &str) -> Check {
    if value.trim().is_empty() {
        return Err(format!("{what} is required"));
    }
    Ok(())
}

pub fn check_identifier(value: &str, what: &str) -> Check {
    required(value, what)?;
    if !is_match(IDENTIFIER_PATTERN, value) {
        return Err(format!("{what} must be a valid Swift identifier"));
    }
    Ok(())
}

pub fn check_bundle_prefix(value: &str) -> Check {
    required(value, "Bundle ID prefix")?;
    if !is_match(BUNDLE_PREFIX_PATTERN, value) {
        return Err("Use reverse domain notation, e.g. com.company".to_string());
    }
    Ok(())
}

pub fn check_main_bundle_id(value: &str, prefix: &str) -> Check {
    required(value, "Main bundle ID")?;
    if !value.starts_with(prefix) {
        return Err(MAIN_BUNDLE_PREFIX_RULE.to_string());
    }
    Ok(())
}

pub fn check_clip_bundle_id(value: &str, prefix: &str) -> Check {
    required(value, "Clip bundle ID")?;
    if !value.starts_with(prefix) {
        return Err(CLIP_BUNDLE_PREFIX_RULE.to_string());
    }
    if !value.ends_with(".Clip") {
        return Err(CLIP_BUNDLE_SUFFIX_RULE.to_string());
    }
    Ok(())
}

pub fn check_start_url(value: &str) -> Check {
    required(value, "Start URL")?;
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(_) => Err(START_URL_RULE.to_string()),
        Err(e) => Err(format!("Invalid URL: {e}")),
    }
}

pub fn check_domain(value: &str) -> Check {
    required(value, "Associated domain")?;
    if !is_match(DOMAIN_PATTERN, value) {
        return Err("Enter a domain name without scheme, e.g. example.com".to_string());
    }
    Ok(())
}

pub fn check_deployment_target(value: &str) -> Check {
    if !is_match(DEPLOYMENT_TARGET_PATTERN, value) {
        return Err("Use major.minor format, e.g. 16.0".to_string());
    }
    Ok(())
}

/// Host of `start_url`, or an empty string when it does not parse.
pub fn host_of(start_url: &str) -> String {
    Url::parse(start_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Ordered questions. Defaults and checks may read earlier answers.
pub fn questions() -> Vec<Question> {
    vec![
        Question {
            key: "projectName",
            prompt: "Project name (used for targets and files)",
            default: |_| "MyApp".to_string(),
            validate: |v, _| check_identifier(v, "Project name"),
        },
        Question {
            key: "displayName",
            prompt: "Display name (shown on the home screen)",
            default: |a| answer(a, "projectName").to_string(),
            validate: |v, _| required(v, "Display name"),
        },
        Question {
            key: "bundleIdPrefix",
            prompt: "Bundle ID prefix",
            default: |a| format!("com.example.{}", answer(a, "projectName").to_lowercase()),
            validate: |v, _| check_bundle_prefix(v),
        },
        Question {
            key: "mainBundleId",
            prompt: "Main app bundle ID",
            default: |a| answer(a, "bundleIdPrefix").to_string(),
            validate: |v, a| check_main_bundle_id(v, answer(a, "bundleIdPrefix")),
        },
        Question {
            key: "clipBundleId",
            prompt: "App clip bundle ID",
            default: |a| format!("{}.Clip", answer(a, "mainBundleId")),
            validate: |v, a| check_clip_bundle_id(v, answer(a, "bundleIdPrefix")),
        },
        Question {
            key: "structName",
            prompt: "App struct name",
            default: |a| format!("{}App", answer(a, "projectName")),
            validate: |v, _| check_identifier(v, "Struct name").map_err(|_| STRUCT_NAME_RULE.to_string()),
        },
        Question {
            key: "startURL",
            prompt: "Start URL loaded by the app",
            default: |_| "https://example.com".to_string(),
            validate: |v, _| check_start_url(v),
        },
        Question {
            key: "associatedDomain",
            prompt: "Associated domain",
            default: |a| host_of(answer(a, "startURL")),
            validate: |v, _| check_domain(v),
        },
        Question {
            key: "version",
            prompt: "Version",
            default: |_| "1.0.0".to_string(),
            validate: |v, _| required(v, "Version"),
        },
        Question {
            key: "buildNumber",
            prompt: "Build number",
            default: |_| "1".to_string(),
            validate: |v, _| required(v, "Build number"),
        },
        Question {
            key: "deploymentTarget",
            prompt: "iOS deployment target",
            default: |_| "16.0".to_string(),
            validate: |v, _| check_deployment_target(v),
        },
        Question {
            key: "xcodeVersion",
            prompt: "Xcode version",
            default: |_| "15.0".to_string(),
            validate: |v, _| required(v, "Xcode version"),
        },
        Question {
            key: "mainTargetName",
            prompt: "Main target name",
            default: |a| answer(a, "projectName").to_string(),
            validate: |v, _| check_identifier(v, "Main target name"),
        },
        Question {
            key: "clipTargetName",
            prompt: "Clip target name",
            default: |a| format!("{}Clip", answer(a, "projectName")),
            validate: |v, _| check_identifier(v, "Clip target name"),
        },
    ]
}

/// Builds a configuration from a full set of answers. Target names equal to
/// their derived defaults are left unset.
pub fn config_from_answers(answers: &Answers) -> Configuration {
    let get = |key: &str| answer(answers, key).to_string();
    let name = get("projectName");
    let main_target = get("mainTargetName");
    let clip_target = get("clipTargetName");

    Configuration {
        project: ProjectSection {
            display_name: get("displayName"),
            bundle_id_prefix: get("bundleIdPrefix"),
            version: get("version"),
            build_number: get("buildNumber"),
            name: name.clone(),
        },
        app: AppSection {
            main_bundle_id: get("mainBundleId"),
            clip_bundle_id: get("clipBundleId"),
            struct_name: get("structName"),
            start_url: get("startURL"),
            main_target_name: (main_target != name).then_some(main_target),
            clip_target_name: (clip_target != format!("{name}Clip")).then_some(clip_target),
        },
        domains: DomainsSection { associated_domain: get("associatedDomain") },
        ios: IosSection {
            deployment_target: get("deploymentTarget"),
            xcode_version: get("xcodeVersion"),
        },
    }
}

/// Asks every question through `prompt` and returns the resulting configuration.
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails
pub fn prompt_for_config(prompt: &dyn Prompter) -> Result<Configuration> {
    let mut answers = Answers::new();
    for question in questions() {
        let default = (question.default)(&answers);
        let value = {
            let validate = |input: &str| (question.validate)(input, &answers);
            prompt.text(question.prompt.to_string(), default, &validate)?
        };
        debug!("{} = {}", question.key, value);
        answers.insert(question.key.to_string(), value);
    }
    Ok(config_from_answers(&answers))
}
