#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use whitelabel::config::{parse_config, Configuration};
use whitelabel::error::Result;
use whitelabel::prompt::{Prompter, Validator};

/// Prompter answering confirmations with a fixed reply and text questions
/// from a queue. An empty queued answer, or an empty queue, takes the default.
/// Answers the validator rejects are recorded and the next one is tried.
pub struct ScriptedPrompter {
    answer: bool,
    pub asked: Cell<usize>,
    texts: RefCell<VecDeque<String>>,
    pub rejected: RefCell<Vec<(String, String)>>,
}

impl ScriptedPrompter {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
            texts: RefCell::new(VecDeque::new()),
            rejected: RefCell::new(Vec::new()),
        }
    }

    pub fn with_texts(texts: &[&str]) -> Self {
        let prompter = Self::new(true);
        prompter.texts.borrow_mut().extend(texts.iter().map(|t| t.to_string()));
        prompter
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, skip: bool, _prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        self.asked.set(self.asked.get() + 1);
        Ok(self.answer)
    }

    fn text(&self, _prompt: String, default: String, validate: Validator<'_>) -> Result<String> {
        loop {
            let value = match self.texts.borrow_mut().pop_front() {
                Some(answer) if !answer.is_empty() => answer,
                _ => default.clone(),
            };
            match validate(&value) {
                Ok(()) => return Ok(value),
                Err(message) => {
                    if value == default && self.texts.borrow().is_empty() {
                        panic!("default {value:?} rejected: {message}");
                    }
                    self.rejected.borrow_mut().push((value, message));
                }
            }
        }
    }
}

pub fn acme_json() -> serde_json::Value {
    serde_json::json!({
        "project": {
            "name": "Acme",
            "displayName": "Acme AR",
            "bundleIdPrefix": "com.acme",
            "version": "1.0.0",
            "buildNumber": "1"
        },
        "app": {
            "mainBundleId": "com.acme.app",
            "clipBundleId": "com.acme.app.Clip",
            "structName": "AcmeApp",
            "startURL": "https://acme.example.com"
        },
        "domains": { "associatedDomain": "acme.example.com" },
        "ios": { "deploymentTarget": "17.0", "xcodeVersion": "15.3" }
    })
}

pub fn config_from(value: &serde_json::Value) -> Configuration {
    parse_config(&value.to_string(), Path::new("test.json"), false).unwrap()
}

pub fn acme_config() -> Configuration {
    config_from(&acme_json())
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub const DESCRIPTOR: &str = "name: ${projectName}
options:
  bundleIdPrefix: ${bundleIdPrefix}
  deploymentTarget:
    iOS: ${deploymentTarget}
  xcodeVersion: \"${xcodeVersion}\"
targets:
  MainApp:
    type: application
    dependencies:
      - target: MainAppClip
    settings:
      PRODUCT_BUNDLE_IDENTIFIER: ${mainBundleId}
      MARKETING_VERSION: ${version}
      CURRENT_PROJECT_VERSION: ${buildNumber}
      CODE_SIGN_ENTITLEMENTS: \"MainApp.entitlements\"
  MainAppClip:
    type: application.on-demand-install-capable
    settings:
      PRODUCT_BUNDLE_IDENTIFIER: ${clipBundleId}
      CODE_SIGN_ENTITLEMENTS: \"MainAppClip.entitlements\"
";

/// Writes a small but complete app template into `root`.
pub fn write_template(root: &Path) {
    write(root, "project.yml", DESCRIPTOR);
    write(root, "MainApp.entitlements", "<string>applinks:${associatedDomain}</string>\n");
    write(
        root,
        "MainAppClip.entitlements",
        "<string>${mainBundleId}</string>\n<string>appclips:${associatedDomain}</string>\n",
    );
    write(root, "Info.plist", "<string>${displayName}</string>\n");
    write(root, "Info-Clip.plist", "<string>${displayName}</string>\n");
    write(root, "Sources/App/App.swift", "struct ${structName}: App { let d = \"${associatedDomain}\" }\n");
    write(root, "Sources/App/AppConfig.swift", "let startURL = \"${startURL}\"\n");
    write(root, "Package.swift", "name: \"${projectName}\"\n");
    write(root, "privacy_policy.md", "# ${displayName} privacy\n");
    write(root, "xtool-Info.plist", "<string>${displayName}</string>\n");
    write(root, "xtool.yml", "bundleID: ${mainBundleId}\n");
    write(root, "BUILD_INSTRUCTIONS.md", "Build ${projectName}\n");
    write(root, ".git/HEAD", "ref: refs/heads/main\n");
    write(root, "Old.xcodeproj/project.pbxproj", "// generated\n");
    write(root, "whitelabel.config.json", "{}");
    write(root, "WHITELABEL.md", "docs");
}
