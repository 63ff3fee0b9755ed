mod common;

use common::ScriptedPrompter;
use whitelabel::interactive::prompt_for_config;
use whitelabel::validation::{validate_config, STRUCT_NAME_RULE};

// Question order: projectName, displayName, bundleIdPrefix, mainBundleId,
// clipBundleId, structName, startURL, associatedDomain, version, buildNumber,
// deploymentTarget, xcodeVersion, mainTargetName, clipTargetName.

#[test]
fn test_defaults_derive_from_earlier_answers() {
    let prompt = ScriptedPrompter::with_texts(&["Acme", "", "com.acme", "", "", "", "https://acme.example.com/start"]);

    let config = prompt_for_config(&prompt).unwrap();

    assert_eq!(config.project.name, "Acme");
    assert_eq!(config.project.display_name, "Acme");
    assert_eq!(config.app.main_bundle_id, "com.acme");
    assert_eq!(config.app.clip_bundle_id, "com.acme.Clip");
    assert_eq!(config.app.struct_name, "AcmeApp");
    assert_eq!(config.domains.associated_domain, "acme.example.com");
    assert_eq!(config.project.version, "1.0.0");
    assert_eq!(config.project.build_number, "1");
    assert_eq!(config.ios.deployment_target, "16.0");
    assert_eq!(config.ios.xcode_version, "15.0");
    assert_eq!(config.app.main_target_name, None);
    assert_eq!(config.app.clip_target_name, None);
    assert!(validate_config(&config).is_ok());
    assert!(prompt.rejected.borrow().is_empty());
}

#[test]
fn test_all_defaults_pass_validation() {
    let prompt = ScriptedPrompter::with_texts(&[]);

    let config = prompt_for_config(&prompt).unwrap();

    assert_eq!(config.project.name, "MyApp");
    assert_eq!(config.project.bundle_id_prefix, "com.example.myapp");
    assert_eq!(config.domains.associated_domain, "example.com");
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_invalid_answers_are_asked_again() {
    let prompt = ScriptedPrompter::with_texts(&[
        "Acme",
        "Acme AR",
        "Com.Acme",
        "com.acme",
        "org.acme.app",
        "com.acme.app",
        "com.acme.app",
        "com.acme.app.Clip",
        "1Acme",
        "AcmeApp",
    ]);

    let config = prompt_for_config(&prompt).unwrap();

    assert_eq!(config.project.bundle_id_prefix, "com.acme");
    assert_eq!(config.app.main_bundle_id, "com.acme.app");
    assert_eq!(config.app.clip_bundle_id, "com.acme.app.Clip");
    assert_eq!(config.app.struct_name, "AcmeApp");

    let rejected: Vec<String> = prompt.rejected.borrow().iter().map(|(v, _)| v.clone()).collect();
    assert_eq!(rejected, vec!["Com.Acme", "org.acme.app", "com.acme.app", "1Acme"]);
    assert_eq!(prompt.rejected.borrow()[3].1, STRUCT_NAME_RULE);
}

#[test]
fn test_custom_target_names_are_kept() {
    let mut answers = vec!["Acme", "", "com.acme"];
    // mainBundleId through xcodeVersion
    answers.extend([""; 9]);
    answers.extend(["Shop", "ShopMini"]);
    let prompt = ScriptedPrompter::with_texts(&answers);

    let config = prompt_for_config(&prompt).unwrap();

    assert_eq!(config.app.main_target_name.as_deref(), Some("Shop"));
    assert_eq!(config.app.clip_target_name.as_deref(), Some("ShopMini"));
    assert_eq!(config.target_names().clip, "ShopMini");
}
