use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use whitelabel::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("generate-whitelabel")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_args_uses_default_config() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.config_path(), PathBuf::from("whitelabel.config.json"));
    assert!(parsed.output.is_none());
    assert!(!parsed.skip_overwrite_check);
    assert!(!parsed.verbose);
    assert!(!parsed.interactive);
}

#[test]
fn test_positional_config() {
    let parsed = Args::try_parse_from(make_args(&["acme.json"])).unwrap();
    assert_eq!(parsed.config_path(), PathBuf::from("acme.json"));
}

#[test]
fn test_config_file_flag_takes_precedence() {
    let parsed = Args::try_parse_from(make_args(&["acme.json", "-f", "other.json"])).unwrap();
    assert_eq!(parsed.config_path(), PathBuf::from("other.json"));

    let parsed =
        Args::try_parse_from(make_args(&["--config-file", "other.json", "acme.json"])).unwrap();
    assert_eq!(parsed.config_path(), PathBuf::from("other.json"));
}

#[test]
fn test_all_flags() {
    let args = make_args(&["-o", "./out", "-t", "./template", "--yes", "--verbose"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.output, Some(PathBuf::from("./out")));
    assert_eq!(parsed.template_dir(Path::new("/home")), PathBuf::from("./template"));
    assert!(parsed.skip_overwrite_check);
    assert!(parsed.verbose);
}

#[test]
fn test_template_defaults_to_home() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert_eq!(parsed.template_dir(Path::new("/opt/gen")), PathBuf::from("/opt/gen"));
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["a.json", "b.json"])).is_err());
}

#[test]
fn test_interactive_flag() {
    let parsed = Args::try_parse_from(make_args(&["-i", "-o", "./out"])).unwrap();
    assert!(parsed.interactive);

    let parsed = Args::try_parse_from(make_args(&["--interactive"])).unwrap();
    assert!(parsed.interactive);
}

#[test]
fn test_interactive_conflicts_with_config_file() {
    assert!(Args::try_parse_from(make_args(&["-i", "acme.json"])).is_err());
    assert!(Args::try_parse_from(make_args(&["-i", "-f", "acme.json"])).is_err());
}
