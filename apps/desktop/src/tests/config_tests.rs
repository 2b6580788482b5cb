use super::{apply_env, apply_file, load_settings, Settings};

use std::{collections::HashMap, io::Write};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_point_at_local_backend() {
    let settings = Settings::default();
    assert_eq!(settings.api_base_url, "http://127.0.0.1:8080");
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file(
        &mut settings,
        "api_base_url = \"https://journal.example.com\"\nlog_filter = \"debug\"\n",
    )
    .expect("parse");
    assert_eq!(settings.api_base_url, "https://journal.example.com");
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn malformed_file_is_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "api_base_url = [").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_short_name() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_of(&[
            ("MOOD_JOURNAL_API_URL", "http://short:1"),
            ("APP__API_BASE_URL", "http://prefixed:2"),
            ("MOOD_JOURNAL_LOG", "warn"),
        ]),
    );
    assert_eq!(settings.api_base_url, "http://prefixed:2");
    assert_eq!(settings.log_filter, "warn");
}

#[test]
fn explicit_config_file_and_flag_are_layered() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "api_base_url = \"http://from-file:9000/\"").expect("write");
    writeln!(file, "log_filter = \"trace\"").expect("write");

    let from_file = load_settings(Some(file.path()), None).expect("load");
    assert_eq!(from_file.log_filter, "trace");

    let from_flag =
        load_settings(Some(file.path()), Some("https://flag.example.com/")).expect("load");
    assert_eq!(from_flag.api_base_url, "https://flag.example.com");
    assert_eq!(from_flag.log_filter, "trace");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    assert!(load_settings(Some(missing.as_path()), None).is_err());
}

#[test]
fn non_http_base_url_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("journal.toml");
    std::fs::write(&path, "api_base_url = \"ftp://files.example.com\"\n").expect("write");
    assert!(load_settings(Some(path.as_path()), Some("ftp://files.example.com")).is_err());
}
