// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::io::Write;
use yare::parameterized;

#[test]
fn empty_file_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.bind.port(), 8000);
    assert!(config.seed);
    assert!(!config.fields.strict);
}

#[test]
fn parse_full_file() {
    let config = Config::parse(
        r#"
bind = "127.0.0.1:9100"
seed = false

[fields]
strict = true
"#,
    )
    .unwrap();
    assert_eq!(config.bind, "127.0.0.1:9100".parse().unwrap());
    assert!(!config.seed);
    assert!(config.fields.strict);
    assert!(config.service_config().strict_fields);
}

#[parameterized(
    unknown_key = { "port = 80" },
    bad_bind = { "bind = \"not an address\"" },
    wrong_type = { "seed = \"yes\"" },
    unknown_field_key = { "[fields]\nloose = true" },
)]
fn parse_rejects_bad_config(text: &str) {
    let err = Config::parse(text).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = false").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert!(!config.seed);
}

#[test]
fn load_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("missing.toml")));
}

#[test]
fn load_or_default_without_path() {
    assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
}

#[test]
fn overrides_take_precedence() {
    let config = Config::default().with_overrides(&Overrides {
        bind: Some("127.0.0.1:7000".parse().unwrap()),
        no_seed: true,
        strict: true,
    });
    assert_eq!(config.bind.port(), 7000);
    assert!(!config.seed);
    assert!(config.fields.strict);
}

#[test]
fn empty_overrides_keep_file_values() {
    let file = Config::parse("seed = false\n[fields]\nstrict = true").unwrap();
    let config = file.clone().with_overrides(&Overrides::default());
    assert_eq!(config, file);
}
