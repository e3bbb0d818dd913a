use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |var| map.get(var).cloned()
}

#[test]
fn from_vars_defaults_when_nothing_set() {
    let cfg = SessionConfig::from_vars(|_| None).unwrap();
    assert_eq!(cfg, SessionConfig::default());
    assert_eq!(cfg.keys.session, "auth-session");
    assert_eq!(cfg.keys.user, "auth-user");
    assert_eq!(cfg.login_path, "/auth/login");
    assert_eq!(cfg.register_path, "/auth/register");
    assert_eq!(cfg.home_path, "/");
}

#[test]
fn from_vars_applies_overrides_and_trims_base_url() {
    let cfg = SessionConfig::from_vars(lookup_from(&[
        ("MARQUEE_SESSION_KEY", "tok"),
        ("MARQUEE_USER_KEY", "who"),
        ("MARQUEE_LOGIN_PATH", "/auth/register"),
        ("MARQUEE_AUTH_URL", "https://project.example.test/"),
        ("MARQUEE_AUTH_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(cfg.keys, StorageKeys { session: "tok".to_owned(), user: "who".to_owned() });
    assert_eq!(cfg.login_path, "/auth/register");
    assert_eq!(cfg.identity.base_url, "https://project.example.test");
    assert_eq!(cfg.identity.anon_key, "anon");
}

#[test]
fn from_vars_rejects_shared_storage_key() {
    let err = SessionConfig::from_vars(lookup_from(&[("MARQUEE_USER_KEY", "auth-session")])).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateStorageKey { key: "auth-session".to_owned() });
}

#[test]
fn from_vars_rejects_relative_login_path() {
    let err = SessionConfig::from_vars(lookup_from(&[("MARQUEE_LOGIN_PATH", "login")])).unwrap_err();
    assert!(err.to_string().contains("must start with '/'"));
}

#[test]
fn from_vars_reads_register_path() {
    let cfg = SessionConfig::from_vars(lookup_from(&[("MARQUEE_REGISTER_PATH", "/join")])).unwrap();
    assert_eq!(cfg.register_path, "/join");
    let err = SessionConfig::from_vars(lookup_from(&[("MARQUEE_REGISTER_PATH", "join")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPath { var: "MARQUEE_REGISTER_PATH", value: "join".to_owned() });
}

#[test]
fn from_vars_rejects_blank_value() {
    let err = SessionConfig::from_vars(lookup_from(&[("MARQUEE_USER_KEY", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyValue { var: "MARQUEE_USER_KEY" });
}

#[test]
fn from_build_env_without_overrides_matches_default() {
    // Build-time vars are unset in the test build.
    if option_env!("MARQUEE_SESSION_KEY").is_none() && option_env!("MARQUEE_LOGIN_PATH").is_none() {
        let cfg = SessionConfig::from_build_env().unwrap();
        assert_eq!(cfg.keys, StorageKeys::default());
    }
}
