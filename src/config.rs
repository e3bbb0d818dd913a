//! Session configuration: storage keys, public destinations, identity endpoint.
//!
//! The WASM bundle has no runtime environment, so values are captured at
//! build time with `option_env!` and parsed through the same lookup-based
//! constructor the tests drive directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ConfigError;

pub const DEFAULT_SESSION_KEY: &str = "auth-session";
pub const DEFAULT_USER_KEY: &str = "auth-user";
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
pub const DEFAULT_REGISTER_PATH: &str = "/auth/register";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_AUTH_URL: &str = "http://localhost:54321";

/// The two independent durable-storage slots backing a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Slot holding the serialized `Token`.
    pub session: String,
    /// Slot holding the serialized `User`.
    pub user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { session: DEFAULT_SESSION_KEY.to_owned(), user: DEFAULT_USER_KEY.to_owned() }
    }
}

/// Hosted identity provider endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Public (anon) API key sent as the `apikey` header.
    pub anon_key: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_AUTH_URL.to_owned(), anon_key: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub keys: StorageKeys,
    /// Canonical destination for unauthenticated access to gated views.
    pub login_path: String,
    pub register_path: String,
    /// Destination after login and logout.
    pub home_path: String,
    pub identity: IdentityConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            register_path: DEFAULT_REGISTER_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            identity: IdentityConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `MARQUEE_SESSION_KEY`: default `auth-session`
    /// - `MARQUEE_USER_KEY`: default `auth-user`
    /// - `MARQUEE_LOGIN_PATH`: default `/auth/login`
    /// - `MARQUEE_REGISTER_PATH`: default `/auth/register`
    /// - `MARQUEE_HOME_PATH`: default `/`
    /// - `MARQUEE_AUTH_URL`: default `http://localhost:54321`
    /// - `MARQUEE_AUTH_ANON_KEY`: default empty
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a baked-in value is blank, a path is
    /// relative, or both storage keys are equal.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| {
            let value = match var {
                "MARQUEE_SESSION_KEY" => option_env!("MARQUEE_SESSION_KEY"),
                "MARQUEE_USER_KEY" => option_env!("MARQUEE_USER_KEY"),
                "MARQUEE_LOGIN_PATH" => option_env!("MARQUEE_LOGIN_PATH"),
                "MARQUEE_REGISTER_PATH" => option_env!("MARQUEE_REGISTER_PATH"),
                "MARQUEE_HOME_PATH" => option_env!("MARQUEE_HOME_PATH"),
                "MARQUEE_AUTH_URL" => option_env!("MARQUEE_AUTH_URL"),
                "MARQUEE_AUTH_ANON_KEY" => option_env!("MARQUEE_AUTH_ANON_KEY"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`SessionConfig::from_build_env`].
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let session = non_empty(&lookup, "MARQUEE_SESSION_KEY", DEFAULT_SESSION_KEY)?;
        let user = non_empty(&lookup, "MARQUEE_USER_KEY", DEFAULT_USER_KEY)?;
        if session == user {
            return Err(ConfigError::DuplicateStorageKey { key: session });
        }

        let login_path = app_path(&lookup, "MARQUEE_LOGIN_PATH", DEFAULT_LOGIN_PATH)?;
        let register_path = app_path(&lookup, "MARQUEE_REGISTER_PATH", DEFAULT_REGISTER_PATH)?;
        let home_path = app_path(&lookup, "MARQUEE_HOME_PATH", DEFAULT_HOME_PATH)?;

        let base_url = non_empty(&lookup, "MARQUEE_AUTH_URL", DEFAULT_AUTH_URL)?
            .trim_end_matches('/')
            .to_owned();
        let anon_key = lookup("MARQUEE_AUTH_ANON_KEY").unwrap_or_default();

        Ok(Self {
            keys: StorageKeys { session, user },
            login_path,
            register_path,
            home_path,
            identity: IdentityConfig { base_url, anon_key },
        })
    }
}

fn non_empty<F>(lookup: &F, var: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default.to_owned()),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyValue { var });
            }
            Ok(trimmed.to_owned())
        }
    }
}

fn app_path<F>(lookup: &F, var: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = non_empty(lookup, var, default)?;
    if !value.starts_with('/') {
        return Err(ConfigError::InvalidPath { var, value });
    }
    Ok(value)
}
