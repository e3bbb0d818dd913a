//! Session data model: the authenticated user and their access token.
//!
//! DESIGN
//! ======
//! `User` mirrors the hosted auth backend's user payload so a login response
//! can be stored verbatim; every field but `id` defaults when absent.
//! `Token` keeps the camelCase `{accessToken, expiresAt}` shape persisted in
//! durable storage.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Lifetime applied when the identity provider omits an expiry.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Authenticated identity as returned by the identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_confirmed_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_metadata: UserMetadata,
}

/// Free-form profile data attached at registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }

    /// Display name from metadata, or `"User"` when none was registered.
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("User")
    }

    /// Up to two uppercase initials taken from the display name.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .take(2)
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn email_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }
}

/// Providers send `null` for fields they have never populated.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Bearer credential with its absolute expiry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub access_token: String,
    /// Unix seconds.
    pub expires_at: i64,
}

impl Token {
    pub fn new(access_token: impl Into<String>, expires_at: i64) -> Self {
        Self { access_token: access_token.into(), expires_at }
    }

    /// Build a token from a provider grant, defaulting to one hour from `now`
    /// when the provider did not say when it expires.
    pub fn from_grant(access_token: impl Into<String>, expires_at: Option<i64>, now: i64) -> Self {
        Self::new(access_token, expires_at.unwrap_or(now + DEFAULT_TOKEN_TTL_SECS))
    }

    /// A token is usable while it carries a credential and `now` has not
    /// passed its expiry.
    pub fn is_valid_at(&self, now: i64) -> bool {
        !self.access_token.is_empty() && now <= self.expires_at
    }
}

/// The authenticated principal: a user paired with their token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: Token,
}

impl Session {
    pub fn new(user: User, token: Token) -> Self {
        Self { user, token }
    }
}

/// Pure validity check; never touches storage.
pub fn is_valid(session: &Session, now: i64) -> bool {
    session.token.is_valid_at(now)
}
