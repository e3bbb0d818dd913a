//! Password sign-in and sign-up against the hosted identity provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and tests: stubs returning `IdentityError::Unavailable`,
//! since credentials are only ever submitted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections keep the provider's own message so the auth pages can
//! show it as-is; everything else is a typed `IdentityError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::Deserialize;

use crate::config::IdentityConfig;
use crate::error::IdentityError;
use crate::session::{Token, User};

/// Successful sign-in as reported by the provider.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignInGrant {
    pub access_token: String,
    /// Unix seconds; some providers omit it.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

impl SignInGrant {
    /// Split into the pair handed to `SessionStore::login_user`.
    pub fn into_parts(self, now: i64) -> (User, Token) {
        (self.user, Token::from_grant(self.access_token, self.expires_at, now))
    }
}

/// Result of registering a new account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The provider auto-confirmed the account and issued a session.
    SignedIn(SignInGrant),
    /// The account exists but the email must be confirmed before sign-in.
    ConfirmationRequired(User),
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn token_endpoint(base_url: &str) -> String {
    format!("{}/auth/v1/token?grant_type=password", base_url.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base_url: &str) -> String {
    format!("{}/auth/v1/signup", base_url.trim_end_matches('/'))
}

/// Sign-up payload; the display name lands in the user's metadata.
#[cfg(any(test, feature = "hydrate"))]
fn signup_body(email: &str, password: &str, display_name: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": password,
        "data": { "displayName": display_name },
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection(action: &str, status: u16, body: &str) -> IdentityError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("{action} failed: {status}"));
    IdentityError::Rejected { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_grant(body: &str) -> Result<SignInGrant, IdentityError> {
    serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))
}

/// Sign-up answers with a full session when the account is auto-confirmed and
/// with the bare user object otherwise.
#[cfg(any(test, feature = "hydrate"))]
fn parse_sign_up(body: &str) -> Result<SignUpOutcome, IdentityError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| IdentityError::Parse(e.to_string()))?;
    if value.get("access_token").is_some() {
        let grant = serde_json::from_value(value).map_err(|e| IdentityError::Parse(e.to_string()))?;
        return Ok(SignUpOutcome::SignedIn(grant));
    }
    let user = serde_json::from_value(value).map_err(|e| IdentityError::Parse(e.to_string()))?;
    Ok(SignUpOutcome::ConfirmationRequired(user))
}

/// POST `payload` with the provider's `apikey` header, returning the body of a
/// successful response.
#[cfg(feature = "hydrate")]
async fn post_json(
    config: &IdentityConfig,
    url: &str,
    action: &str,
    payload: &serde_json::Value,
) -> Result<String, IdentityError> {
    let resp = gloo_net::http::Request::post(url)
        .header("apikey", &config.anon_key)
        .json(payload)
        .map_err(|e| IdentityError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Request(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| IdentityError::Request(e.to_string()))?;
    if !resp.ok() {
        log::debug!("{action} rejected with status {status}");
        return Err(rejection(action, status, &body));
    }
    Ok(body)
}

/// Exchange email + password for a session grant.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the provider rejects the
/// credentials, or the response cannot be decoded.
#[cfg(feature = "hydrate")]
pub async fn sign_in_with_password(
    config: &IdentityConfig,
    email: &str,
    password: &str,
) -> Result<SignInGrant, IdentityError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    let body = post_json(config, &token_endpoint(&config.base_url), "sign-in", &payload).await?;
    parse_grant(&body)
}

/// Exchange email + password for a session grant.
///
/// # Errors
///
/// Always returns [`IdentityError::Unavailable`] outside the browser bundle.
#[cfg(not(feature = "hydrate"))]
pub async fn sign_in_with_password(
    config: &IdentityConfig,
    email: &str,
    password: &str,
) -> Result<SignInGrant, IdentityError> {
    let _ = (config, email, password);
    Err(IdentityError::Unavailable)
}

/// Register a new account with `display_name` stored in its metadata.
///
/// # Errors
///
/// Returns an error if the request cannot be sent, the provider rejects the
/// registration, or the response cannot be decoded.
#[cfg(feature = "hydrate")]
pub async fn sign_up(
    config: &IdentityConfig,
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<SignUpOutcome, IdentityError> {
    let payload = signup_body(email, password, display_name);
    let body = post_json(config, &signup_endpoint(&config.base_url), "sign-up", &payload).await?;
    parse_sign_up(&body)
}

/// Register a new account with `display_name` stored in its metadata.
///
/// # Errors
///
/// Always returns [`IdentityError::Unavailable`] outside the browser bundle.
#[cfg(not(feature = "hydrate"))]
pub async fn sign_up(
    config: &IdentityConfig,
    email: &str,
    password: &str,
    display_name: &str,
) -> Result<SignUpOutcome, IdentityError> {
    let _ = (config, email, password, display_name);
    Err(IdentityError::Unavailable)
}
