//! Error types shared across the session core.
//!
//! ERROR HANDLING
//! ==============
//! Store operations never surface these to views: the consumer contract is
//! infallible, so storage failures are logged and degrade to "no session".
//! They stay typed here so the seams (storage backends, identity client,
//! config parsing) can be tested precisely.

use thiserror::Error;

/// Failure talking to durable client storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage backend is reachable (server render, private mode, etc.).
    #[error("durable storage unavailable")]
    Unavailable,

    /// Reading a key failed at the backend.
    #[error("storage read failed for {key}: {reason}")]
    Read { key: String, reason: String },

    /// Writing or removing a key failed at the backend (quota, security).
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },

    /// A value could not be serialized before writing.
    #[error("storage encode failed for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure signing in against the hosted identity provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    /// Sign-in is only possible from the browser bundle.
    #[error("sign-in is not available in this build")]
    Unavailable,

    /// The HTTP request could not be sent or completed.
    #[error("sign-in request failed: {0}")]
    Request(String),

    /// The provider rejected the credentials or the request.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider response body could not be decoded.
    #[error("sign-in response parse failed: {0}")]
    Parse(String),
}

/// Invalid session configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A setting was provided but blank.
    #[error("config value {var} must not be empty")]
    EmptyValue { var: &'static str },

    /// Token and user slots must be independent keys.
    #[error("session and user storage keys must differ (both are {key:?})")]
    DuplicateStorageKey { key: String },

    /// Navigation targets must be absolute in-app paths.
    #[error("config value {var} must start with '/': {value:?}")]
    InvalidPath { var: &'static str, value: String },
}
