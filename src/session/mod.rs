//! Client-side session: data model and the store that owns it.

pub mod model;
pub mod store;

pub use model::{DEFAULT_TOKEN_TTL_SECS, Session, Token, User, UserMetadata, is_valid};
pub use store::SessionStore;
