//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models. Only the auth session is client state today; catalog data
//! is fetched per page.

pub mod auth;
