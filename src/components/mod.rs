//! Reusable UI components.

pub mod auth_gate;
pub mod logout_button;
pub mod profile_tag;
