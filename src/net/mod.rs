//! Network clients for upstream services.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the identity provider is reached from here; its grants feed the
//! session store through `AuthContext::login_grant`.

pub mod identity;
