//! Client-side session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the provider subscription and feeds `auth::AuthState`;
//! `redirect` remembers where a signed-out visitor was headed; `signup`
//! runs the account-creation flow independent of any view.

pub mod auth;
pub mod redirect;
pub mod session;
pub mod signup;
