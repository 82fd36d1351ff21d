//! Networking modules for the hosted auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines the `AuthProvider` seam the session hook and signup
//! flow depend on, `gotrue` implements it over the provider's REST API,
//! `listeners` fans session events out to subscribers, and `types` defines
//! the shared wire schema.

pub mod gotrue;
pub mod listeners;
pub mod provider;
pub mod types;
