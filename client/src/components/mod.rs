//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared session state from the `SessionContext` provider
//! and decide what a route may render.

pub mod route_guard;
pub mod site_header;
