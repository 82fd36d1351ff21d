//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates access control to
//! the guards in `components::route_guard`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod roadmap;
pub mod signup;
