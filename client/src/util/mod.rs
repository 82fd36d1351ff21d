//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and routing decisions from
//! component code so they can be tested without a DOM.

pub mod auth;
pub mod storage;
