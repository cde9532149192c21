//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic.
//! Every helper has a non-`hydrate` fallback so SSR rendering and unit tests
//! never touch `web-sys`.

pub mod dom;
pub mod microphone;
pub mod timer;
