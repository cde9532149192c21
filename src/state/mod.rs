//! Per-component state records and their transitions.
//!
//! DESIGN
//! ======
//! Each component keeps one plain record in a single `RwSignal` and mutates it
//! only through the named methods defined here. Keeping the records free of
//! Leptos types lets every transition be tested without a reactive runtime.

pub mod chat;
pub mod composer;
pub mod reward;
pub mod voice;
