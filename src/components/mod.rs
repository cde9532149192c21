//! Reusable presentation components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components take their data and collaborator callbacks as props and keep
//! only local state. None of them reads another component's internals.

pub mod message_composer;
pub mod message_list;
pub mod navigation;
pub mod reward_card;
pub mod voice_panel;
