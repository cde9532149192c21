//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page stands in for the application layer: it owns the data a
//! component renders and supplies the collaborator callbacks. The data is
//! in-memory demo content until a backend exists.

pub mod chats;
pub mod home;
pub mod rewards;
pub mod voice;
