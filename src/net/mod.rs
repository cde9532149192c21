//! Session transport seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here talks to a real server yet. `voice` defines the connector
//! interface the voice panel drives, plus the simulated implementation used
//! until a signaling backend exists.

pub mod voice;
