//! Platform-independent heart of the chat widget.
//!
//! Everything here compiles and tests natively; browser access goes through
//! the traits in [`ports`].

pub mod backend;
pub mod event_bus;
pub mod host;
pub mod ports;
pub mod render;
pub mod session;
