//! Application layer with dependency injection container.
//!
//! Wires the game core to its collaborators: the auth gate, the renderer,
//! and the opponent policy. The container owns the infrastructure choices
//! and provides factory methods so commands and tests build sessions the
//! same way.

pub mod config;
pub mod container;

pub use config::SessionConfig;
pub use container::{App, AppBuilder};
