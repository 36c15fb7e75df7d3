//! Ports (trait boundaries) for external collaborators.
//!
//! The game core makes no authentication or rendering decisions. Following
//! hexagonal architecture, these traits are owned by the domain and
//! implemented by adapters in the infrastructure layer: the auth gate
//! answers "is the visitor signed in", and the renderer turns a board view
//! into something a human can see and click.

pub mod auth;
pub mod render;

pub use auth::AuthGate;
pub use render::{BoardView, Renderer};
