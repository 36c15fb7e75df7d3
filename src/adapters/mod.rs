//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits defined in the ports
//! module. Adapters depend on domain ports, not the other way around.

pub mod memory_auth;
pub mod recording_renderer;
pub mod terminal_renderer;

pub use memory_auth::MemoryAuthGate;
pub use recording_renderer::RecordingRenderer;
pub use terminal_renderer::TerminalRenderer;
