//! In-memory auth gate adapter
//!
//! Session-scoped sign-in state: a visitor name held in memory for the
//! lifetime of the process. Nothing is persisted and no credentials are
//! checked; the gate exists so the shell can refuse to run a game while
//! signed out.

use crate::ports::AuthGate;

/// Auth gate holding the visitor name in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryAuthGate {
    visitor: Option<String>,
}

impl MemoryAuthGate {
    /// Create a gate with no one signed in
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate already signed in as `name`, for tests and guest runs
    pub fn signed_in_as(name: &str) -> Self {
        Self {
            visitor: Some(name.to_string()),
        }
    }
}

impl AuthGate for MemoryAuthGate {
    fn is_signed_in(&self) -> bool {
        self.visitor.is_some()
    }

    fn sign_in(&mut self, name: &str) {
        self.visitor = Some(name.to_string());
    }

    fn sign_out(&mut self) {
        self.visitor = None;
    }

    fn visitor(&self) -> Option<&str> {
        self.visitor.as_deref()
    }
}
