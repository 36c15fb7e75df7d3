//! Dependency injection container for the noughts application.

use super::config::SessionConfig;
use crate::{
    adapters::MemoryAuthGate,
    policy::{HeuristicPolicy, MovePolicy},
    ports::AuthGate,
    session::Session,
};

/// Application with dependency injection.
///
/// Centralizes creation and wiring of dependencies. The container owns the
/// auth gate and a default seed override, and builds sessions from a
/// [`SessionConfig`].
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use noughts::app::{App, SessionConfig};
///
/// let mut app = App::new();
/// app.auth_gate_mut().sign_in("ada");
/// let session = app.create_session(SessionConfig::new())?;
/// # Ok::<(), noughts::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use noughts::app::App;
/// use noughts::adapters::MemoryAuthGate;
///
/// let app = App::for_testing()
///     .with_auth_gate(MemoryAuthGate::signed_in_as("tester"))
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    /// Authentication collaborator for the shell
    auth_gate: Box<dyn AuthGate>,
    /// Default random seed for policies (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create an app with production defaults: a signed-out in-memory auth
    /// gate and a non-deterministic policy seed.
    pub fn new() -> Self {
        Self {
            auth_gate: Box::new(MemoryAuthGate::new()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing an app with custom dependencies
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn auth_gate(&self) -> &dyn AuthGate {
        self.auth_gate.as_ref()
    }

    pub fn auth_gate_mut(&mut self) -> &mut dyn AuthGate {
        self.auth_gate.as_mut()
    }

    /// Build the heuristic opponent, honoring the config seed or the
    /// container default.
    pub fn create_policy(&self, config: &SessionConfig) -> Box<dyn MovePolicy> {
        match config.seed.or(self.default_seed) {
            Some(seed) => Box::new(HeuristicPolicy::with_seed(seed)),
            None => Box::new(HeuristicPolicy::new()),
        }
    }

    /// Create a game session for the signed-in visitor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSignedIn`](crate::Error::NotSignedIn) when no
    /// visitor is signed in; the game is simply not active behind the gate.
    pub fn create_session(&self, config: SessionConfig) -> crate::Result<Session> {
        if !self.auth_gate.is_signed_in() {
            return Err(crate::Error::NotSignedIn);
        }
        Ok(Session::new(self.create_policy(&config), config.delay()))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for apps with injected dependencies
pub struct AppBuilder {
    auth_gate: Option<Box<dyn AuthGate>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            auth_gate: None,
            default_seed: None,
        }
    }

    pub fn with_auth_gate(mut self, gate: impl AuthGate + 'static) -> Self {
        self.auth_gate = Some(Box::new(gate));
        self
    }

    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    pub fn build(self) -> App {
        App {
            auth_gate: self
                .auth_gate
                .unwrap_or_else(|| Box::new(MemoryAuthGate::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_requires_sign_in() {
        let app = App::new();
        assert!(matches!(
            app.create_session(SessionConfig::new()),
            Err(crate::Error::NotSignedIn)
        ));
    }

    #[test]
    fn test_session_after_sign_in() {
        let mut app = App::new();
        app.auth_gate_mut().sign_in("ada");

        let session = app.create_session(SessionConfig::new()).unwrap();
        assert!(session.accepts_input());
    }

    #[test]
    fn test_builder_injects_gate_and_seed() {
        let app = App::for_testing()
            .with_auth_gate(MemoryAuthGate::signed_in_as("tester"))
            .with_default_seed(42)
            .build();

        assert_eq!(app.auth_gate().visitor(), Some("tester"));
        assert!(app.create_session(SessionConfig::new()).is_ok());
    }
}
