//! Auth gate port - abstraction for the sign-in collaborator
//!
//! The game itself is not rendered or active while the visitor is signed
//! out; that is the only authentication decision in the system, and it is
//! made by the shell, not the core.

/// Port for the authentication collaborator.
///
/// Implementations own the notion of a "current visitor". The shell
/// consults [`is_signed_in`](AuthGate::is_signed_in) before starting a
/// session and offers [`sign_in`](AuthGate::sign_in) /
/// [`sign_out`](AuthGate::sign_out) entry points around it.
pub trait AuthGate {
    /// Whether the current visitor is signed in
    fn is_signed_in(&self) -> bool;

    /// Sign a visitor in under the given name
    fn sign_in(&mut self, name: &str);

    /// Sign the current visitor out
    fn sign_out(&mut self);

    /// Name of the signed-in visitor, if any
    fn visitor(&self) -> Option<&str>;
}
