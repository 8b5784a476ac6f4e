//! # Session
//!
//! Typed access to the stored session token and the rules that decide which
//! navigation state the page renders.
//!
//! The token lives in a single storage slot. It is written after a successful
//! login or signup, read on every page load, and cleared on logout or when the
//! profile probe is rejected. There is no refresh or rotation.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::errors::StorageError;

/// Storage slot holding the session token.
pub trait TokenStore {
    /// Current token, if one is stored.
    fn read(&self) -> Option<String>;

    /// Replace the stored token.
    ///
    /// # Errors
    /// Returns a [`StorageError`] when the backing storage refuses the write.
    fn write(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn clear(&self);
}

/// In-memory [`TokenStore`], shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    /// Store pre-populated with `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn write(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

/// Navigation state rendered into the auth containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// The profile probe has not finished yet.
    #[default]
    Checking,
    /// No valid session.
    Guest,
    /// Session confirmed by the profile endpoint.
    Authenticated { username: String },
}

impl AuthState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username } => Some(username),
            _ => None,
        }
    }
}

/// What happened when the profile endpoint was probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server accepted the token.
    Accepted { username: String },
    /// The server answered with a non-ok status.
    Rejected { status: u16 },
    /// The request never produced a response.
    NetworkFailure { message: String },
}

/// First step of a page load: either render the guest state immediately or
/// probe the profile endpoint with the stored token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStart {
    Guest,
    Probe { token: String },
}

/// Typed session over a [`TokenStore`].
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.read().filter(|token| !token.is_empty())
    }

    /// Persist a freshly issued token.
    ///
    /// # Errors
    /// Propagates the store's [`StorageError`].
    pub fn store_token(&self, token: &str) -> Result<(), StorageError> {
        debug!("storing session token");
        self.store.write(token)
    }

    /// Forget the session.
    pub fn clear(&self) {
        debug!("clearing session token");
        self.store.clear();
    }

    /// Decide whether a profile probe is needed. Without a token the guest
    /// state is final and no request is made.
    #[must_use]
    pub fn begin_probe(&self) -> ProbeStart {
        match self.token() {
            Some(token) => ProbeStart::Probe { token },
            None => ProbeStart::Guest,
        }
    }

    /// Apply a probe outcome. A rejected token is removed from storage; a
    /// network failure keeps it but still renders the guest state.
    #[must_use]
    pub fn resolve_probe(&self, outcome: ProbeOutcome) -> AuthState {
        match outcome {
            ProbeOutcome::Accepted { username } => AuthState::Authenticated { username },
            ProbeOutcome::Rejected { status } => {
                debug!(status, "profile probe rejected");
                self.clear();
                AuthState::Guest
            }
            ProbeOutcome::NetworkFailure { message } => {
                warn!(%message, "profile probe failed");
                AuthState::Guest
            }
        }
    }

    /// Token to send with the logout request, or `None` when logout is a no-op.
    #[must_use]
    pub fn begin_logout(&self) -> Option<String> {
        self.token()
    }

    /// Final logout step, run whatever the server answered.
    pub fn finish_logout(&self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_token_renders_guest_without_probe() {
        let session = Session::new(MemoryTokenStore::default());
        assert_eq!(session.begin_probe(), ProbeStart::Guest);
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let session = Session::new(MemoryTokenStore::with_token(""));
        assert_eq!(session.begin_probe(), ProbeStart::Guest);
        assert_eq!(session.begin_logout(), None);
    }

    #[test]
    fn test_present_token_triggers_probe() {
        let session = Session::new(MemoryTokenStore::with_token("abc"));
        assert_eq!(
            session.begin_probe(),
            ProbeStart::Probe {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_accepted_probe_keeps_token() {
        let store = MemoryTokenStore::with_token("abc");
        let session = Session::new(store.clone());
        let state = session.resolve_probe(ProbeOutcome::Accepted {
            username: "ana".to_string(),
        });

        assert_eq!(state.username(), Some("ana"));
        assert!(state.is_authenticated());
        assert_eq!(store.read().as_deref(), Some("abc"));
    }

    #[test]
    fn test_rejected_probe_clears_token_for_any_status() {
        for status in [400, 401, 403, 404, 500, 503] {
            let store = MemoryTokenStore::with_token("stale");
            let session = Session::new(store.clone());
            let state = session.resolve_probe(ProbeOutcome::Rejected { status });

            assert_eq!(state, AuthState::Guest);
            assert_eq!(store.read(), None, "status {status} should clear the token");
        }
    }

    #[test]
    fn test_network_failure_renders_guest_and_keeps_token() {
        let store = MemoryTokenStore::with_token("abc");
        let session = Session::new(store.clone());
        let state = session.resolve_probe(ProbeOutcome::NetworkFailure {
            message: "offline".to_string(),
        });

        assert_eq!(state, AuthState::Guest);
        assert_eq!(store.read().as_deref(), Some("abc"));
    }

    #[test]
    fn test_logout_flow() {
        let store = MemoryTokenStore::with_token("abc");
        let session = Session::new(store.clone());

        assert_eq!(session.begin_logout().as_deref(), Some("abc"));
        session.finish_logout();
        assert_eq!(store.read(), None);
        assert_eq!(session.begin_logout(), None);
    }

    #[test]
    fn test_store_token() {
        let store = MemoryTokenStore::default();
        let session = Session::new(store.clone());
        session.store_token("fresh").unwrap();
        assert_eq!(store.read().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_default_state_is_checking() {
        assert_eq!(AuthState::default(), AuthState::Checking);
        assert_eq!(AuthState::Guest.username(), None);
    }
}
