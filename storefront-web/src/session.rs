//! Browser-backed session token storage.
//!
//! The token is kept as a plain string (not JSON-encoded) so pages that still
//! read `authToken` directly see the same value.

use gloo_storage::{LocalStorage, Storage};
use shared::config::AUTH_TOKEN_KEY;
use shared::errors::StorageError;
use shared::session::{Session, TokenStore};

/// [`TokenStore`] over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn read(&self) -> Option<String> {
        LocalStorage::raw().get_item(AUTH_TOKEN_KEY).ok().flatten()
    }

    fn write(&self, token: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(AUTH_TOKEN_KEY, token)
            .map_err(|err| StorageError::WriteFailed(format!("{err:?}")))
    }

    fn clear(&self) {
        LocalStorage::delete(AUTH_TOKEN_KEY);
    }
}

/// Session backed by local storage.
pub fn browser_session() -> Session<LocalTokenStore> {
    Session::new(LocalTokenStore)
}
