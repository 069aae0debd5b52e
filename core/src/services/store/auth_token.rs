use tokio::sync::watch;

use super::ObservableStore;

/// Bearer token of the signed-in user
#[derive(Debug, Default)]
pub struct AuthTokenStore {
    inner: ObservableStore<Option<String>>,
}

impl AuthTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.get()
    }

    /// Store a token; blank tokens sign the user out
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let token = (!token.trim().is_empty()).then_some(token);
        self.inner.set(token);
    }

    pub fn clear(&self) {
        self.inner.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.get().is_some()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.inner.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lifecycle() {
        let store = AuthTokenStore::new();
        assert!(!store.is_authenticated());

        store.set_token("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));

        store.set_token("   ");
        assert!(!store.is_authenticated());

        store.set_token("abc");
        store.clear();
        assert_eq!(store.token(), None);
    }
}
