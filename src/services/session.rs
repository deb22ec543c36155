use thiserror::Error;

use crate::core::navigation::{resolve, Navigation};
use crate::models::CurrentUser;
use crate::services::storage::{ClientStorage, CURRENT_USER_KEY};

/// Errors that can occur reading or writing a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Malformed stored session: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to serialize session: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Whether a client holds a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Unauthenticated,
}

/// Session gate over client storage
///
/// The state is read from storage on every check: a client is authenticated
/// exactly when a non-empty `currentUser` item exists. The item's content is
/// not validated by the gate.
#[derive(Debug, Clone)]
pub struct SessionGate {
    storage: ClientStorage,
}

impl SessionGate {
    pub fn new(storage: ClientStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &ClientStorage {
        &self.storage
    }

    pub async fn state(&self, client_id: &str) -> SessionState {
        match self.storage.get_item(client_id, CURRENT_USER_KEY).await {
            Some(blob) if !blob.is_empty() => SessionState::Authenticated,
            _ => SessionState::Unauthenticated,
        }
    }

    pub async fn is_authenticated(&self, client_id: &str) -> bool {
        self.state(client_id).await == SessionState::Authenticated
    }

    /// Parse the stored session
    ///
    /// `Ok(None)` when no session is stored.
    pub async fn try_current_user(&self, client_id: &str) -> Result<Option<CurrentUser>, SessionError> {
        match self.storage.get_item(client_id, CURRENT_USER_KEY).await {
            Some(blob) if !blob.is_empty() => serde_json::from_str(&blob)
                .map(Some)
                .map_err(SessionError::Malformed),
            _ => Ok(None),
        }
    }

    /// The stored session, with a malformed blob treated as no session
    pub async fn current_user(&self, client_id: &str) -> Option<CurrentUser> {
        match self.try_current_user(client_id).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Ignoring session of client {}: {}", client_id, e);
                None
            }
        }
    }

    /// Unauthenticated -> Authenticated
    pub async fn sign_in(&self, client_id: &str, user: &CurrentUser) -> Result<(), SessionError> {
        let blob = serde_json::to_string(user).map_err(SessionError::Serialization)?;
        self.storage.set_item(client_id, CURRENT_USER_KEY, blob).await;
        tracing::info!("Client {} signed in as {}", client_id, user.username);
        Ok(())
    }

    /// Authenticated -> Unauthenticated
    pub async fn sign_out(&self, client_id: &str) {
        self.storage.remove_item(client_id, CURRENT_USER_KEY).await;
        tracing::info!("Client {} signed out", client_id);
    }

    /// Route `path` for a client, redirecting to login when a protected view needs a session
    pub async fn navigate(&self, client_id: &str, path: &str) -> Navigation {
        let authenticated = self.is_authenticated(client_id).await;
        let navigation = resolve(path, authenticated);

        if let Navigation::Redirect(target) = &navigation {
            tracing::debug!("Redirecting client {} from {} to {}", client_id, path, target);
        }

        navigation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::View;
    use crate::services::demo_data::DemoDataService;

    fn gate() -> SessionGate {
        SessionGate::new(ClientStorage::new(100, 60))
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let gate = gate();
        let user = DemoDataService::new()
            .authenticate("alex.martinez", "tennis123")
            .unwrap();

        assert_eq!(gate.state("c").await, SessionState::Unauthenticated);

        gate.sign_in("c", &user).await.unwrap();
        assert_eq!(gate.state("c").await, SessionState::Authenticated);
        assert_eq!(gate.current_user("c").await, Some(user));

        gate.sign_out("c").await;
        assert_eq!(gate.state("c").await, SessionState::Unauthenticated);
        assert!(gate.current_user("c").await.is_none());
    }

    #[tokio::test]
    async fn test_empty_blob_is_unauthenticated() {
        let gate = gate();
        gate.storage().set_item("c", CURRENT_USER_KEY, String::new()).await;

        assert!(!gate.is_authenticated("c").await);
        assert!(matches!(gate.try_current_user("c").await, Ok(None)));
    }

    #[tokio::test]
    async fn test_malformed_blob_still_passes_gate() {
        let gate = gate();
        gate.storage()
            .set_item("c", CURRENT_USER_KEY, "not json".to_string())
            .await;

        assert!(gate.is_authenticated("c").await);
        assert!(matches!(
            gate.try_current_user("c").await,
            Err(SessionError::Malformed(_))
        ));
        assert!(gate.current_user("c").await.is_none());
        assert_eq!(gate.navigate("c", "/profile").await, Navigation::Render(View::Profile));
    }

    #[tokio::test]
    async fn test_navigate_protected_without_session() {
        let gate = gate();
        match gate.navigate("c", "/profile").await {
            Navigation::Redirect(target) => assert!(target.starts_with("/login?returnUrl=%2Fprofile")),
            other => panic!("expected redirect, got {:?}", other),
        }
    }
}
