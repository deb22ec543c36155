use std::time::Duration;

/// Storage key holding the serialized session
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Storage key holding the colour scheme
pub const THEME_KEY: &str = "theme";

/// Per-client key/value storage
///
/// Each client (identified by an opaque id) gets its own namespace of
/// string items, the same shape as browser local storage. Items of clients
/// that stay idle past the configured period are evicted.
#[derive(Clone)]
pub struct ClientStorage {
    items: moka::future::Cache<String, String>,
}

impl ClientStorage {
    pub fn new(max_items: u64, idle_timeout_secs: u64) -> Self {
        let items = moka::future::CacheBuilder::new(max_items)
            .time_to_idle(Duration::from_secs(idle_timeout_secs))
            .build();

        Self { items }
    }

    pub async fn get_item(&self, client_id: &str, key: &str) -> Option<String> {
        let value = self.items.get(&StorageKey::item(client_id, key)).await;
        tracing::trace!("Storage get {} for {}: {}", key, client_id, value.is_some());
        value
    }

    pub async fn set_item(&self, client_id: &str, key: &str, value: String) {
        self.items.insert(StorageKey::item(client_id, key), value).await;
        tracing::trace!("Storage set {} for {}", key, client_id);
    }

    pub async fn remove_item(&self, client_id: &str, key: &str) {
        self.items.invalidate(&StorageKey::item(client_id, key)).await;
        tracing::trace!("Storage remove {} for {}", key, client_id);
    }
}

impl std::fmt::Debug for ClientStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientStorage")
            .field("entries", &self.items.entry_count())
            .finish()
    }
}

/// Storage key builder
pub struct StorageKey;

impl StorageKey {
    /// Build the cache key of one item in a client's namespace
    pub fn item(client_id: &str, key: &str) -> String {
        format!("{}:{}", client_id, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let storage = ClientStorage::new(100, 60);

        assert!(storage.get_item("c1", THEME_KEY).await.is_none());

        storage.set_item("c1", THEME_KEY, "dark".to_string()).await;
        assert_eq!(storage.get_item("c1", THEME_KEY).await.as_deref(), Some("dark"));

        storage.remove_item("c1", THEME_KEY).await;
        assert!(storage.get_item("c1", THEME_KEY).await.is_none());
    }

    #[tokio::test]
    async fn test_clients_are_isolated() {
        let storage = ClientStorage::new(100, 60);

        storage.set_item("c1", CURRENT_USER_KEY, "{}".to_string()).await;
        assert!(storage.get_item("c2", CURRENT_USER_KEY).await.is_none());
    }

    #[test]
    fn test_storage_key_builder() {
        assert_eq!(StorageKey::item("abc", CURRENT_USER_KEY), "abc:currentUser");
    }
}
