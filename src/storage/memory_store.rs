use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::mock_behaviour::MockBehaviour;
use crate::traits::{DeviceError, KeyValueStore};


/// A key-value store that only lives in memory.
///
/// Just like device storage, every read and write suspends the caller once. This makes overlapping
/// operations interleave the way they would on a real device.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose I/O succeeds or fails according to the given behaviour
    pub fn new_with_mock_behaviour(mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            mock_behaviour: Some(mock_behaviour),
        }
    }

    /// Directly set a raw value, bypassing any mock behaviour
    pub fn insert_raw(&self, key: &str, value: &str) {
        lock(&self.items).insert(key.to_string(), value.to_string());
    }

    /// Directly get a raw value, bypassing any mock behaviour
    pub fn raw(&self, key: &str) -> Option<String> {
        lock(&self.items).get(key).cloned()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, DeviceError> {
        if let Some(behaviour) = &self.mock_behaviour {
            lock(behaviour).can_get_item()?;
        }
        let value = self.raw(key);
        tokio::task::yield_now().await;
        Ok(value)
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), DeviceError> {
        if let Some(behaviour) = &self.mock_behaviour {
            lock(behaviour).can_set_item()?;
        }
        tokio::task::yield_now().await;
        lock(&self.items).insert(key.to_string(), value);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_and_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").await.unwrap(), None);
        store.set_item("k", "v".to_string()).await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), Some("v".to_string()));
        assert_eq!(store.raw("other"), None);
    }

    #[tokio::test]
    async fn mocked_failures() {
        let behaviour = Arc::new(Mutex::new(MockBehaviour::fail_writes(1)));
        let store = MemoryStore::new_with_mock_behaviour(behaviour.clone());

        assert!(store.set_item("k", "v".to_string()).await.is_err());
        assert_eq!(store.raw("k"), None);
        assert!(store.set_item("k", "v".to_string()).await.is_ok());

        *behaviour.lock().unwrap() = MockBehaviour::fail_now(1);
        assert!(store.get_item("k").await.is_err());
        assert_eq!(store.get_item("k").await.unwrap(), Some("v".to_string()));
    }
}
