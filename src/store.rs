//! This module provides the persisted task collection

use crate::task::Task;
use crate::traits::{DeviceError, KeyValueStore};


/// The whole task collection, persisted as a single JSON array under a single key of a [`KeyValueStore`]
#[derive(Debug)]
pub struct TaskStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Store the collection under the default [`TASKS_KEY`](crate::config::TASKS_KEY)
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, crate::config::TASKS_KEY)
    }

    pub fn with_key(backend: S, key: &str) -> Self {
        Self { backend, key: key.to_string() }
    }

    pub fn backend(&self) -> &S { &self.backend }
    pub fn key(&self) -> &str   { &self.key     }

    /// Returns the persisted task collection.
    ///
    /// This never fails: a collection that has never been persisted, that cannot be read, or that cannot be parsed, is considered empty.
    pub async fn read_all(&self) -> Vec<Task> {
        let content = match self.backend.get_item(&self.key).await {
            Err(err) => {
                log::warn!("Unable to read the task collection: {}. Considering it empty", err);
                return Vec::new();
            },
            Ok(None) => {
                log::debug!("No task collection has been saved yet");
                return Vec::new();
            },
            Ok(Some(content)) => content,
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(err) => {
                log::warn!("Invalid task collection: {}. Considering it empty", err);
                Vec::new()
            },
        }
    }

    /// Replace the persisted task collection with `tasks`
    pub async fn write_all(&self, tasks: &[Task]) -> Result<(), DeviceError> {
        let content = serde_json::to_string(tasks)?;
        log::debug!("Saving {} tasks", tasks.len());
        self.backend.set_item(&self.key, content).await
    }
}
