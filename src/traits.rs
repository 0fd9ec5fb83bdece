use std::error::Error;

use async_trait::async_trait;

use crate::notification::{Notification, PermissionStatus};

/// The error type returned by the device-level collaborators (storage, notifications)
pub type DeviceError = Box<dyn Error + Send + Sync>;

/// A device-local key-value store, where values are opaque strings.
///
/// Every call is an I/O operation that may suspend. Methods take `&self`, so that a single store
/// can be shared between operations that overlap in time.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing has ever been stored there
    async fn get_item(&self, key: &str) -> Result<Option<String>, DeviceError>;

    /// Stores `value` under `key`, replacing any previous value in full
    async fn set_item(&self, key: &str, value: String) -> Result<(), DeviceError>;
}

/// A way to surface local notifications to the user
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Ask the user for the permission to display notifications.
    /// This may prompt the user, so callers should remember the answer.
    async fn request_permission(&self) -> PermissionStatus;

    /// Immediately display a notification
    async fn notify(&self, notification: Notification) -> Result<(), DeviceError>;
}
