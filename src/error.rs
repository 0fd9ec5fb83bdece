//! Errors returned by task operations

use crate::traits::DeviceError;

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The request was invalid. Nothing has been read or written
    #[error("{0}")]
    Validation(String),

    /// The task collection could not be saved. The persisted collection is unchanged
    #[error("Unable to save tasks: {0}")]
    Storage(#[source] DeviceError),

    /// The user refused to receive notifications. Task operations still work
    #[error("Notifications are disabled. Enable them in your settings to be told when tasks are completed")]
    PermissionDenied,
}
