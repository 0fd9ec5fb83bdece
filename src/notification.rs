//! Local notifications that are surfaced when a task is completed or reopened

use std::fmt::{Display, Error, Formatter};

use async_trait::async_trait;

use crate::traits::{DeviceError, Notifier};

/// The answer of the user when asked for the permission to display notifications
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        *self == PermissionStatus::Granted
    }
}


/// A notification, as shown to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    /// The notification that tells a task has just been completed (or reopened)
    pub fn for_task(task_name: &str, completed: bool) -> Self {
        match completed {
            true => Self {
                title: "Task Completed! 🎉".to_string(),
                body: format!("Great job! You completed \"{}\"", task_name),
            },
            false => Self {
                title: "Task Reopened ↩️".to_string(),
                body: format!("You reopened \"{}\"", task_name),
            },
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}: {}", self.title, self.body)
    }
}



/// See [`notification_channel`]
pub type NotificationSender = tokio::sync::watch::Sender<Option<Notification>>;
/// See [`notification_channel`]
pub type NotificationReceiver = tokio::sync::watch::Receiver<Option<Notification>>;

/// Create a notification channel, that can be used to retrieve the latest notification that has been surfaced
pub fn notification_channel() -> (NotificationSender, NotificationReceiver) {
    tokio::sync::watch::channel(None)
}


/// A notifier that publishes to a [`notification_channel`]
pub struct ChannelNotifier {
    sender: NotificationSender,
    permission: PermissionStatus,
}

impl ChannelNotifier {
    /// `permission` is what the (simulated) user answers when asked for the permission
    pub fn new(sender: NotificationSender, permission: PermissionStatus) -> Self {
        Self { sender, permission }
    }
}

#[async_trait]
impl Notifier for ChannelNotifier {
    async fn request_permission(&self) -> PermissionStatus {
        self.permission
    }

    async fn notify(&self, notification: Notification) -> Result<(), DeviceError> {
        self.sender
            .send(Some(notification))
            .map_err(|_| "Nobody is listening to notifications anymore".into())
    }
}


/// A notifier that surfaces notifications in the logs
#[derive(Default)]
pub struct LogNotifier {}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn request_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn notify(&self, notification: Notification) -> Result<(), DeviceError> {
        log::info!("{}", notification);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates() {
        let done = Notification::for_task("Buy milk", true);
        assert_eq!(done.title, "Task Completed! 🎉");
        assert_eq!(done.body, "Great job! You completed \"Buy milk\"");

        let reopened = Notification::for_task("Buy milk", false);
        assert_eq!(reopened.title, "Task Reopened ↩️");
        assert_eq!(reopened.body, "You reopened \"Buy milk\"");
    }

    #[tokio::test]
    async fn channel_notifier() {
        let (sender, receiver) = notification_channel();
        let notifier = ChannelNotifier::new(sender, PermissionStatus::Granted);
        assert!(notifier.request_permission().await.is_granted());
        assert_eq!(*receiver.borrow(), None);

        notifier.notify(Notification::for_task("a", true)).await.unwrap();
        assert_eq!(*receiver.borrow(), Some(Notification::for_task("a", true)));

        drop(receiver);
        assert!(notifier.notify(Notification::for_task("a", false)).await.is_err());
    }
}
