//! This module provides the operations the user can run on their tasks

use std::sync::{Mutex, MutexGuard};

use crate::error::TaskError;
use crate::notification::{Notification, PermissionStatus};
use crate::store::TaskStore;
use crate::task::{CalendarDate, Task, TaskId};
use crate::traits::{KeyValueStore, Notifier};


/// The task list of the user: a persisted task collection, and a way to notify the user about it.
///
/// This is meant to be created once, and handed to whatever UI displays the tasks.
///
/// # Concurrent operations
///
/// Every operation reads the whole collection, changes it, then writes the whole collection back.
/// There is no locking and no version check: when two operations overlap (e.g. two quick taps
/// before the first write completes), the last write wins, and the changes of the other one are lost.
/// Callers that may issue overlapping operations must serialize them themselves.
pub struct TaskList<S, N> {
    store: TaskStore<S>,
    notifier: N,

    /// `None` until the user has been asked
    permission: Mutex<Option<PermissionState>>,
}

#[derive(Clone, Copy, Debug)]
struct PermissionState {
    status: PermissionStatus,
    /// Whether a refusal has already been reported to the caller
    reported: bool,
}

impl<S, N> TaskList<S, N>
where
    S: KeyValueStore,
    N: Notifier,
{
    pub fn new(store: TaskStore<S>, notifier: N) -> Self {
        Self {
            store,
            notifier,
            permission: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &TaskStore<S> { &self.store    }
    pub fn notifier(&self) -> &N         { &self.notifier }

    /// Returns every task, in collection order. See [`display_order`](crate::ordering::display_order) to sort them for display
    pub async fn tasks(&self) -> Vec<Task> {
        self.store.read_all().await
    }

    /// Create a new, uncompleted task due on the calendar day of `due`, and save it.
    ///
    /// `name` is trimmed, and must not be empty.
    pub async fn create(&self, name: &str, due: impl CalendarDate) -> Result<Task, TaskError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TaskError::Validation("Please enter a task name".to_string()));
        }
        let new_task = Task::new(name.to_string(), &due);

        let mut tasks = self.store.read_all().await;
        tasks.push(new_task.clone());
        self.store.write_all(&tasks).await.map_err(TaskError::Storage)?;

        log::info!("Created task {:?} ({}), due {}", new_task.name(), new_task.id(), new_task.due_date());
        Ok(new_task)
    }

    /// Flip the completion status of a task, save it, and notify the user about it.
    ///
    /// Returns the updated task, or `None` in case no task has this ID (in which case nothing is changed)
    pub async fn toggle(&self, id: &TaskId) -> Result<Option<Task>, TaskError> {
        let mut tasks = self.store.read_all().await;
        let updated = match tasks.iter_mut().find(|task| task.id() == id) {
            None => {
                log::debug!("No task with ID {}, nothing to toggle", id);
                return Ok(None);
            },
            Some(task) => {
                task.toggle();
                task.clone()
            },
        };
        self.store.write_all(&tasks).await.map_err(TaskError::Storage)?;
        log::debug!("Task {} is now {}", updated.id(), if updated.done() { "done" } else { "not done" });

        self.notify(Notification::for_task(updated.name(), updated.done())).await;
        Ok(Some(updated))
    }

    /// Ask the user for the permission to display notifications, if they have not been asked yet.
    ///
    /// A refusal is reported only once, whether it was answered here or when a toggle first needed to notify.
    /// Later calls return `Ok(())` without asking again.
    pub async fn request_notification_permission(&self) -> Result<(), TaskError> {
        let status = match self.known_permission() {
            Some(status) => status,
            None => self.ask_permission().await,
        };
        if status.is_granted() {
            return Ok(());
        }

        let mut guard = lock(&self.permission);
        match guard.as_mut() {
            Some(state) if state.reported == false => {
                state.reported = true;
                Err(TaskError::PermissionDenied)
            },
            _ => Ok(()),
        }
    }

    fn known_permission(&self) -> Option<PermissionStatus> {
        (*lock(&self.permission)).map(|state| state.status)
    }

    async fn ask_permission(&self) -> PermissionStatus {
        let status = self.notifier.request_permission().await;
        log::info!("Notification permission: {:?}", status);
        let mut guard = lock(&self.permission);
        match guard.as_ref() {
            // Somebody else asked in the meantime
            Some(state) => state.status,
            None => {
                *guard = Some(PermissionState { status, reported: false });
                status
            },
        }
    }

    async fn notify(&self, notification: Notification) {
        let permission = match self.known_permission() {
            Some(status) => status,
            None => self.ask_permission().await,
        };
        if permission.is_granted() == false {
            log::debug!("Notifications are not allowed, not showing {:?}", notification.title);
            return;
        }

        if let Err(err) = self.notifier.notify(notification).await {
            log::warn!("Unable to show a notification: {}", err);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
