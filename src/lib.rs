//! This crate provides a small, local to-do list.
//!
//! Tasks are persisted as a single collection in a device-local key-value store (see the [`storage`] module), through a [`TaskStore`](store::TaskStore). \
//! A [`TaskList`] wraps this store, and provides the operations the user can run on their tasks: creating them, and toggling their completion.
//! Toggling a task notifies the user, via a [`Notifier`](traits::Notifier).
//!
//! Displaying tasks is up to the UI, that can use the [`ordering`], [`due_date`] and [`view`] modules to sort tasks and classify their due dates.

pub mod traits;

mod task;
pub use task::{CalendarDate, Task, TaskId};
mod error;
pub use error::TaskError;
pub mod task_list;
pub use task_list::TaskList;

pub mod store;
pub mod storage;
pub mod notification;
pub mod ordering;
pub mod due_date;
pub mod view;
pub mod auth;

pub mod config;
pub mod mock_behaviour;
pub mod utils;
