//! To-do tasks

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};


/// An opaque identifier of a [`Task`].
///
/// The only guarantee is uniqueness within a collection: ids carry no ordering information.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}


/// Anything that can be truncated to a calendar date (i.e. a day, without time-of-day)
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate { *self }
}
impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate { self.date() }
}
impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    /// The date in the time zone this `DateTime` is expressed in
    fn calendar_date(&self) -> NaiveDate { self.date_naive() }
}


/// A to-do task
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation time
    id: TaskId,

    /// The display name of the task. Never empty, never surrounded by whitespace
    name: String,

    /// The day this task is due. This is serialized as a `YYYY-MM-DD` string
    #[serde(rename = "dueDate")]
    due_date: NaiveDate,

    /// The completion status of this task
    done: bool,
}

impl Task {
    /// Create a brand new, uncompleted Task.
    /// This will pick a new (random) task ID.
    ///
    /// Validating the name is up to the caller, see [`TaskList::create`](crate::TaskList::create)
    pub fn new<D: CalendarDate>(name: String, due: &D) -> Self {
        Self::new_with_parameters(TaskId::random(), name, due.calendar_date(), false)
    }

    /// Create a new Task instance, that may have been persisted already
    pub fn new_with_parameters(id: TaskId, name: String, due_date: NaiveDate, done: bool) -> Self {
        Self { id, name, due_date, done }
    }

    pub fn id(&self) -> &TaskId        { &self.id       }
    pub fn name(&self) -> &str         { &self.name     }
    pub fn due_date(&self) -> NaiveDate { self.due_date }
    pub fn done(&self) -> bool         { self.done      }

    /// Flip the completion status, and return the new one
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}
