//! Support for library configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The storage key the task collection is persisted under
pub const TASKS_KEY: &str = "tasks";

/// The environment variable that can override the default [`DATA_FOLDER`]
pub const DATA_FOLDER_ENV: &str = "POCKET_TASKS_DIR";

/// The folder a [`FileStore`](crate::storage::FileStore) uses when built from the config.
/// Feel free to override it when initing this library.
pub static DATA_FOLDER: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| {
    let folder = std::env::var_os(DATA_FOLDER_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("pocket_tasks_data"));
    Arc::new(Mutex::new(folder))
});

/// The only username the login gate accepts.
/// Feel free to override it when initing this library.
pub static LOGIN_USERNAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("admin".to_string())));

/// The only password the login gate accepts.
/// Feel free to override it when initing this library.
pub static LOGIN_PASSWORD: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("1234".to_string())));

pub(crate) fn read<T: Clone>(value: &Lazy<Arc<Mutex<T>>>) -> T {
    match value.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn data_folder() -> PathBuf {
    read(&DATA_FOLDER)
}
