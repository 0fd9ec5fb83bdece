use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::traits::{DeviceError, KeyValueStore};


/// A key-value store that keeps every key in its own JSON file, in a given folder
#[derive(Clone, Debug, PartialEq)]
pub struct FileStore {
    backing_folder: PathBuf,
}

impl FileStore {
    /// Use the given folder. It will be created on the first write if it does not exist yet.
    pub fn new(folder: &Path) -> Self {
        Self { backing_folder: PathBuf::from(folder) }
    }

    /// Use the folder configured in [`DATA_FOLDER`](crate::config::DATA_FOLDER)
    pub fn from_config() -> Self {
        let folder = crate::config::data_folder();
        Self::new(&folder)
    }

    pub fn folder(&self) -> &Path {
        &self.backing_folder
    }

    fn file_name(key: &str) -> String {
        format!("{}.json", sanitize_filename::sanitize(key))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.backing_folder.join(Self::file_name(key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, DeviceError> {
        let path = self.path_for(key);
        log::trace!("Reading {:?}", path);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!("Unable to read file {:?}: {}", path, err).into()),
        }
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), DeviceError> {
        let path = self.path_for(key);
        log::trace!("Writing {:?}", path);

        if let Err(err) = tokio::fs::create_dir_all(&self.backing_folder).await {
            return Err(format!("Unable to create folder {:?}: {}", self.backing_folder, err).into());
        }

        // Write aside, then swap, so that readers never see a half-written value
        let temp_name = format!(".{}.{}.tmp", Self::file_name(key), uuid::Uuid::new_v4().to_simple());
        let temp_path = self.backing_folder.join(temp_name);
        if let Err(err) = tokio::fs::write(&temp_path, value).await {
            return Err(format!("Unable to save file {:?}: {}", temp_path, err).into());
        }
        if let Err(err) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(format!("Unable to replace file {:?}: {}", path, err).into());
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_key_is_none() {
        let folder = tempfile::tempdir().unwrap();
        let store = FileStore::new(folder.path());
        assert_eq!(store.get_item("tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_are_replaced_in_full() {
        let folder = tempfile::tempdir().unwrap();
        let store = FileStore::new(&folder.path().join("not").join("created").join("yet"));

        store.set_item("tasks", "a rather long first value".to_string()).await.unwrap();
        store.set_item("tasks", "short".to_string()).await.unwrap();
        assert_eq!(store.get_item("tasks").await.unwrap(), Some("short".to_string()));

        assert!(store.folder().join("tasks.json").exists());
        let leftovers = std::fs::read_dir(store.folder()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[tokio::test]
    async fn keys_cannot_escape_the_folder() {
        let folder = tempfile::tempdir().unwrap();
        let store = FileStore::new(folder.path());

        store.set_item("../outside", "x".to_string()).await.unwrap();
        assert_eq!(store.get_item("../outside").await.unwrap(), Some("x".to_string()));
        assert!(folder.path().parent().unwrap().join("outside.json").exists() == false);
    }

    #[tokio::test]
    async fn unreadable_file_is_an_error() {
        let folder = tempfile::tempdir().unwrap();
        let store = FileStore::new(folder.path());
        // A folder where the file is expected
        std::fs::create_dir(folder.path().join("tasks.json")).unwrap();

        assert!(store.get_item("tasks").await.is_err());
        assert!(store.set_item("tasks", "[]".to_string()).await.is_err());
    }
}
