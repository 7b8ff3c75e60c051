use super::{KeyValueStorage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Directory-backed storage: each key lives in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Opens (and creates, if needed) the data directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::io("<data dir>", e))?;
        debug!(dir = %dir.display(), "Opened file storage");
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value).map_err(|e| StorageError::io(key, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let data_dir = tmp.path().join("data");

        let mut storage = FileStorage::open(&data_dir).unwrap();
        assert_eq!(storage.get("wishlist").unwrap(), None);
        storage.set("wishlist", r#"["p1"]"#).unwrap();

        let reopened = FileStorage::open(&data_dir).unwrap();
        assert_eq!(reopened.get("wishlist").unwrap().as_deref(), Some(r#"["p1"]"#));
        assert!(data_dir.join("wishlist.json").exists());
    }

    #[test]
    fn test_set_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(tmp.path()).unwrap();

        storage.set("session", r#"{"username":"alice","email":"a@b.com"}"#).unwrap();
        storage.set("session", "null").unwrap();
        assert_eq!(storage.get("session").unwrap().as_deref(), Some("null"));
    }
}
