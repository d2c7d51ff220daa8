use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::KeyValueStorage;
use crate::config::NotyConfig;
use crate::error::StorageError;

const APP_DIR: &str = "noty";
const FILE_EXTENSION: &str = "json";

// everything except [A-Za-z0-9-] is escaped, including '%' itself
const KEY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-');

/// Key-value storage with one file per key in a data directory.
///
/// Keys are percent-encoded into file names, so distinct keys never share a
/// file.
#[derive(Clone, Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &NotyConfig) -> Result<Self, StorageError> {
        match &config.data_dir {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::default_location(),
        }
    }

    pub fn default_location() -> Result<Self, StorageError> {
        let base = dirs::data_local_dir().ok_or_else(|| {
            StorageError::Unavailable(
                "no local data directory on this platform".to_string(),
            )
        })?;
        Ok(Self::new(base.join(APP_DIR)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for_key(&self, key: &str) -> PathBuf {
        let file_name = utf8_percent_encode(key, KEY_ENCODE_SET).to_string();
        self.root.join(format!("{}.{}", file_name, FILE_EXTENSION))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for_key(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for_key(key);
        let tmp_path = path.with_extension("tmp");

        let write_result = (|| -> io::Result<()> {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
            fs::rename(&tmp_path, &path)
        })();

        write_result.map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StorageError::Write(format!("{}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_key() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert_eq!(storage.get("noty:pages").unwrap(), None);
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = tempdir().unwrap();
        FileStorage::new(dir.path().join("nested"))
            .set("noty:pages", "[]")
            .unwrap();

        let storage = FileStorage::new(dir.path().join("nested"));
        assert_eq!(storage.get("noty:pages").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_key_encoded() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("noty:pages/../x", "{}").unwrap();

        assert!(dir.path().join("noty%3Apages%2F%2E%2E%2Fx.json").exists());
        assert!(!dir.path().join("x.json").exists());
    }

    #[test]
    fn test_similar_keys_do_not_collide() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.set("noty:pages", "[1]").unwrap();
        storage.set("noty_pages", "[2]").unwrap();
        storage.set("noty%3Apages", "[3]").unwrap();

        assert_eq!(storage.get("noty:pages").unwrap(), Some("[1]".into()));
        assert_eq!(storage.get("noty_pages").unwrap(), Some("[2]".into()));
        assert_eq!(storage.get("noty%3Apages").unwrap(), Some("[3]".into()));
    }

    #[test]
    fn test_from_config() {
        let dir = tempdir().unwrap();
        let config = NotyConfig::default().with_data_dir(dir.path());
        let storage = FileStorage::from_config(&config).unwrap();
        assert_eq!(storage.root(), dir.path());
    }
}
