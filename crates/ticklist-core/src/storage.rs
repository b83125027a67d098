use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::task::Task;

/// String key-value persistence, shaped after the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(feature = "fs")]
pub use dir::DirStorage;

#[cfg(feature = "fs")]
mod dir {
    use std::fs;
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};

    use anyhow::{Context, anyhow, bail};
    use tempfile::NamedTempFile;
    use tracing::{debug, info, warn};

    use super::KeyValueStore;

    /// One file per key inside a data directory.
    #[derive(Debug, Clone)]
    pub struct DirStorage {
        dir: PathBuf,
    }

    impl DirStorage {
        #[tracing::instrument(skip(dir))]
        pub fn open(dir: &Path) -> anyhow::Result<Self> {
            let dir = dir.to_path_buf();
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;

            info!(data_dir = %dir.display(), "opened directory storage");
            Ok(Self { dir })
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> anyhow::Result<PathBuf> {
            let valid = !key.is_empty()
                && !key.starts_with('.')
                && key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
            if !valid {
                bail!("invalid storage key: {key:?}");
            }
            Ok(self.dir.join(format!("{key}.value")))
        }
    }

    impl KeyValueStore for DirStorage {
        fn get(&self, key: &str) -> Option<String> {
            let path = match self.path_for(key) {
                Ok(path) => path,
                Err(err) => {
                    warn!(error = %err, "refusing to read key");
                    return None;
                }
            };

            match fs::read_to_string(&path) {
                Ok(raw) => Some(raw),
                Err(err) if err.kind() == io::ErrorKind::NotFound => None,
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "failed reading stored value");
                    None
                }
            }
        }

        #[tracing::instrument(skip(self, value), fields(bytes = value.len()))]
        fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            let path = self.path_for(key)?;
            debug!(file = %path.display(), "writing value atomically");

            let mut temp = NamedTempFile::new_in(&self.dir)
                .with_context(|| format!("failed to create temp file in {}", self.dir.display()))?;
            temp.write_all(value.as_bytes())?;
            temp.flush()?;

            temp.persist(&path)
                .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;

            Ok(())
        }
    }
}

/// Reads the task array stored under `key`. A missing or malformed value
/// yields an empty list.
#[tracing::instrument(skip(storage))]
pub fn load_tasks(storage: &dyn KeyValueStore, key: &str) -> Vec<Task> {
    let Some(raw) = storage.get(key) else {
        debug!("no stored tasks");
        return Vec::new();
    };

    match serde_json::from_str::<Option<Vec<Task>>>(&raw) {
        Ok(tasks) => {
            let tasks = tasks.unwrap_or_default();
            debug!(count = tasks.len(), "decoded stored tasks");
            tasks
        }
        Err(error) => {
            warn!(%error, "stored tasks are malformed; starting empty");
            Vec::new()
        }
    }
}

#[tracing::instrument(skip(storage, tasks), fields(count = tasks.len()))]
pub fn save_tasks(storage: &mut dyn KeyValueStore, key: &str, tasks: &[Task]) -> anyhow::Result<()> {
    let serialized = serde_json::to_string(tasks)?;
    storage.set(key, &serialized)
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStorage, load_tasks, save_tasks};
    use crate::task::{Priority, Task};

    #[test]
    fn missing_and_malformed_values_load_empty() {
        let empty = MemoryStorage::new();
        assert!(load_tasks(&empty, "tasks").is_empty());

        let broken = MemoryStorage::new().with_entry("tasks", "[{\"text\":");
        assert!(load_tasks(&broken, "tasks").is_empty());

        let wrong_shape = MemoryStorage::new().with_entry("tasks", "{\"text\":\"x\"}");
        assert!(load_tasks(&wrong_shape, "tasks").is_empty());

        let null = MemoryStorage::new().with_entry("tasks", "null");
        assert!(load_tasks(&null, "tasks").is_empty());
    }

    #[test]
    fn save_then_load_preserves_every_field() {
        let mut storage = MemoryStorage::new();
        let mut done = Task::new("Buy milk", Priority::Low);
        done.is_checked = true;
        let tasks = vec![done, Task::new("Write report", Priority::High)];

        save_tasks(&mut storage, "tasks", &tasks).expect("save tasks");

        assert_eq!(load_tasks(&storage, "tasks"), tasks);
        assert!(storage.get("tasks").is_some_and(|raw| raw.starts_with('[')));
    }

    #[cfg(feature = "fs")]
    #[test]
    fn dir_storage_persists_across_handles() {
        use super::DirStorage;

        let temp = tempfile::tempdir().expect("tempdir");
        let mut storage = DirStorage::open(temp.path()).expect("open storage");
        assert_eq!(storage.get("theme"), None);

        storage.set("theme", "light").expect("write theme");

        let reopened = DirStorage::open(temp.path()).expect("reopen storage");
        assert_eq!(reopened.get("theme").as_deref(), Some("light"));
    }

    #[cfg(feature = "fs")]
    #[test]
    fn dir_storage_rejects_path_like_keys() {
        use super::DirStorage;

        let temp = tempfile::tempdir().expect("tempdir");
        let mut storage = DirStorage::open(temp.path()).expect("open storage");

        assert!(storage.set("../escape", "x").is_err());
        assert!(storage.set("", "x").is_err());
        assert_eq!(storage.get("../escape"), None);
    }
}
