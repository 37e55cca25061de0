//! Persistent key-value storage using redb.
//!
//! The catalog persists exactly one entry (the user profile), but the store is
//! a plain string-to-string table so it mirrors the shape of a browser
//! `localStorage`. Every write is broadcast as a [`StorageEvent`] so that other
//! windows sharing the same store can follow changes they did not make.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use tokio::sync::broadcast;
use ulid::Ulid;

use crate::error::CatalogError;

const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Capacity of the change broadcast. Slow listeners that fall further behind
/// than this resynchronize from storage.
const EVENT_CAPACITY: usize = 64;

/// A change to one key, tagged with the writer that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub key: String,
    /// `None` when the key was removed
    pub new_value: Option<String>,
    pub origin: Ulid,
}

/// Port for the persisted key-value entry.
///
/// Writers pass their own `origin` so listeners can skip events they caused,
/// the same way a browser only fires `storage` events in *other* tabs.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError>;
    fn set(&self, key: &str, value: &str, origin: Ulid) -> Result<(), CatalogError>;
    fn remove(&self, key: &str, origin: Ulid) -> Result<(), CatalogError>;
    fn subscribe(&self) -> broadcast::Receiver<StorageEvent>;
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
    events: broadcast::Sender<StorageEvent>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the `kv` table when missing.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        Self::from_database(db)
    }

    /// Volatile storage, used when the data directory is unusable and in tests.
    pub fn in_memory() -> Result<Self, CatalogError> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::from_database(db)
    }

    fn from_database(db: Database) -> Result<Self, CatalogError> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            events,
        })
    }

    fn publish(&self, event: StorageEvent) {
        // No receivers is the normal single-window case.
        let _ = self.events.send(event);
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str, origin: Ulid) -> Result<(), CatalogError> {
        {
            let db = self.db.read();
            let write_txn = db.begin_write()?;
            {
                let mut table = write_txn.open_table(KV_TABLE)?;
                table.insert(key, value)?;
            }
            write_txn.commit()?;
        }

        self.publish(StorageEvent {
            key: key.to_string(),
            new_value: Some(value.to_string()),
            origin,
        });
        Ok(())
    }

    fn remove(&self, key: &str, origin: Ulid) -> Result<(), CatalogError> {
        {
            let db = self.db.read();
            let write_txn = db.begin_write()?;
            {
                let mut table = write_txn.open_table(KV_TABLE)?;
                table.remove(key)?;
            }
            write_txn.commit()?;
        }

        self.publish(StorageEvent {
            key: key.to_string(),
            new_value: None,
            origin,
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.redb")).unwrap();
        let origin = Ulid::new();

        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "v1", origin).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v1"));

        storage.set("k", "v2", origin).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v2"));

        storage.remove("k", origin).unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let storage = Storage::in_memory().unwrap();
        storage.remove("absent", Ulid::new()).unwrap();
    }

    #[test]
    fn test_value_survives_reopen() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("test.redb");

        {
            let storage = Storage::new(&path).unwrap();
            storage.set("k", "persisted", Ulid::new()).unwrap();
        }

        let reopened = Storage::new(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("persisted"));
    }

    #[tokio::test]
    async fn test_writes_are_broadcast_with_origin() {
        let storage = Storage::in_memory().unwrap();
        let mut events = storage.subscribe();
        let origin = Ulid::new();

        storage.set("k", "v", origin).unwrap();
        storage.remove("k", origin).unwrap();

        let first = events.recv().await.unwrap();
        assert_eq!(first.key, "k");
        assert_eq!(first.new_value.as_deref(), Some("v"));
        assert_eq!(first.origin, origin);

        let second = events.recv().await.unwrap();
        assert_eq!(second.new_value, None);
    }

    #[test]
    fn test_clones_share_database() {
        let storage = Storage::in_memory().unwrap();
        let other = storage.clone();

        storage.set("shared", "yes", Ulid::new()).unwrap();
        assert_eq!(other.get("shared").unwrap().as_deref(), Some("yes"));
    }
}
