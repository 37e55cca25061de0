//! Profile store with write-through persistence and cross-window sync.
//!
//! One `ProfileStore` exists per window. All windows share a single
//! [`KeyValueStore`]; a store applies changes made by other windows through
//! [`ProfileStore::apply_external`], usually driven by [`ProfileStore::spawn_sync`].

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use ulid::Ulid;

use super::{Profile, STORAGE_KEY};
use crate::storage::{KeyValueStore, StorageEvent};

/// Observable state of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub profile: Option<Profile>,
    /// False until the persisted value has been read (or the read failed)
    pub ready: bool,
}

struct Inner {
    profile: Option<Profile>,
    ready: bool,
    /// Last value known to be in storage; writes equal to it are skipped
    last_serialized: Option<String>,
}

impl Inner {
    fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            profile: self.profile.clone(),
            ready: self.ready,
        }
    }
}

pub struct ProfileStore {
    id: Ulid,
    backend: Arc<dyn KeyValueStore>,
    inner: RwLock<Inner>,
    snapshots: watch::Sender<ProfileSnapshot>,
}

impl ProfileStore {
    /// Create a store that has not read storage yet (`ready == false`).
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        let (snapshots, _) = watch::channel(ProfileSnapshot::default());
        Self {
            id: Ulid::new(),
            backend,
            inner: RwLock::new(Inner {
                profile: None,
                ready: false,
                last_serialized: None,
            }),
            snapshots,
        }
    }

    /// Create a store and immediately load the persisted profile.
    pub fn open(backend: Arc<dyn KeyValueStore>) -> Self {
        let store = Self::new(backend);
        store.load();
        store
    }

    /// Origin tag this store attaches to its writes.
    pub fn id(&self) -> Ulid {
        self.id
    }

    /// Read the persisted profile and mark the store ready.
    ///
    /// Read errors and malformed entries both leave the profile absent.
    pub fn load(&self) {
        let stored = match self.backend.get(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read persisted profile: {}", e);
                None
            }
        };

        let profile = stored.as_deref().and_then(Profile::from_persisted);
        if stored.is_some() && profile.is_none() {
            debug!("Discarding malformed persisted profile");
        }

        let mut inner = self.inner.write();
        inner.last_serialized = match &profile {
            Some(p) => p.to_persisted().ok(),
            None => None,
        };
        inner.profile = profile;
        inner.ready = true;
        let snapshot = inner.snapshot();
        drop(inner);

        info!(has_profile = snapshot.profile.is_some(), "Profile store ready");
        self.snapshots.send_replace(snapshot);
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        self.inner.read().snapshot()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.inner.read().profile.clone()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.read().ready
    }

    /// Replace the profile with the trimmed inputs.
    ///
    /// Returns `true` if the profile changed. Blank inputs are rejected and an
    /// unchanged value is a no-op (no write, no notification).
    pub fn save(&self, username: &str, job_title: &str) -> bool {
        match Profile::new(username, job_title) {
            Some(next) => self.replace(Some(next)),
            None => {
                debug!("Ignoring profile save with blank fields");
                false
            }
        }
    }

    /// Clear the profile and remove the persisted entry.
    pub fn reset(&self) -> bool {
        self.replace(None)
    }

    fn replace(&self, next: Option<Profile>) -> bool {
        let mut inner = self.inner.write();
        if inner.profile == next {
            return false;
        }
        inner.profile = next;
        self.persist(&mut inner);
        let snapshot = inner.snapshot();
        drop(inner);

        self.snapshots.send_replace(snapshot);
        true
    }

    /// Write-through. Failures are logged and swallowed; memory stays
    /// authoritative for the session.
    fn persist(&self, inner: &mut Inner) {
        let serialized = match &inner.profile {
            Some(profile) => match profile.to_persisted() {
                Ok(json) => Some(json),
                Err(e) => {
                    warn!("Failed to serialize profile: {}", e);
                    return;
                }
            },
            None => None,
        };

        if serialized == inner.last_serialized {
            return;
        }

        let result = match &serialized {
            Some(json) => self.backend.set(STORAGE_KEY, json, self.id),
            None => self.backend.remove(STORAGE_KEY, self.id),
        };

        match result {
            Ok(()) => inner.last_serialized = serialized,
            Err(e) => warn!("Failed to persist profile: {}", e),
        }
    }

    /// Apply a change notification from another window.
    ///
    /// Events for other keys or written by this store are ignored. Applying a
    /// value equal to the current one is a no-op, so replays never loop.
    pub fn apply_external(&self, event: &StorageEvent) -> bool {
        if event.key != STORAGE_KEY || event.origin == self.id {
            return false;
        }
        self.apply_value(event.new_value.clone())
    }

    /// Re-read storage and adopt whatever it holds, used after missed events.
    pub fn resync(&self) -> bool {
        let stored = match self.backend.get(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to re-read persisted profile: {}", e);
                return false;
            }
        };
        self.apply_value(stored)
    }

    fn apply_value(&self, raw: Option<String>) -> bool {
        let next = raw.as_deref().and_then(Profile::from_persisted);

        let mut inner = self.inner.write();
        inner.last_serialized = raw;
        if inner.profile == next {
            return false;
        }
        inner.profile = next;
        let snapshot = inner.snapshot();
        drop(inner);

        debug!(has_profile = snapshot.profile.is_some(), "Applied external profile change");
        self.snapshots.send_replace(snapshot);
        true
    }

    /// Watch snapshots; the receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<ProfileSnapshot> {
        self.snapshots.subscribe()
    }

    /// Start listening for changes made by other windows.
    ///
    /// The listener holds only a weak reference to the store and stops when
    /// the returned handle is dropped. Must be called inside a tokio runtime.
    pub fn spawn_sync(self: &Arc<Self>) -> SyncHandle {
        let events = self.backend.subscribe();
        let store = Arc::downgrade(self);
        SyncHandle {
            task: tokio::spawn(listen(store, events)),
        }
    }
}

async fn listen(store: Weak<ProfileStore>, mut events: broadcast::Receiver<StorageEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => {
                let Some(store) = store.upgrade() else { break };
                store.apply_external(&event);
            }
            Err(broadcast::error::RecvError::Lagged(missed)) => {
                warn!("Profile sync lagged by {} events, resyncing", missed);
                let Some(store) = store.upgrade() else { break };
                store.resync();
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

/// Owns the cross-window listener task; aborts it on drop.
pub struct SyncHandle {
    task: JoinHandle<()>,
}

impl SyncHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
