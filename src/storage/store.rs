use super::backend::{MemoryBackend, SnapshotBackend};
use crate::error::Result;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use uuid::Uuid;

/// Immutable view of the committed word counters.
pub type Snapshot = Arc<HashMap<String, u64>>;

/// Shared handle over the persistent word -> counter mapping.
pub struct CounterStore {
    committed: RwLock<Snapshot>,
    persist_lock: Mutex<()>,
    backend: Box<dyn SnapshotBackend>,
}

impl CounterStore {
    /// Builds a store on top of `backend`, loading whatever it already holds.
    pub fn with_backend<B>(backend: B) -> Result<Arc<Self>>
    where
        B: SnapshotBackend + 'static,
    {
        let initial = backend.load()?;

        Ok(Arc::new(Self {
            committed: RwLock::new(Arc::new(initial)),
            persist_lock: Mutex::new(()),
            backend: Box::new(backend),
        }))
    }

    /// A store that lives only as long as the process.
    pub fn in_memory() -> Arc<Self> {
        Arc::new(Self {
            committed: RwLock::new(Arc::new(HashMap::new())),
            persist_lock: Mutex::new(()),
            backend: Box::new(MemoryBackend::new()),
        })
    }

    /// Opens a session over the latest committed state.
    pub fn open(self: &Arc<Self>) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            store: self.clone(),
            base: self.snapshot(),
            deltas: HashMap::new(),
        };
        tracing::debug!("Opened session {}", session.id);
        session
    }

    /// Number of distinct words committed so far.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn snapshot(&self) -> Snapshot {
        self.committed
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Merges `deltas` into the latest committed snapshot and publishes the result.
    ///
    /// Holding `persist_lock` across the backend write keeps commits strictly ordered:
    /// every merge starts from the snapshot produced by the previous commit. Readers are
    /// unaffected because the `committed` write lock is only taken for the final swap.
    fn commit(&self, session_id: Uuid, deltas: &HashMap<String, u64>) -> Result<()> {
        let _guard = self
            .persist_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut next = (*self.snapshot()).clone();
        for (word, delta) in deltas {
            *next.entry(word.clone()).or_insert(0) += delta;
        }

        let next = Arc::new(next);

        if let Err(e) = self.backend.write(&next) {
            tracing::error!("Session {} failed to persist: {}", session_id, e);
            return Err(e);
        }

        let total = next.len();
        *self
            .committed
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = next;

        tracing::debug!(
            "Session {} persisted {} words ({} total)",
            session_id,
            deltas.len(),
            total
        );
        Ok(())
    }
}

/// One open -> mutate/read -> persist-or-discard cycle over a `CounterStore`.
///
/// Dropping a session discards its increments. `persist` consumes the session, so it
/// cannot be used again after its terminal action.
pub struct Session {
    id: Uuid,
    store: Arc<CounterStore>,
    base: Snapshot,
    deltas: HashMap<String, u64>,
}

impl Session {
    /// Adds one occurrence of `key`, starting it at 1 when absent.
    pub fn increment(&mut self, key: &str) {
        debug_assert!(!key.is_empty(), "counter keys are non-empty normalized words");

        match self.deltas.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.deltas.insert(key.to_string(), 1);
            }
        }
    }

    /// Committed count at open time plus this session's own increments; 0 when absent.
    pub fn read(&self, key: &str) -> u64 {
        let base = self.base.get(key).copied().unwrap_or(0);
        let delta = self.deltas.get(key).copied().unwrap_or(0);
        base + delta
    }

    /// Durably commits this session's increments.
    ///
    /// Fails with `StoreIo` if the backend cannot be written; the previously committed state
    /// stays visible and unchanged in that case.
    pub fn persist(self) -> Result<()> {
        if self.deltas.is_empty() {
            tracing::debug!("Session {} has nothing to persist", self.id);
            return Ok(());
        }
        self.store.commit(self.id, &self.deltas)
    }
}
