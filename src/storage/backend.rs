//! Snapshot Backends
//!
//! The durable medium behind a `CounterStore`. A backend only ever sees complete
//! snapshots; it must either replace the stored snapshot entirely or leave it untouched.

use super::store::Snapshot;
use crate::error::Result;

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// Durable storage for the word -> counter mapping.
pub trait SnapshotBackend: Send + Sync {
    /// Loads the last written snapshot, or an empty map if nothing was written yet.
    fn load(&self) -> Result<HashMap<String, u64>>;

    /// Replaces the stored snapshot. On error the previous snapshot must remain readable.
    fn write(&self, snapshot: &Snapshot) -> Result<()>;
}

/// Bincode snapshot on local disk, replaced atomically via a temp file and rename.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotBackend for FileBackend {
    fn load(&self) -> Result<HashMap<String, u64>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No snapshot at {}, starting empty", self.path.display());
                return Ok(HashMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: HashMap<String, u64> = bincode::deserialize_from(BufReader::new(file))?;
        tracing::info!(
            "Loaded {} words from {}",
            snapshot.len(),
            self.path.display()
        );
        Ok(snapshot)
    }

    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        // The temp file must live on the same filesystem for the rename to be atomic.
        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            bincode::serialize_into(&mut writer, &**snapshot)?;
            writer.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        sync_dir(parent_dir)?;

        tracing::debug!(
            "Wrote snapshot of {} words to {}",
            snapshot.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// The rename is only durable once the directory entry itself is flushed.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> std::io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Volatile backend used when no data path is configured.
///
/// Holds the same `Arc` the store publishes, so a write never copies the map.
#[derive(Default)]
pub struct MemoryBackend {
    snapshot: Mutex<Snapshot>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self) -> Result<HashMap<String, u64>> {
        let snapshot = self
            .snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok((**snapshot).clone())
    }

    fn write(&self, snapshot: &Snapshot) -> Result<()> {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::clone(snapshot);
        Ok(())
    }
}
