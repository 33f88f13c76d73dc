//! Counter Storage Module
//!
//! Owns the persistent mapping from normalized word to occurrence counter.
//!
//! ## Core Concepts
//! - **Snapshot**: The committed state is an immutable `Arc<HashMap>`. Readers clone the
//!   handle under a short read lock and never wait on disk I/O.
//! - **Session**: `CounterStore::open` hands out a session that sees the snapshot taken at
//!   open time plus its own increments (the delta).
//! - **Persist**: Commits are serialized. Each one merges the session's delta into the
//!   latest committed snapshot, writes it through the backend, and only then publishes it,
//!   so concurrent sessions never drop each other's increments.
//! - **Backends**: `FileBackend` writes bincode snapshots atomically; `MemoryBackend` keeps
//!   everything in process.

pub mod backend;
pub mod store;
