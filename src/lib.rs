//! Word Frequency Counting Service
//!
//! Clients submit text (inline, from a local file, or fetched from a URL); the service
//! tokenizes it, accumulates per-word counters in a persistent store and answers point
//! queries for a single word.
//!
//! ## Modules
//! - **`normalizer`**: The text normalization contract (what counts as "the same word").
//! - **`storage`**: The counter store with its open/mutate/persist session lifecycle and
//!   snapshot backends.
//! - **`ingestion`**: The pipeline that folds string, file and URL sources into a session,
//!   plus the HTTP handler and the fetch client.
//! - **`query`**: Single-word lookups.
//! - **`router`** / **`config`** / **`error`**: HTTP wiring, runtime configuration and the
//!   shared error type.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod normalizer;
pub mod query;
pub mod router;
pub mod storage;

pub use error::{Result, WordCounterError};
