//! Ingestion Service Module
//!
//! Consumes a text source and folds its tokens into the counter store.
//!
//! ## Workflow
//! 1. **Classify**: The request `type` is parsed into a `SourceKind` (`string`, `file`, `url`).
//! 2. **Acquire**: Inline text is used as-is, files are streamed line by line, URLs are
//!    validated and then streamed through the `FetchClient`.
//! 3. **Fold**: Every line is normalized and each token increments the open session.
//! 4. **Persist**: The session is committed exactly once at the end. File sources persist
//!    even when reading fails part-way, so already-folded lines are kept.

pub mod fetch;
pub mod handlers;
pub mod pipeline;
pub mod types;
