//! Query Service Module
//!
//! Answers point lookups for a single word's counter.
//!
//! The raw word is normalized with `normalize_key`, read from a fresh store session and the
//! session is discarded without persisting. Unknown words report 0.

pub mod handlers;
pub mod service;
pub mod types;
