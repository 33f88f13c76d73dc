//! Ingestion Data Types
//!
//! Request/response DTOs for the counter endpoint and the source classification used by
//! the pipeline.

use crate::error::WordCounterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the text to ingest comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `data` is the literal text.
    Inline,
    /// `data` is a local file path.
    File,
    /// `data` is an http(s) URL.
    Url,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Inline => "string",
            SourceKind::File => "file",
            SourceKind::Url => "url",
        }
    }
}

impl FromStr for SourceKind {
    type Err = WordCounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(SourceKind::Inline),
            "file" => Ok(SourceKind::File),
            "url" => Ok(SourceKind::Url),
            other => Err(WordCounterError::InvalidSource(other.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/words/counter`.
///
/// `type` stays a plain string so that unknown kinds reach the pipeline and fail with
/// `InvalidSource` instead of a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: String,
}

/// Error body returned by the HTTP layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// How much a single `ingest` call folded into the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Lines (or inline bodies) that were normalized.
    pub lines: usize,
    /// Tokens that incremented a counter.
    pub tokens: usize,
}
