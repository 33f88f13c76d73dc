use serde::{Deserialize, Serialize};

/// Body of `GET /api/words/stats/:word`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordStats {
    /// The word as the client sent it.
    pub word: String,
    pub counter: u64,
}
