use crate::normalizer::tokenizer::normalize_key;
use crate::storage::store::CounterStore;
use std::sync::Arc;

/// Read-only lookups against the counter store.
pub struct QueryService {
    store: Arc<CounterStore>,
}

impl QueryService {
    pub fn new(store: Arc<CounterStore>) -> Arc<Self> {
        Arc::new(Self { store })
    }

    /// Committed count for `word` after normalization; 0 when never ingested.
    pub fn query(&self, word: &str) -> u64 {
        let key = normalize_key(word);
        let session = self.store.open();
        let counter = session.read(&key);

        tracing::debug!("Query '{}' (key '{}') -> {}", word, key, counter);
        counter
    }
}
