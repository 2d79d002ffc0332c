use std::collections::HashMap;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::types::CorpusIndex;
use crate::config::TextConfig;
use crate::id::MovieId;
use crate::logging::ResourceMetrics;

/// Content fingerprint of a corpus under a tokenizer configuration.
///
/// Covers every setting that changes the resulting index and every
/// `(id, text)` pair in order, so equal fingerprints mean equal indexes.
pub fn fingerprint<S: AsRef<str>>(documents: &[(MovieId, S)], config: &TextConfig) -> String {
    let mut hasher = Sha256::new();
    hasher.update(
        format!(
            "min_token_len={};stop_words={};stemming={}\n",
            config.min_token_len, config.stop_words, config.stemming
        )
        .as_bytes(),
    );
    for (id, text) in documents {
        hasher.update(id.as_str().as_bytes());
        hasher.update(b"\x1f");
        hasher.update(text.as_ref().as_bytes());
        hasher.update(b"\x1e");
    }
    hex::encode(hasher.finalize())
}

/// Built indexes keyed by corpus fingerprint.
///
/// Entries are immutable once inserted; a lookup either returns a shared
/// index or builds and stores a fresh one.
#[derive(Debug, Default)]
pub struct IndexCache {
    entries: HashMap<String, Arc<CorpusIndex>>,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached index for this corpus, building it on a miss
    pub fn get_or_build<S: AsRef<str>>(
        &mut self,
        documents: &[(MovieId, S)],
        config: &TextConfig,
        metrics: &ResourceMetrics,
    ) -> Arc<CorpusIndex> {
        let key = fingerprint(documents, config);
        if let Some(index) = self.entries.get(&key) {
            metrics.record_cache_hit();
            debug!(fingerprint = %&key[..12], "index_cache_hit");
            return Arc::clone(index);
        }

        metrics.record_cache_miss();
        metrics.record_index_build();
        debug!(fingerprint = %&key[..12], "index_cache_miss");
        let index = Arc::new(CorpusIndex::build(documents, config));
        self.entries.insert(key, Arc::clone(&index));
        index
    }
}
