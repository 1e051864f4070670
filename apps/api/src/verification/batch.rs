//! Batch verification: cache-first, width-bounded, paced.
//!
//! URLs are processed in fixed-width chunks. Within a chunk every cache miss
//! is probed concurrently (awaited together on the calling task), so no more
//! than `batch_width` probes are ever in flight. Chunks are separated by a
//! fixed pacing delay. Output is index-aligned with input.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::debug;

use crate::config::VerificationSettings;
use crate::verification::cache::{normalize_key, VerificationCache};
use crate::verification::models::VerificationOutcome;
use crate::verification::verifier::LinkVerifier;

enum Slot {
    Cached(VerificationOutcome),
    Pending(usize),
}

#[derive(Clone)]
pub struct BatchVerifier {
    verifier: LinkVerifier,
    cache: Arc<dyn VerificationCache>,
    batch_width: usize,
    batch_delay: Duration,
}

impl BatchVerifier {
    pub fn new(
        verifier: LinkVerifier,
        cache: Arc<dyn VerificationCache>,
        settings: &VerificationSettings,
    ) -> Self {
        Self {
            verifier,
            cache,
            batch_width: settings.batch_width.max(1),
            batch_delay: settings.batch_delay,
        }
    }

    pub fn cache(&self) -> &Arc<dyn VerificationCache> {
        &self.cache
    }

    /// Verifies every URL, returning one outcome per input in input order.
    pub async fn verify_all(&self, urls: &[String]) -> Vec<VerificationOutcome> {
        let mut outcomes = Vec::with_capacity(urls.len());
        let mut cache_hits = 0usize;

        for (i, chunk) in urls.chunks(self.batch_width).enumerate() {
            if i > 0 && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }

            let mut to_probe: Vec<&str> = Vec::new();
            let mut pending_index: HashMap<String, usize> = HashMap::new();

            let slots: Vec<Slot> = chunk
                .iter()
                .map(|url| {
                    if let Some(outcome) = self.cache.get(url) {
                        cache_hits += 1;
                        return Slot::Cached(outcome);
                    }
                    // Same URL twice in one chunk is probed once
                    let idx = *pending_index.entry(normalize_key(url)).or_insert_with(|| {
                        to_probe.push(url.as_str());
                        to_probe.len() - 1
                    });
                    Slot::Pending(idx)
                })
                .collect();

            let fresh = join_all(to_probe.iter().map(|url| self.verifier.verify(url))).await;

            for (url, outcome) in to_probe.iter().zip(&fresh) {
                self.cache.put(url, outcome.clone());
            }

            // Cached and deduplicated outcomes echo the caller's spelling
            outcomes.extend(chunk.iter().zip(slots).map(|(url, slot)| {
                let outcome = match slot {
                    Slot::Cached(outcome) => outcome,
                    Slot::Pending(idx) => fresh[idx].clone(),
                };
                VerificationOutcome {
                    url: url.clone(),
                    ..outcome
                }
            }));
        }

        debug!(
            total = urls.len(),
            cache_hits,
            probed = urls.len() - cache_hits,
            "Batch verification complete"
        );

        outcomes
    }
}
