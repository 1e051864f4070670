//! Verification cache: time-bounded memo of URL outcomes.
//!
//! Expired entries are evicted lazily on read; there is no background sweep.
//! The cache holds at most `max_entries` keys. A put into a full cache first
//! drops expired entries, then the entry closest to expiry (with a fixed TTL,
//! the oldest insert).

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;
use url::Url;

use crate::verification::models::VerificationOutcome;

pub trait VerificationCache: Send + Sync {
    /// Returns `None` when the key is absent or its entry has expired.
    fn get(&self, url: &str) -> Option<VerificationOutcome>;

    /// Replaces any existing entry for the key.
    fn put(&self, url: &str, outcome: VerificationOutcome);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    outcome: VerificationOutcome,
    expires_at: Instant,
}

/// Default in-memory cache with a fixed TTL and a capacity bound.
pub struct TtlCache {
    ttl: Duration,
    max_entries: usize,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl TtlCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            ttl,
            max_entries: max_entries.max(1),
            entries: RwLock::new(HashMap::new()),
        }
    }
}

fn make_room(entries: &mut HashMap<String, CacheEntry>, max_entries: usize, now: Instant) {
    if entries.len() < max_entries {
        return;
    }
    entries.retain(|_, e| now < e.expires_at);

    while entries.len() >= max_entries {
        let oldest = entries
            .iter()
            .min_by_key(|(_, e)| e.expires_at)
            .map(|(k, _)| k.clone());
        match oldest {
            Some(key) => {
                entries.remove(&key);
                debug!(url = %key, "Evicted verification entry at capacity");
            }
            None => break,
        }
    }
}

impl VerificationCache for TtlCache {
    fn get(&self, url: &str) -> Option<VerificationOutcome> {
        let key = normalize_key(url);
        let now = Instant::now();

        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            match entries.get(&key) {
                None => return None,
                Some(entry) if now < entry.expires_at => return Some(entry.outcome.clone()),
                Some(_) => {}
            }
        }

        // Expired: evict, unless a concurrent writer refreshed it meanwhile
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.get(&key).is_some_and(|e| now >= e.expires_at) {
            entries.remove(&key);
            debug!(url = %key, "Evicted expired verification entry");
        }
        None
    }

    fn put(&self, url: &str, outcome: VerificationOutcome) {
        let key = normalize_key(url);
        let now = Instant::now();
        let entry = CacheEntry {
            outcome,
            expires_at: now + self.ttl,
        };

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if !entries.contains_key(&key) {
            make_room(&mut entries, self.max_entries, now);
        }
        entries.insert(key, entry);
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Normalizes a URL into a cache key: lowercase scheme/host, no fragment,
/// no trailing slash. Unparsable input is trimmed and lowercased.
pub fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim();
    match Url::parse(trimmed) {
        Ok(mut url) => {
            url.set_fragment(None);
            let s = url.to_string();
            s.strip_suffix('/').map(str::to_string).unwrap_or(s)
        }
        Err(_) => trimmed.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::models::VerificationSource;

    fn outcome(url: &str) -> VerificationOutcome {
        VerificationOutcome::reachable(url, VerificationSource::Probe)
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_fresh_before_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60), 100);
        let stored = outcome("https://a.example/x");
        cache.put("https://a.example/x", stored.clone());

        tokio::time::advance(Duration::from_secs(59)).await;
        assert_eq!(cache.get("https://a.example/x"), Some(stored));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expires_at_ttl() {
        let cache = TtlCache::new(Duration::from_secs(60), 100);
        cache.put("https://a.example/x", outcome("https://a.example/x"));

        tokio::time::advance(Duration::from_secs(60)).await;
        assert!(cache.get("https://a.example/x").is_none());
        assert_eq!(cache.len(), 0, "expired entry evicted on read");
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_ttl_always_misses() {
        let cache = TtlCache::new(Duration::ZERO, 100);
        cache.put("https://a.example/x", outcome("https://a.example/x"));
        assert!(cache.get("https://a.example/x").is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_entry() {
        let cache = TtlCache::new(Duration::from_secs(60), 100);
        cache.put("https://a.example/x", outcome("https://a.example/x"));

        let mut replacement = outcome("https://a.example/x");
        replacement.is_reachable = false;
        cache.put("https://a.example/x", replacement.clone());

        assert_eq!(cache.get("https://a.example/x"), Some(replacement));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_is_miss() {
        let cache = TtlCache::new(Duration::from_secs(60), 100);
        assert!(cache.get("https://nothing.example").is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_evicts_oldest_entry() {
        let cache = TtlCache::new(Duration::from_secs(60), 3);
        for i in 0..5 {
            let url = format!("https://site{i}.example/page");
            cache.put(&url, outcome(&url));
            tokio::time::advance(Duration::from_secs(1)).await;
        }

        assert_eq!(cache.len(), 3);
        assert!(cache.get("https://site0.example/page").is_none());
        assert!(cache.get("https://site1.example/page").is_none());
        assert!(cache.get("https://site4.example/page").is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_drops_expired_before_live_entries() {
        let cache = TtlCache::new(Duration::from_secs(10), 2);
        cache.put("https://old.example/a", outcome("https://old.example/a"));
        tokio::time::advance(Duration::from_secs(5)).await;
        cache.put("https://live.example/b", outcome("https://live.example/b"));
        tokio::time::advance(Duration::from_secs(6)).await;

        cache.put("https://new.example/c", outcome("https://new.example/c"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("https://live.example/b").is_some());
        assert!(cache.get("https://new.example/c").is_some());
    }

    #[tokio::test]
    async fn test_replacing_key_at_capacity_keeps_others() {
        let cache = TtlCache::new(Duration::from_secs(60), 2);
        cache.put("https://a.example/x", outcome("https://a.example/x"));
        cache.put("https://b.example/y", outcome("https://b.example/y"));
        cache.put("https://a.example/x", outcome("https://a.example/x"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("https://b.example/y").is_some());
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(
            normalize_key("HTTPS://Docs.Example.COM/Path/#section"),
            "https://docs.example.com/Path"
        );
        assert_eq!(
            normalize_key("https://docs.example.com/"),
            "https://docs.example.com"
        );
        assert_eq!(normalize_key("  Not A Url "), "not a url");
    }
}
