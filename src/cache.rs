use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Short-lived in-memory store of response bodies keyed by URL.
#[derive(Debug)]
pub(crate) struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedBody>>,
}

#[derive(Debug)]
struct CachedBody {
    fetched_at: Instant,
    body: Arc<str>,
}

impl ResponseCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the body stored for `url` if it is younger than the TTL.
    pub(crate) fn get(&self, url: &str) -> Option<Arc<str>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(url) {
            Some(entry) if entry.fetched_at.elapsed() < self.ttl => Some(Arc::clone(&entry.body)),
            Some(_) => {
                entries.remove(url);
                None
            }
            None => None,
        }
    }

    pub(crate) fn insert(&self, url: String, body: Arc<str>) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.retain(|_, e| e.fetched_at.elapsed() < self.ttl);
        entries.insert(
            url,
            CachedBody {
                fetched_at: Instant::now(),
                body,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_within_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("https://example.test/a".to_string(), Arc::from("{}"));
        assert_eq!(cache.get("https://example.test/a").as_deref(), Some("{}"));
        assert!(cache.get("https://example.test/b").is_none());
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert("https://example.test/a".to_string(), Arc::from("{}"));
        assert!(cache.get("https://example.test/a").is_none());
        assert!(cache.entries.lock().unwrap().is_empty());
    }
}
