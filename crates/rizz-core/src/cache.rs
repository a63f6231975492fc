//! In-memory translation cache.
//!
//! Entries expire lazily: a read older than the TTL is a miss, but the entry
//! stays in the map until it is overwritten or the cache is cleared.

use std::fmt;
use std::time::Duration;

use dashmap::DashMap;
use rizz_types::{CacheStats, ProviderTag};
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub source: String,
    pub target: String,
    pub text: String,
}

impl CacheKey {
    pub fn new(source: &str, target: &str, text: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            text: text.to_string(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source, self.target, self.text)
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub translation: String,
    pub provider: ProviderTag,
    pub created_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

pub struct TranslationCache {
    entries: DashMap<CacheKey, CacheEntry>,
    ttl: Duration,
}

impl TranslationCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, source: &str, target: &str, text: &str) -> Option<CacheEntry> {
        let key = CacheKey::new(source, target, text);
        let entry = self.entries.get(&key)?;

        if entry.is_expired(self.ttl) {
            tracing::debug!(%key, "cache entry expired");
            return None;
        }

        Some(entry.value().clone())
    }

    pub fn set(
        &self,
        source: &str,
        target: &str,
        text: &str,
        translation: &str,
        provider: ProviderTag,
    ) {
        let key = CacheKey::new(source, target, text);
        let entry = CacheEntry {
            translation: translation.to_string(),
            provider,
            created_at: Instant::now(),
        };
        self.entries.insert(key, entry);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Stored entries, expired ones included
    pub fn stats(&self) -> CacheStats {
        let mut keys: Vec<String> = self.entries.iter().map(|e| e.key().to_string()).collect();
        keys.sort();

        CacheStats {
            size: keys.len(),
            keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(24 * 60 * 60);

    #[test]
    fn test_set_then_get() {
        let cache = TranslationCache::new(DAY);
        cache.set("en", "es", "Hello", "Hola", ProviderTag::Primary);

        let entry = cache.get("en", "es", "Hello").unwrap();
        assert_eq!(entry.translation, "Hola");
        assert_eq!(entry.provider, ProviderTag::Primary);
        assert!(cache.get("en", "fr", "Hello").is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let cache = TranslationCache::new(DAY);
        cache.set("en", "es", "Hello", "Hola", ProviderTag::Primary);
        cache.set("en", "es", "Hello", "Buenas", ProviderTag::Secondary);

        let entry = cache.get("en", "es", "Hello").unwrap();
        assert_eq!(entry.translation, "Buenas");
        assert_eq!(entry.provider, ProviderTag::Secondary);
        assert_eq!(cache.stats().size, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_a_miss_but_stays_stored() {
        let cache = TranslationCache::new(DAY);
        cache.set("en", "es", "Hello", "Hola", ProviderTag::Primary);

        tokio::time::advance(DAY - Duration::from_secs(1)).await;
        assert!(cache.get("en", "es", "Hello").is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.get("en", "es", "Hello").is_none());
        assert_eq!(cache.stats().size, 1);
    }

    #[test]
    fn test_clear_and_stats() {
        let cache = TranslationCache::new(DAY);
        cache.set("en", "es", "Hello", "Hola", ProviderTag::Primary);
        cache.set("en", "fr", "Hello", "Bonjour", ProviderTag::Primary);

        let stats = cache.stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.keys, vec!["en:es:Hello", "en:fr:Hello"]);

        cache.clear();
        assert_eq!(cache.stats().size, 0);
        assert!(cache.get("en", "es", "Hello").is_none());
    }
}
