use leptos::prelude::*;
use std::collections::HashMap;

/// Identifier of a cached read query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct QueryKey(pub &'static str);

/// The note list. Every mutation invalidates it.
pub(crate) const NOTES_QUERY: QueryKey = QueryKey("getNotes");

/// Version table for read queries.
///
/// Readers depend on a key's version; bumping it marks the cached result stale
/// so the next read refetches. There is no partial or optimistic update.
#[derive(Clone, Debug, Default)]
pub(crate) struct QueryCache {
    versions: HashMap<QueryKey, u64>,
}

impl QueryCache {
    /// Number of invalidations seen for `key`.
    pub(crate) fn version(&self, key: QueryKey) -> u64 {
        self.versions.get(&key).copied().unwrap_or(0)
    }

    pub(crate) fn invalidate(&mut self, key: QueryKey) {
        let v = self.versions.entry(key).or_default();
        *v = v.wrapping_add(1);
    }
}

/// Reactive handle to the [`QueryCache`], shared through app context.
#[derive(Clone, Copy)]
pub(crate) struct QueryClient {
    cache: RwSignal<QueryCache>,
}

impl QueryClient {
    pub(crate) fn new() -> Self {
        Self {
            cache: RwSignal::new(QueryCache::default()),
        }
    }

    /// Tracked read: a resource calling this refetches after invalidation.
    pub(crate) fn version(&self, key: QueryKey) -> u64 {
        self.cache.with(|c| c.version(key))
    }

    pub(crate) fn invalidate_queries(&self, keys: &[QueryKey]) {
        self.cache.update(|c| {
            for key in keys {
                c.invalidate(*key);
            }
        });
    }
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_starts_at_zero() {
        let cache = QueryCache::default();
        assert_eq!(cache.version(NOTES_QUERY), 0);
    }

    #[test]
    fn test_invalidate_bumps_only_that_key() {
        let mut cache = QueryCache::default();
        let other = QueryKey("getOther");

        cache.invalidate(NOTES_QUERY);
        cache.invalidate(NOTES_QUERY);

        assert_eq!(cache.version(NOTES_QUERY), 2);
        assert_eq!(cache.version(other), 0);
    }

    #[test]
    fn test_query_client_invalidate_queries_bumps_each_key() {
        let client = QueryClient::new();
        let other = QueryKey("getOther");
        assert_eq!(client.version(NOTES_QUERY), 0);

        client.invalidate_queries(&[NOTES_QUERY]);
        assert_eq!(client.version(NOTES_QUERY), 1);
        assert_eq!(client.version(other), 0);

        client.invalidate_queries(&[NOTES_QUERY, other]);
        assert_eq!(client.version(NOTES_QUERY), 2);
        assert_eq!(client.version(other), 1);
    }

    #[test]
    fn test_query_client_copies_share_one_cache() {
        let client = QueryClient::default();
        let copy = client;

        copy.invalidate_queries(&[NOTES_QUERY]);
        assert_eq!(client.version(NOTES_QUERY), 1);
    }

    #[test]
    fn test_notes_query_identifier() {
        assert_eq!(NOTES_QUERY.0, "getNotes");
    }
}
