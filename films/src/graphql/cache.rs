//! In-memory response cache keyed by query text

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use super::GraphQlRequest;

/// How a query interacts with the cache
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum FetchPolicy {
    /// Serve from the cache when possible, otherwise fetch and store
    #[default]
    CacheFirst,
    /// Always fetch, then store the fresh result
    NetworkOnly,
    /// Always fetch, never read or write the cache
    NoCache,
}

impl FetchPolicy {
    pub fn reads_cache(self) -> bool {
        matches!(self, FetchPolicy::CacheFirst)
    }

    pub fn writes_cache(self) -> bool {
        !matches!(self, FetchPolicy::NoCache)
    }
}

/// Cache key: the query document with whitespace collapsed, plus variables
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn for_request(request: &GraphQlRequest) -> Self {
        let mut key = request.query.split_whitespace().collect::<Vec<_>>().join(" ");
        if let Some(variables) = &request.variables {
            key.push('|');
            key.push_str(&variables.to_string());
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Successful `data` payloads by [`CacheKey`]
///
/// Entries live until evicted or cleared; there is no size bound. Shared
/// between tasks through the owning client, hence the lock.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<CacheKey, Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<Value> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn insert(&self, key: CacheKey, data: Value) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, data);
    }

    /// Drop one entry, returning whether it existed.
    pub fn evict(&self, key: &CacheKey) -> bool {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .is_some()
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
