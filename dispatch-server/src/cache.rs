//! Memoization of route searches.
//!
//! The station graph never changes after startup, so a route for a given
//! (origin, destination, blocked set) is valid for the life of the process.
//! Entries are only evicted to bound memory.

use moka::sync::Cache as MokaCache;

use crate::planner::{BlockedStations, RoutePlan};

/// Cache key: (origin, destination, blocked stations).
/// The blocked set is ordered, so equal sets always produce equal keys.
type RouteKey = (String, String, BlockedStations);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached routes. Zero disables caching.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 1024 }
    }
}

impl CacheConfig {
    /// Whether this configuration caches anything.
    pub fn is_enabled(&self) -> bool {
        self.max_capacity > 0
    }
}

/// Cache of planned routes.
///
/// Cheap to share between threads; all methods take `&self`.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RoutePlan>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Return the cached plan, or compute and remember it.
    pub fn get_or_plan(
        &self,
        origin: &str,
        destination: &str,
        blocked: &BlockedStations,
        plan: impl FnOnce() -> RoutePlan,
    ) -> RoutePlan {
        let key = (origin.to_string(), destination.to_string(), blocked.clone());
        self.routes.get_with(key, plan)
    }

    /// Look up a plan without computing it.
    pub fn get(&self, origin: &str, destination: &str, blocked: &BlockedStations) -> Option<RoutePlan> {
        let key = (origin.to_string(), destination.to_string(), blocked.clone());
        self.routes.get(&key)
    }

    /// Get cache statistics (for monitoring).
    ///
    /// Moka updates counts lazily; call [`RouteCache::sync`] first for an
    /// exact figure.
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Flush pending maintenance so counts are exact.
    pub fn sync(&self) {
        self.routes.run_pending_tasks();
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}
