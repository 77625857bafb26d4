use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Expiry and capacity of one cache instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long an entry stays valid after insertion.
    pub ttl: Duration,
    /// Maximum number of live entries.
    pub max_entries: usize,
}

impl CacheConfig {
    #[must_use]
    pub const fn new(ttl: Duration, max_entries: usize) -> Self {
        Self { ttl, max_entries }
    }

    /// Annotated-text cache: 5 minutes, 1000 entries.
    #[must_use]
    pub const fn annotation_defaults() -> Self {
        Self::new(Duration::from_secs(5 * 60), 1000)
    }

    /// Structured-data schema cache: 10 minutes, 500 entries.
    #[must_use]
    pub const fn schema_defaults() -> Self {
        Self::new(Duration::from_secs(10 * 60), 500)
    }

    /// A zero TTL or zero capacity means nothing is ever stored.
    #[must_use]
    pub const fn stores_nothing(&self) -> bool {
        self.max_entries == 0 || self.ttl.is_zero()
    }

    /// Occupancy above which expired entries are swept before inserting.
    #[must_use]
    pub const fn sweep_threshold(&self) -> usize {
        self.max_entries * 4 / 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        assert_eq!(CacheConfig::annotation_defaults().ttl, Duration::from_secs(300));
        assert_eq!(CacheConfig::annotation_defaults().max_entries, 1000);
        assert_eq!(CacheConfig::schema_defaults().ttl, Duration::from_secs(600));
        assert_eq!(CacheConfig::schema_defaults().max_entries, 500);
    }

    #[test]
    fn sub_second_ttl_is_kept() {
        let config = CacheConfig::new(Duration::from_millis(500), 10);
        assert_eq!(config.ttl, Duration::from_millis(500));
        assert!(!config.stores_nothing());
    }

    #[test]
    fn zero_ttl_or_capacity_stores_nothing() {
        assert!(CacheConfig::new(Duration::ZERO, 10).stores_nothing());
        assert!(CacheConfig::new(Duration::from_secs(60), 0).stores_nothing());
        assert!(!CacheConfig::annotation_defaults().stores_nothing());
    }

    #[test]
    fn sweep_threshold_is_eighty_percent() {
        assert_eq!(CacheConfig::annotation_defaults().sweep_threshold(), 800);
        assert_eq!(CacheConfig::new(Duration::ZERO, 10).sweep_threshold(), 8);
    }
}
