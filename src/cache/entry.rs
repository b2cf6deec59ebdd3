//! Cache Entry Module
//!
//! Defines a single cached response body and the instant it was stored.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload plus its creation time.
///
/// Timestamps come from the tokio clock so paused-time tests can drive expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Creation instant
    pub created_at: Instant,
    /// The stored bytes
    pub value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Age ==
    /// How long the entry had existed at `now`. Zero if `now` precedes creation.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry is due for removal at `now`.
    ///
    /// Boundary condition: an entry whose age equals `expiry` is stale.
    pub fn is_stale_at(&self, now: Instant, expiry: Duration) -> bool {
        self.age_at(now) >= expiry
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(b"pikachu".to_vec());

        assert_eq!(entry.value, b"pikachu");
        assert!(!entry.is_stale_at(entry.created_at, Duration::from_secs(5)));
    }

    #[test]
    fn test_age_before_creation_is_zero() {
        let entry = CacheEntry::new(Vec::new());
        let earlier = entry.created_at - Duration::from_secs(1);

        assert_eq!(entry.age_at(earlier), Duration::ZERO);
        assert!(!entry.is_stale_at(earlier, Duration::from_secs(5)));
    }

    #[test]
    fn test_stale_boundary_condition() {
        let entry = CacheEntry::new(b"x".to_vec());
        let expiry = Duration::from_secs(5);

        assert!(!entry.is_stale_at(entry.created_at + Duration::from_millis(4999), expiry));
        assert!(entry.is_stale_at(entry.created_at + expiry, expiry));
        assert!(entry.is_stale_at(entry.created_at + Duration::from_secs(9), expiry));
    }

    #[test]
    fn test_zero_expiry_is_always_stale() {
        let entry = CacheEntry::new(b"x".to_vec());
        assert!(entry.is_stale_at(entry.created_at, Duration::ZERO));
    }
}
