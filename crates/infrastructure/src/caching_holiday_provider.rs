use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jrclaw_application::HolidayProvider;
use jrclaw_core::AppResult;
use jrclaw_domain::{HolidaySet, StateCode};
use tokio::sync::RwLock;
use tracing::debug;

const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);
const DEFAULT_MAX_ENTRIES: usize = 512;

type CacheKey = (i32, Option<StateCode>);

#[derive(Debug, Clone)]
struct HolidayCacheEntry {
    holidays: HolidaySet,
    expires_at: Instant,
    sequence: u64,
}

/// Memoising decorator for holiday providers, keyed by `(year, state)`.
///
/// Entries expire after a time-to-live and the cache never holds more than
/// `max_entries` sets; when full, the earliest stored set is evicted. Failed lookups are
/// not cached.
pub struct CachingHolidayProvider {
    inner: Arc<dyn HolidayProvider>,
    ttl: Duration,
    max_entries: usize,
    next_sequence: AtomicU64,
    entries: RwLock<HashMap<CacheKey, HolidayCacheEntry>>,
}

impl CachingHolidayProvider {
    /// Wraps a provider with a one-day time-to-live and the default capacity.
    #[must_use]
    pub fn new(inner: Arc<dyn HolidayProvider>) -> Self {
        Self::with_limits(inner, DEFAULT_TTL, DEFAULT_MAX_ENTRIES)
    }

    /// Wraps a provider with an explicit time-to-live and capacity.
    #[must_use]
    pub fn with_limits(inner: Arc<dyn HolidayProvider>, ttl: Duration, max_entries: usize) -> Self {
        Self {
            inner,
            ttl,
            max_entries,
            next_sequence: AtomicU64::new(0),
            entries: RwLock::new(HashMap::new()),
        }
    }

    async fn store(&self, key: CacheKey, holidays: HolidaySet) {
        if self.max_entries == 0 || self.ttl.is_zero() {
            return;
        }

        let now = Instant::now();
        let expires_at = now.checked_add(self.ttl).unwrap_or(now);
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);

        let mut entries = self.entries.write().await;
        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            entries.retain(|_, entry| entry.expires_at > now);
        }
        while !entries.contains_key(&key) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.sequence)
                .map(|(oldest_key, _)| *oldest_key);
            match oldest {
                Some(oldest_key) => {
                    entries.remove(&oldest_key);
                }
                None => break,
            }
        }

        entries.insert(
            key,
            HolidayCacheEntry {
                holidays,
                expires_at,
                sequence,
            },
        );
    }
}

#[async_trait]
impl HolidayProvider for CachingHolidayProvider {
    async fn holidays_for_year(
        &self,
        year: i32,
        state: Option<StateCode>,
    ) -> AppResult<HolidaySet> {
        let key = (year, state);
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries
                .get(&key)
                .filter(|entry| entry.expires_at > Instant::now())
            {
                return Ok(entry.holidays.clone());
            }
        }

        let holidays = self.inner.holidays_for_year(year, state).await?;
        self.store(key, holidays.clone()).await;

        debug!(year, holiday_count = holidays.len(), "cached holiday calendar");

        Ok(holidays)
    }
}
