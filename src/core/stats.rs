use crate::db::pool::DbPool;
use crate::db::stats as db_stats;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::interaction_type::InteractionType;
use crate::models::stats::StatsSnapshot;
use crate::utils::date::{month_windows, today};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How long a computed snapshot stays valid.
pub const STATS_TTL: Duration = Duration::from_secs(5 * 60);

/// Number of trailing calendar months covered by `by_month`.
pub const MONTHS_BACK: u32 = 12;

pub struct StatsLogic;

impl StatsLogic {
    /// Recompute the full snapshot. Worst case this issues one count per
    /// interaction type plus one per month window; the cache in front of
    /// it is the only mitigation.
    pub fn compute(pool: &mut DbPool) -> AppResult<StatsSnapshot> {
        let conn = &pool.conn;

        let mut by_type = BTreeMap::new();
        for ty in InteractionType::ALL {
            by_type.insert(
                ty.to_db_str().to_string(),
                db_stats::count_by_type(conn, ty.to_db_str())?,
            );
        }

        let mut by_status = BTreeMap::new();
        for status in queries::load_statuses(conn)? {
            by_status.insert(status.name, status.count);
        }

        let mut by_month = BTreeMap::new();
        for (label, first, last) in month_windows(today(), MONTHS_BACK) {
            by_month.insert(label, db_stats::count_between(conn, first, last)?);
        }

        Ok(StatsSnapshot {
            by_type,
            by_status,
            by_month,
        })
    }
}

/// Process-wide snapshot cache with a fixed TTL.
///
/// Concurrent callers may race to recompute after expiry; the
/// computation is idempotent so the race is benign.
pub struct StatsCache {
    ttl: Duration,
    slot: Mutex<Option<(Instant, StatsSnapshot)>>,
}

impl StatsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached snapshot if still fresh at `now`, otherwise run
    /// `compute`, store its result and return it.
    pub fn fetch<F>(&self, now: Instant, compute: F) -> AppResult<StatsSnapshot>
    where
        F: FnOnce() -> AppResult<StatsSnapshot>,
    {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AppError::Other("stats cache lock poisoned".to_string()))?;

        if let Some((stored_at, snapshot)) = slot.as_ref()
            && now.duration_since(*stored_at) < self.ttl
        {
            return Ok(snapshot.clone());
        }

        let snapshot = compute()?;
        *slot = Some((now, snapshot.clone()));
        Ok(snapshot)
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new(STATS_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn snapshot(marker: i64) -> StatsSnapshot {
        let mut by_type = BTreeMap::new();
        by_type.insert("email".to_string(), marker);
        StatsSnapshot {
            by_type,
            by_status: BTreeMap::new(),
            by_month: BTreeMap::new(),
        }
    }

    #[test]
    fn second_fetch_within_ttl_reuses_snapshot() {
        let cache = StatsCache::new(Duration::from_secs(300));
        let calls = Cell::new(0);
        let t0 = Instant::now();

        let first = cache
            .fetch(t0, || {
                calls.set(calls.get() + 1);
                Ok(snapshot(1))
            })
            .unwrap();

        let second = cache
            .fetch(t0 + Duration::from_secs(299), || {
                calls.set(calls.get() + 1);
                Ok(snapshot(2))
            })
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn fetch_after_ttl_recomputes() {
        let cache = StatsCache::new(Duration::from_secs(300));
        let t0 = Instant::now();

        cache.fetch(t0, || Ok(snapshot(1))).unwrap();
        let refreshed = cache
            .fetch(t0 + Duration::from_secs(301), || Ok(snapshot(2)))
            .unwrap();

        assert_eq!(refreshed.by_type["email"], 2);
    }

    #[test]
    fn failed_compute_leaves_cache_empty() {
        let cache = StatsCache::new(Duration::from_secs(300));
        let t0 = Instant::now();

        let err = cache.fetch(t0, || Err(AppError::Other("boom".to_string())));
        assert!(err.is_err());

        // Next fetch must recompute rather than serve a stale error.
        let ok = cache.fetch(t0, || Ok(snapshot(7))).unwrap();
        assert_eq!(ok.by_type["email"], 7);
    }
}
