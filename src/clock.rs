//! Time and Identifiers

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Timestamp-like ids that never repeat within a collection.
///
/// Each id is the current time in milliseconds, bumped past the last id
/// handed out when two creations land in the same millisecond.
#[derive(Debug, Clone, Copy)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Seed with the largest id already in the collection
    pub fn new(seed: i64) -> Self {
        Self { last: seed }
    }

    pub fn seeded_from(ids: impl IntoIterator<Item = i64>) -> Self {
        Self::new(ids.into_iter().max().unwrap_or(0))
    }

    pub fn next(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{Duration, TimeZone};

    use super::*;

    /// Clock frozen at a given instant, advanced by hand
    #[derive(Clone)]
    pub struct FixedClock {
        now: Rc<Cell<DateTime<Utc>>>,
    }

    impl FixedClock {
        pub fn at(year: i32, month: u32, day: u32) -> Self {
            let now = Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
            Self { now: Rc::new(Cell::new(now)) }
        }

        pub fn advance_ms(&self, ms: i64) {
            self.now.set(self.now.get() + Duration::milliseconds(ms));
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = IdGenerator::new(0);
        let a = ids.next(1_700_000_000_000);
        let b = ids.next(1_700_000_000_000);
        assert_eq!(a, 1_700_000_000_000);
        assert_eq!(b, 1_700_000_000_001);
    }

    #[test]
    fn test_follows_clock_when_ahead() {
        let mut ids = IdGenerator::new(10);
        assert_eq!(ids.next(500), 500);
        assert_eq!(ids.next(900), 900);
    }

    #[test]
    fn test_seed_above_clock_stays_monotonic() {
        // Stored ids from a machine whose clock ran ahead
        let mut ids = IdGenerator::seeded_from([5, 2_000, 7]);
        assert_eq!(ids.next(1_000), 2_001);
    }

    #[test]
    fn test_max_seed_does_not_overflow() {
        let mut ids = IdGenerator::new(i64::MAX);
        assert_eq!(ids.next(0), i64::MAX);
    }
}
