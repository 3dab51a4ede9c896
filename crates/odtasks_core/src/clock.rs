//! Time source used by reducers and draft constructors.
//!
//! # Responsibility
//! - Give the reducer a deterministic notion of "now" and "today".
//!
//! # Invariants
//! - `now()` is always UTC.
//! - `today()` is the calendar date of `now()` in the clock's own zone:
//!   the host's local zone for `SystemClock`, a fixed offset for
//!   `FixedClock`. Streak days follow `today()`, not the UTC date.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, Offset, Utc};

/// Abstract wall clock.
pub trait Clock {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
    /// Current calendar date in the clock's zone; used for streak accounting.
    fn today(&self) -> NaiveDate;
}

/// Host wall clock. Streak days follow the local calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one instant and one UTC offset; tests and replays use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Pins the clock to `now`, with the calendar in UTC.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }

    /// Pins the clock to midday UTC of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self::new((date.and_time(NaiveTime::default()) + Duration::hours(12)).and_utc())
    }

    /// Same instant, calendar read in `offset` the way `SystemClock` reads
    /// it in the local zone.
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self { offset, ..self }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.offset).date_naive()
    }
}
