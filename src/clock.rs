//! Wall-clock and calendar-day arithmetic.
//!
//! The formatter never reads the system clock or time zone directly; it asks
//! a [`Clock`]. [`Calendar`] is the `chrono`-backed implementation, either
//! live (`Calendar::system`) or frozen at a fixed instant for deterministic
//! rendering and tests (`Calendar::fixed`).

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, TimeZone, Utc};

/// Milliseconds in a 24-hour UTC day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Source of "now" and of zone-aware day boundaries.
///
/// All instants are epoch milliseconds. Implementations must be total:
/// instants outside the calendar's representable range still produce a
/// value rather than panicking.
pub trait Clock {
    /// Returns the current time.
    fn now_millis(&self) -> i64;

    /// Returns the start of the calendar day containing `millis`.
    fn start_of_day(&self, millis: i64) -> i64;

    /// Returns the instant one calendar day before `midnight`.
    ///
    /// This is a calendar step, not a fixed 24 hours: across a daylight
    /// saving change the result lands on the previous day's midnight.
    fn day_before(&self, midnight: i64) -> i64;

    /// Returns the wall-clock date and time of `millis` in the active zone,
    /// or `None` if it cannot be represented.
    fn local_datetime(&self, millis: i64) -> Option<NaiveDateTime>;
}

/// `chrono`-backed clock for a single time zone.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use secret_access_log::{Calendar, Clock};
///
/// // 2023-11-14 22:13:20 UTC
/// let calendar = Calendar::fixed(Utc, 1_700_000_000_000);
///
/// assert_eq!(calendar.now_millis(), 1_700_000_000_000);
/// assert_eq!(calendar.start_of_day(1_700_000_000_000), 1_699_920_000_000);
/// assert_eq!(calendar.day_before(1_699_920_000_000), 1_699_833_600_000);
/// ```
#[derive(Debug, Clone)]
pub struct Calendar<Tz: TimeZone> {
    zone: Tz,
    frozen_now: Option<i64>,
}

impl Calendar<Local> {
    /// Creates a live clock in the host's local time zone.
    pub fn system() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    /// Creates a live clock in `zone`.
    pub fn new(zone: Tz) -> Self {
        Self {
            zone,
            frozen_now: None,
        }
    }

    /// Creates a clock in `zone` whose "now" is always `now_millis`.
    pub fn fixed(zone: Tz, now_millis: i64) -> Self {
        Self {
            zone,
            frozen_now: Some(now_millis),
        }
    }

    /// Returns the time zone day boundaries are computed in.
    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    fn zoned(&self, millis: i64) -> Option<DateTime<Tz>> {
        self.zone.timestamp_millis_opt(millis).single()
    }

    /// Maps a wall-clock time back to an instant. Ambiguous times (clocks
    /// turned back) resolve to the earlier instant; skipped times (clocks
    /// turned forward) move to the first wall time an hour later.
    fn resolve(&self, naive: NaiveDateTime) -> Option<i64> {
        match self.zone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Some(dt.timestamp_millis()),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp_millis()),
            LocalResult::None => {
                let shifted = naive.checked_add_signed(Duration::hours(1))?;
                self.zone
                    .from_local_datetime(&shifted)
                    .earliest()
                    .map(|dt| dt.timestamp_millis())
            }
        }
    }
}

impl<Tz: TimeZone> Clock for Calendar<Tz> {
    fn now_millis(&self) -> i64 {
        self.frozen_now
            .unwrap_or_else(|| Utc::now().timestamp_millis())
    }

    fn start_of_day(&self, millis: i64) -> i64 {
        self.zoned(millis)
            .and_then(|dt| dt.date_naive().and_hms_opt(0, 0, 0))
            .and_then(|naive| self.resolve(naive))
            .unwrap_or_else(|| utc_start_of_day(millis))
    }

    fn day_before(&self, midnight: i64) -> i64 {
        self.zoned(midnight)
            .and_then(|dt| {
                let previous = dt.date_naive().pred_opt()?;
                Some(previous.and_time(dt.time()))
            })
            .and_then(|naive| self.resolve(naive))
            .unwrap_or_else(|| midnight.saturating_sub(MILLIS_PER_DAY))
    }

    fn local_datetime(&self, millis: i64) -> Option<NaiveDateTime> {
        self.zoned(millis).map(|dt| dt.naive_local())
    }
}

/// Day truncation for instants `chrono` cannot represent.
fn utc_start_of_day(millis: i64) -> i64 {
    millis.saturating_sub(millis.rem_euclid(MILLIS_PER_DAY))
}
