//! Relative-time rendering of access log entries.

use crate::templates::{render, Arg};
use crate::{AccessLog, Clock, LogEntry, TemplateKey, TemplateSource};

/// Verb used for entries whose stored event code is not recognized.
pub const UNKNOWN_VERB: &str = "?";

const ONE_MINUTE_IN_SECS: i128 = 60;
const ONE_HOUR_IN_SECS: i128 = 3600;

/// Relative-time category selected for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Under a minute ago, or stamped in the future
    Seconds,
    /// Under an hour ago, with the whole minutes elapsed
    Minutes(i64),
    /// After the start of the reference day
    Today,
    /// After the start of the previous day
    Yesterday,
    /// Anything older
    Dated,
}

impl Bucket {
    /// Returns the template used to render this bucket.
    pub fn key(self) -> TemplateKey {
        match self {
            Bucket::Seconds => TemplateKey::Seconds,
            Bucket::Minutes(_) => TemplateKey::Minutes,
            Bucket::Today => TemplateKey::Today,
            Bucket::Yesterday => TemplateKey::Yesterday,
            Bucket::Dated => TemplateKey::Dated,
        }
    }
}

/// Renders log entries as "how long ago" strings.
///
/// The formatter holds no mutable state: the same entry and reference time
/// always produce the same string, and it is safe to share across threads
/// whenever its template source and clock are.
///
/// A reference time of `0` means "unspecified" and is replaced by the
/// clock's current time.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use secret_access_log::{Calendar, EventType, LogEntry, LogEntryFormatter, Templates};
///
/// // 2024-03-15 14:30:00 UTC
/// let now = 1_710_513_000_000;
/// let formatter = LogEntryFormatter::new(Templates::english(), Calendar::fixed(Utc, now));
///
/// let viewed = LogEntry::new(EventType::Viewed, now - 30_000);
/// assert_eq!(formatter.format(&viewed, 0), "Viewed under a minute ago");
///
/// let changed = LogEntry::new(EventType::Changed, now - 7_200_000);
/// assert_eq!(formatter.format(&changed, now), "Changed today at 12:30");
/// ```
#[derive(Debug, Clone)]
pub struct LogEntryFormatter<T, C> {
    templates: T,
    clock: C,
}

impl<T: TemplateSource, C: Clock> LogEntryFormatter<T, C> {
    /// Creates a formatter from a template table and a clock.
    pub fn new(templates: T, clock: C) -> Self {
        Self { templates, clock }
    }

    /// Returns the template table.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Returns the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Replaces the "unspecified" reference time `0` with the current time.
    pub fn resolve_reference(&self, reference_time: i64) -> i64 {
        if reference_time == 0 {
            self.clock.now_millis()
        } else {
            reference_time
        }
    }

    /// Selects the bucket for `entry` relative to `reference_time`.
    ///
    /// Day anchors use a strict comparison: an entry stamped exactly at
    /// midnight belongs to the previous day.
    pub fn classify(&self, entry: &LogEntry, reference_time: i64) -> Bucket {
        let now = self.resolve_reference(reference_time);
        let time = entry.timestamp();
        let diff = (i128::from(now) - i128::from(time)) / 1000;

        if diff < ONE_MINUTE_IN_SECS {
            return Bucket::Seconds;
        }
        if diff < ONE_HOUR_IN_SECS {
            // diff is in [60, 3600), so the minute count always fits.
            return Bucket::Minutes((diff / ONE_MINUTE_IN_SECS) as i64);
        }

        let midnight = self.clock.start_of_day(now);
        let yesterday_midnight = self.clock.day_before(midnight);

        if time > midnight {
            Bucket::Today
        } else if time > yesterday_midnight {
            Bucket::Yesterday
        } else {
            Bucket::Dated
        }
    }

    /// Returns the localized verb for `entry`, or [`UNKNOWN_VERB`].
    pub fn verb(&self, entry: &LogEntry) -> &str {
        match entry.event_type() {
            Some(event_type) => self.templates.verb(event_type),
            None => {
                tracing::debug!(code = entry.code(), "unrecognized event type code");
                UNKNOWN_VERB
            }
        }
    }

    /// Formats the time elapsed between `entry` and `reference_time`.
    pub fn format(&self, entry: &LogEntry, reference_time: i64) -> String {
        let bucket = self.classify(entry, reference_time);
        let verb = Arg::Text(self.verb(entry));
        let template = self.templates.template(bucket.key());

        match bucket {
            Bucket::Seconds => render(template, &[verb]),
            Bucket::Minutes(minutes) => render(template, &[verb, Arg::Count(minutes)]),
            Bucket::Today | Bucket::Yesterday | Bucket::Dated => {
                let time = entry.timestamp();
                let instant = Arg::Instant {
                    millis: time,
                    local: self.clock.local_datetime(time),
                };
                render(template, &[verb, instant])
            }
        }
    }

    /// Formats every entry of `log`, newest first.
    ///
    /// The reference time is resolved once, so all rows share the same "now".
    pub fn format_log(&self, log: &AccessLog, reference_time: i64) -> Vec<String> {
        let now = self.resolve_reference(reference_time);
        log.newest_first()
            .map(|entry| self.format(entry, now))
            .collect()
    }

    /// Renders the surface title for a secret.
    pub fn format_title(&self, description: &str) -> String {
        render(
            self.templates.template(TemplateKey::Title),
            &[Arg::Text(description)],
        )
    }
}
