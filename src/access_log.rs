//! Ordered access log for a single secret.

use crate::LogEntry;

/// Ordered sequence of log entries for one secret.
///
/// Entries are kept in the order they were recorded. Display surfaces show
/// them newest first via [`newest_first`](Self::newest_first). Nothing in
/// this crate removes an entry once recorded.
///
/// # Example
///
/// ```
/// use secret_access_log::{AccessLog, EventType, LogEntry};
///
/// let mut log = AccessLog::new();
/// log.record(LogEntry::new(EventType::Created, 1_000));
/// log.record(LogEntry::new(EventType::Viewed, 2_000));
///
/// let newest: Vec<_> = log.newest_first().map(|e| e.timestamp()).collect();
/// assert_eq!(newest, vec![2_000, 1_000]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessLog {
    entries: Vec<LogEntry>,
}

impl AccessLog {
    /// Creates an empty access log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn record(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in recording order.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Iterates the entries from most recently recorded to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev()
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<LogEntry>> for AccessLog {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<LogEntry> for AccessLog {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventType;

    #[test]
    fn access_log_starts_empty() {
        let log = AccessLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.newest_first().count(), 0);
    }

    #[test]
    fn access_log_keeps_recording_order() {
        let mut log = AccessLog::new();
        log.record(LogEntry::new(EventType::Created, 10));
        log.record(LogEntry::new(EventType::Changed, 20));

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].event_type(), Some(EventType::Created));
        assert_eq!(log.entries()[1].event_type(), Some(EventType::Changed));
    }

    #[test]
    fn newest_first_follows_insertion_not_timestamps() {
        // Clock changes can make a later entry carry an earlier timestamp.
        let log: AccessLog = vec![
            LogEntry::new(EventType::Created, 500),
            LogEntry::new(EventType::Viewed, 100),
        ]
        .into_iter()
        .collect();

        let order: Vec<_> = log.newest_first().map(|e| e.timestamp()).collect();
        assert_eq!(order, vec![100, 500]);
    }

    #[test]
    fn access_log_from_vec() {
        let log = AccessLog::from(vec![LogEntry::new(EventType::Synced, 1)]);
        assert!(!log.is_empty());
    }
}
