//! Access log entry types.
//!
//! A log entry records one lifecycle action performed on a secret. Entries
//! are produced by the storage engine and never mutated afterwards.

use std::fmt;

/// Kind of lifecycle action recorded against a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// The secret was created
    Created,
    /// The secret was modified
    Changed,
    /// The secret was revealed to the user
    Viewed,
    /// The secret was exported out of the vault
    Exported,
    /// The secret was synchronized with another device
    Synced,
}

impl EventType {
    /// All event types, in stored-code order.
    pub const ALL: [EventType; 5] = [
        EventType::Created,
        EventType::Changed,
        EventType::Viewed,
        EventType::Exported,
        EventType::Synced,
    ];

    /// Decodes the integer code the storage engine persists.
    ///
    /// Returns `None` for codes this version does not know.
    ///
    /// # Example
    ///
    /// ```
    /// use secret_access_log::EventType;
    ///
    /// assert_eq!(EventType::from_code(3), Some(EventType::Viewed));
    /// assert_eq!(EventType::from_code(42), None);
    /// ```
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(EventType::Created),
            2 => Some(EventType::Changed),
            3 => Some(EventType::Viewed),
            4 => Some(EventType::Exported),
            5 => Some(EventType::Synced),
            _ => None,
        }
    }

    /// Returns the integer code used for storage.
    pub fn code(self) -> i32 {
        match self {
            EventType::Created => 1,
            EventType::Changed => 2,
            EventType::Viewed => 3,
            EventType::Exported => 4,
            EventType::Synced => 5,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Created => write!(f, "created"),
            EventType::Changed => write!(f, "changed"),
            EventType::Viewed => write!(f, "viewed"),
            EventType::Exported => write!(f, "exported"),
            EventType::Synced => write!(f, "synced"),
        }
    }
}

/// One recorded lifecycle event on a secret.
///
/// The timestamp is in epoch milliseconds. It is not guaranteed to be
/// earlier than "now": device clocks move, so consumers must tolerate
/// entries from the future.
///
/// # Example
///
/// ```
/// use secret_access_log::{EventType, LogEntry};
///
/// let entry = LogEntry::new(EventType::Viewed, 1_700_000_000_000);
/// assert_eq!(entry.event_type(), Some(EventType::Viewed));
/// assert_eq!(entry.timestamp(), 1_700_000_000_000);
///
/// let legacy = LogEntry::from_code(99, 1_700_000_000_000);
/// assert_eq!(legacy.event_type(), None);
/// assert_eq!(legacy.code(), 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    code: i32,
    timestamp: i64,
}

impl LogEntry {
    /// Creates an entry for a known event type.
    pub fn new(event_type: EventType, timestamp: i64) -> Self {
        Self {
            code: event_type.code(),
            timestamp,
        }
    }

    /// Creates an entry from a stored event code, known or not.
    pub fn from_code(code: i32, timestamp: i64) -> Self {
        Self { code, timestamp }
    }

    /// Returns the event type, or `None` if the stored code is unrecognized.
    pub fn event_type(&self) -> Option<EventType> {
        EventType::from_code(self.code)
    }

    /// Returns the raw stored event code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the event time in epoch milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_codes_round_trip() {
        for event_type in EventType::ALL {
            assert_eq!(EventType::from_code(event_type.code()), Some(event_type));
        }
    }

    #[test]
    fn unknown_codes_are_not_recognized() {
        assert_eq!(EventType::from_code(0), None);
        assert_eq!(EventType::from_code(6), None);
        assert_eq!(EventType::from_code(-1), None);
    }

    #[test]
    fn event_type_display() {
        assert_eq!(EventType::Created.to_string(), "created");
        assert_eq!(EventType::Synced.to_string(), "synced");
    }

    #[test]
    fn entry_keeps_unknown_code() {
        let entry = LogEntry::from_code(77, 12);
        assert_eq!(entry.event_type(), None);
        assert_eq!(entry.code(), 77);
        assert_eq!(entry.timestamp(), 12);
    }

    #[test]
    fn entry_from_known_type() {
        let entry = LogEntry::new(EventType::Exported, 5_000);
        assert_eq!(entry.event_type(), Some(EventType::Exported));
        assert_eq!(entry.code(), 4);
    }
}
