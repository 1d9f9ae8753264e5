//! Access-log rendering and re-lock guard for a secrets manager.
//!
//! This crate provides the core behind a secret's "access log" view:
//! - **Relative-time formatting**: each recorded lifecycle event renders as a
//!   localized "how long ago" string, bucketed by calendar-day boundaries
//! - **Resume guarding**: a surface showing audit data comes back to the
//!   foreground only after the user left it through back navigation
//!
//! # Core Types
//!
//! - [`LogEntry`] / [`AccessLog`]: recorded events for one secret
//! - [`LogEntryFormatter`]: pure entry + reference time -> display string
//! - [`Templates`] / [`TemplateSource`]: injected, per-locale wording
//! - [`Calendar`] / [`Clock`]: current time and zone-aware day boundaries
//! - [`ResumeGuard`]: one-shot permission to regain the foreground
//! - [`LogSurface`]: controller driving both for one displayed log
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use secret_access_log::{
//!     AccessLog, Calendar, EventType, LogEntry, LogEntryFormatter, ResumeDecision, ResumeGuard,
//!     Templates,
//! };
//!
//! // 2024-03-15 14:30:00 UTC
//! let now = 1_710_513_000_000;
//! let formatter = LogEntryFormatter::new(Templates::english(), Calendar::fixed(Utc, now));
//!
//! let mut log = AccessLog::new();
//! log.record(LogEntry::new(EventType::Created, now - 3 * 86_400_000));
//! log.record(LogEntry::new(EventType::Viewed, now - 125_000));
//!
//! let rows = formatter.format_log(&log, now);
//! assert_eq!(rows[0], "Viewed 2 min ago");
//! assert_eq!(rows[1], "Created on 2024-03-12 at 14:30");
//!
//! // The guard allows one foreground regain per grant.
//! let mut guard = ResumeGuard::new();
//! assert_eq!(guard.on_foreground_regain(), ResumeDecision::Allow);
//! assert_eq!(guard.on_foreground_regain(), ResumeDecision::Deny);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod access_log;
mod clock;
mod entry;
mod error;
mod formatter;
mod guard;
mod logging;
mod surface;
mod templates;

pub use access_log::AccessLog;
pub use clock::{Calendar, Clock, MILLIS_PER_DAY};
pub use entry::{EventType, LogEntry};
pub use error::{ConfigError, ConfigErrorKind, Error};
pub use formatter::{Bucket, LogEntryFormatter, UNKNOWN_VERB};
pub use guard::{GuardState, ResumeDecision, ResumeGuard};
pub use logging::SurfaceLog;
pub use surface::{LogSurface, SurfaceAction, SurfaceResult};
pub use templates::{TemplateKey, TemplateSource, Templates, TemplatesBuilder};
