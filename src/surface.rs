//! Display surface controller for one secret's access log.
//!
//! `LogSurface` ties the two leaf components together: rows are rendered by
//! [`LogEntryFormatter`] when the surface opens, and every foreground regain
//! goes through the surface's own [`ResumeGuard`]. The host UI runtime calls
//! the `on_*` hooks from its lifecycle callbacks.

use crate::{
    AccessLog, Clock, LogEntryFormatter, ResumeDecision, ResumeGuard, SurfaceLog, TemplateSource,
};

/// Result code the surface reports to its parent view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceResult {
    /// The surface was left by any path other than back navigation
    #[default]
    Cancelled,
    /// The user pressed back; the parent may keep its own display trusted
    NavigatedBack,
}

/// What the host must do after a foreground regain.
#[must_use = "a dismissed surface must be torn down"]
#[derive(Debug, PartialEq, Eq)]
pub enum SurfaceAction<'a> {
    /// Render the title and rows
    Show {
        /// Surface title
        title: &'a str,
        /// Rendered log rows, newest first
        rows: &'a [String],
    },
    /// Tear the surface down without rendering anything
    Dismiss,
}

/// Controller for a displayed access log.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use secret_access_log::{
///     AccessLog, Calendar, EventType, LogEntry, LogEntryFormatter, LogSurface, SurfaceAction,
///     SurfaceResult, Templates,
/// };
///
/// let now = 1_710_513_000_000;
/// let formatter = LogEntryFormatter::new(Templates::english(), Calendar::fixed(Utc, now));
/// let log: AccessLog = vec![LogEntry::new(EventType::Viewed, now - 30_000)]
///     .into_iter()
///     .collect();
///
/// let mut surface = LogSurface::open("log-1", "Email", &log, &formatter);
/// assert!(matches!(surface.on_foreground_regain(), SurfaceAction::Show { .. }));
///
/// // Task switch and back: no grant, so the surface is dismissed.
/// assert_eq!(surface.on_foreground_regain(), SurfaceAction::Dismiss);
/// assert_eq!(surface.result(), SurfaceResult::Cancelled);
/// ```
#[derive(Debug)]
pub struct LogSurface {
    surface_id: String,
    title: String,
    rows: Vec<String>,
    guard: ResumeGuard,
    result: SurfaceResult,
    dismissed: bool,
}

impl LogSurface {
    /// Opens a surface for a secret's log, rendering rows against the
    /// formatter clock's current time.
    pub fn open<T, C>(
        surface_id: impl Into<String>,
        description: &str,
        log: &AccessLog,
        formatter: &LogEntryFormatter<T, C>,
    ) -> Self
    where
        T: TemplateSource,
        C: Clock,
    {
        let surface = Self {
            surface_id: surface_id.into(),
            title: formatter.format_title(description),
            rows: formatter.format_log(log, 0),
            guard: ResumeGuard::new(),
            result: SurfaceResult::default(),
            dismissed: false,
        };

        surface
            .log()
            .info(format_args!("opened with {} entries", surface.rows.len()));
        surface
    }

    /// Returns the surface id.
    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    /// Returns a logging handle tagged with this surface's id.
    pub fn log(&self) -> SurfaceLog<'_> {
        SurfaceLog::new(&self.surface_id)
    }

    /// Handles the surface regaining the foreground.
    ///
    /// A denied regain drops the rendered rows and title; a dismissed
    /// surface never shows again.
    pub fn on_foreground_regain(&mut self) -> SurfaceAction<'_> {
        if self.dismissed {
            return SurfaceAction::Dismiss;
        }

        match self.guard.on_foreground_regain() {
            ResumeDecision::Allow => SurfaceAction::Show {
                title: &self.title,
                rows: &self.rows,
            },
            ResumeDecision::Deny => {
                self.dismiss();
                SurfaceAction::Dismiss
            }
        }
    }

    /// Handles the sanctioned back navigation.
    ///
    /// Reports [`SurfaceResult::NavigatedBack`] to the parent and permits
    /// the next foreground regain. Ignored once the surface is dismissed.
    pub fn on_back(&mut self) {
        if self.dismissed {
            return;
        }

        self.result = SurfaceResult::NavigatedBack;
        self.guard.grant_next_resume();
        self.log().debug(format_args!("back navigation, next resume granted"));
    }

    /// Returns the result code for the parent view.
    pub fn result(&self) -> SurfaceResult {
        self.result
    }

    /// Returns true once the surface has been dismissed.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    fn dismiss(&mut self) {
        // An earlier back navigation does not vouch for this exit.
        self.result = SurfaceResult::Cancelled;
        self.dismissed = true;
        self.rows = Vec::new();
        self.title = String::new();
        self.log()
            .warn(format_args!("resume not allowed, dismissing surface"));
    }
}
