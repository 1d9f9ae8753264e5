use std::fmt;

/// A logging handle bound to one display surface.
///
/// `SurfaceLog` is obtained from [`LogSurface::log`](crate::LogSurface::log)
/// and borrows the surface, so it cannot outlive it. Every record carries
/// the surface id for correlation.
///
/// Never pass rendered rows or secret descriptions through this handle;
/// they are the sensitive data the surface is guarding.
#[derive(Debug)]
pub struct SurfaceLog<'a> {
    surface_id: &'a str,
}

impl<'a> SurfaceLog<'a> {
    /// Binds a handle to `surface_id`. Callers outside the crate go
    /// through the owning surface instead.
    pub(crate) fn new(surface_id: &'a str) -> Self {
        Self { surface_id }
    }

    /// Returns the surface id associated with this logger.
    pub fn surface_id(&self) -> &str {
        self.surface_id
    }

    /// Logs an info-level message with the surface id.
    ///
    /// ```no_run
    /// # use secret_access_log::SurfaceLog;
    /// # fn example(log: &SurfaceLog) {
    /// log.info(format_args!("rendered {} rows", 12));
    /// # }
    /// ```
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(surface_id = %self.surface_id, "{}", args);
    }

    /// Logs a warning-level message with the surface id.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(surface_id = %self.surface_id, "{}", args);
    }

    /// Logs a debug-level message with the surface id.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(surface_id = %self.surface_id, "{}", args);
    }
}
