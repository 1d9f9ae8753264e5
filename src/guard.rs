//! One-shot re-lock guard for sensitive display surfaces.
//!
//! A surface showing audit data may only come back to the foreground when
//! the user left it through the sanctioned back navigation. Every other way
//! out (task switch, screen lock, process restart) must force the surface
//! closed so that returning requires the master password again.

/// Whether the next foreground regain may show the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// The next foreground regain is denied
    Locked,
    /// Exactly one foreground regain is permitted
    Unlocked,
}

/// Outcome of a foreground regain.
///
/// On [`Deny`](Self::Deny) the owner must dismiss the surface rather than
/// render it.
#[must_use = "a denied resume must dismiss the surface"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeDecision {
    /// The surface may render
    Allow,
    /// The surface must be torn down
    Deny,
}

impl ResumeDecision {
    /// Returns true for [`Allow`](Self::Allow).
    pub fn is_allowed(self) -> bool {
        matches!(self, ResumeDecision::Allow)
    }
}

/// Two-state machine that permits at most one resume per grant.
///
/// A new guard starts [`Unlocked`](GuardState::Unlocked): the surface has
/// just been opened by the user, so its first foreground event is allowed.
/// Each call to [`on_foreground_regain`](Self::on_foreground_regain)
/// consumes the grant; only [`grant_next_resume`](Self::grant_next_resume)
/// restores it.
///
/// # Example
///
/// ```
/// use secret_access_log::{ResumeDecision, ResumeGuard};
///
/// let mut guard = ResumeGuard::new();
/// assert_eq!(guard.on_foreground_regain(), ResumeDecision::Allow);
/// assert_eq!(guard.on_foreground_regain(), ResumeDecision::Deny);
///
/// guard.grant_next_resume();
/// assert_eq!(guard.on_foreground_regain(), ResumeDecision::Allow);
/// assert_eq!(guard.on_foreground_regain(), ResumeDecision::Deny);
/// ```
// Not Clone or Copy: a copied guard would carry a second, unconsumed grant.
#[derive(Debug)]
pub struct ResumeGuard {
    state: GuardState,
}

impl ResumeGuard {
    /// Creates a guard that allows the first foreground regain.
    pub fn new() -> Self {
        Self {
            state: GuardState::Unlocked,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Permits the next foreground regain.
    ///
    /// Call this only for the sanctioned exit gesture. Repeated grants do
    /// not accumulate.
    pub fn grant_next_resume(&mut self) {
        self.state = GuardState::Unlocked;
    }

    /// Checks and consumes the grant in a single step.
    pub fn on_foreground_regain(&mut self) -> ResumeDecision {
        match std::mem::replace(&mut self.state, GuardState::Locked) {
            GuardState::Unlocked => ResumeDecision::Allow,
            GuardState::Locked => {
                tracing::debug!(target: "access_log::resume_guard", "foreground regain not allowed");
                ResumeDecision::Deny
            }
        }
    }
}

impl Default for ResumeGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_guard_is_unlocked() {
        assert_eq!(ResumeGuard::new().state(), GuardState::Unlocked);
        assert_eq!(ResumeGuard::default().state(), GuardState::Unlocked);
    }

    #[test]
    fn first_regain_allowed_second_denied() {
        let mut guard = ResumeGuard::new();
        assert_eq!(guard.on_foreground_regain(), ResumeDecision::Allow);
        assert_eq!(guard.state(), GuardState::Locked);
        assert_eq!(guard.on_foreground_regain(), ResumeDecision::Deny);
    }

    #[test]
    fn grant_allows_exactly_one_regain() {
        let mut guard = ResumeGuard::new();
        let _ = guard.on_foreground_regain();

        guard.grant_next_resume();
        assert_eq!(guard.on_foreground_regain(), ResumeDecision::Allow);
        assert_eq!(guard.on_foreground_regain(), ResumeDecision::Deny);
    }

    #[test]
    fn repeated_grants_do_not_accumulate() {
        let mut guard = ResumeGuard::new();
        guard.grant_next_resume();
        guard.grant_next_resume();

        assert!(guard.on_foreground_regain().is_allowed());
        assert!(!guard.on_foreground_regain().is_allowed());
    }

    #[test]
    fn deny_stays_locked() {
        let mut guard = ResumeGuard::new();
        let _ = guard.on_foreground_regain();

        for _ in 0..3 {
            assert_eq!(guard.on_foreground_regain(), ResumeDecision::Deny);
            assert_eq!(guard.state(), GuardState::Locked);
        }
    }
}
