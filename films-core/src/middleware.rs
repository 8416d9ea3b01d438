//! Middleware hooks around reducer dispatch

use crate::{Action, ActionSummary};

/// Middleware trait for intercepting actions
///
/// Implement this trait to add logging or other cross-cutting concerns to
/// an [`EffectStoreWithMiddleware`](crate::EffectStoreWithMiddleware).
pub trait Middleware<A: Action> {
    /// Called before the action reaches the reducer
    fn before(&mut self, action: &A);

    /// Called after the reducer ran
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that logs actions through `tracing`
///
/// The before-dispatch line uses [`ActionSummary::summary`], the after line
/// only the action name. Actions named in `excluded` are counted but never
/// logged; by default that is the high-frequency `Tick`.
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
    /// Action names that are never logged
    pub excluded: Vec<&'static str>,
    dispatched: u64,
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingMiddleware {
    /// Log after dispatch only
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
            excluded: vec!["Tick"],
            dispatched: 0,
        }
    }

    /// Log both before and after dispatch
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            ..Self::new()
        }
    }

    /// Replace the list of action names that are never logged.
    pub fn with_excluded(mut self, excluded: Vec<&'static str>) -> Self {
        self.excluded = excluded;
        self
    }

    pub fn should_log(&self, name: &str) -> bool {
        !self.excluded.iter().any(|excluded| *excluded == name)
    }

    /// Number of actions seen so far
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}

impl<A: ActionSummary> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before && self.should_log(action.name()) {
            tracing::debug!(action = %action.summary(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        self.dispatched += 1;
        if self.log_after && self.should_log(action.name()) {
            tracing::debug!(
                action = %action.name(),
                state_changed = state_changed,
                seq = self.dispatched,
                "Action processed"
            );
        }
    }
}
