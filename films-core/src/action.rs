//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store
///
/// Actions describe something that happened: a key press turned into an
/// intent (`FilmsRefetch`) or an async result coming back (`FilmsDidLoad`).
/// They must be cheap to clone so middleware can log them, and `Send` so
/// spawned tasks can send them back to the main loop.
pub trait Action: Clone + Debug + Send + 'static {
    /// Stable name used for logging
    fn name(&self) -> &'static str;
}

/// Short one-line description of an action for logs
///
/// Data-heavy actions should override this so a log line does not carry a
/// whole response payload.
pub trait ActionSummary: Action {
    fn summary(&self) -> String {
        format!("{:?}", self)
    }
}
