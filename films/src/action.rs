//! Actions
//!
//! Naming follows `<Category><Verb>`; a `Did` in the middle marks the result
//! of async work (`FilmsDidLoad`, `FilmsDidError`).

use films_core::ActionSummary;

use crate::state::AllFilms;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // ===== Films category =====
    /// Start the state machine; the initial `loading` state invokes the fetch
    FilmsStart,

    /// Intent: user pressed the refetch control
    FilmsRefetch,

    /// Result: the fetch resolved
    FilmsDidLoad(AllFilms),

    /// Result: the fetch failed
    FilmsDidError(String),

    // ===== UI category =====
    /// Scroll the film list so this row is the first one shown
    UiListScroll(usize),

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}

impl films_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::FilmsStart => "FilmsStart",
            Action::FilmsRefetch => "FilmsRefetch",
            Action::FilmsDidLoad(_) => "FilmsDidLoad",
            Action::FilmsDidError(_) => "FilmsDidError",
            Action::UiListScroll(_) => "UiListScroll",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}

impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::FilmsDidLoad(films) => format!("FilmsDidLoad {{ films: {} }}", films.len()),
            Action::FilmsDidError(e) => {
                let msg = if e.chars().count() > 40 {
                    format!("{}...", e.chars().take(37).collect::<String>())
                } else {
                    e.clone()
                };
                format!("FilmsDidError({:?})", msg)
            }
            _ => format!("{:?}", self),
        }
    }
}
