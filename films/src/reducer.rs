//! Reducer - (state, action) -> DispatchResult<Effect>
//!
//! The films machine owns the loading / success / error logic. The reducer
//! translates actions into machine events and declares a fetch every time the
//! machine enters `loading`.

use films_core::DispatchResult;
use tracing::debug;

use crate::action::Action;
use crate::effect::Effect;
use crate::machine::{MachineEvent, StateValue};
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Films actions =====
        Action::FilmsStart => {
            if state.machine.start() {
                DispatchResult::changed_with(Effect::FetchFilms)
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::FilmsRefetch => send(state, MachineEvent::Refetch),

        Action::FilmsDidLoad(films) => send(state, MachineEvent::FetchDone(films)),

        Action::FilmsDidError(message) => send(state, MachineEvent::FetchFailed(message)),

        // ===== UI actions =====
        Action::UiListScroll(offset) => {
            let len = state.machine.films().map_or(0, |films| films.len());
            if offset < len && offset != state.list_offset {
                state.list_offset = offset;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.machine.matches(StateValue::Loading) {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // Quit is handled in main loop, not here
            DispatchResult::unchanged()
        }
    }
}

fn send(state: &mut AppState, event: MachineEvent) -> DispatchResult<Effect> {
    let event_name = event.name();
    let current = state.machine.value();

    match state.machine.send(event) {
        Some(transition) => {
            debug!(
                event = event_name,
                from = transition.from.name(),
                to = transition.to.name(),
                "Machine transition"
            );
            if transition.to == StateValue::Success {
                state.list_offset = 0;
            }
            if transition.entered_loading() {
                DispatchResult::changed_with(Effect::FetchFilms)
            } else {
                DispatchResult::changed()
            }
        }
        None => {
            debug!(event = event_name, state = current.name(), "Event ignored");
            DispatchResult::unchanged()
        }
    }
}
