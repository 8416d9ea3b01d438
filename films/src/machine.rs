//! The loading / success / error state machine
//!
//! ```text
//!            FetchDone              Refetch
//!   loading ───────────▶ success ───────────▶ loading
//!      │
//!      │ FetchFailed              Refetch
//!      └──────────────▶ error ──────────────▶ loading
//! ```
//!
//! `loading` is initial. Entering it means "invoke the fetch"; the machine
//! reports that through [`Transition::entered_loading`] and leaves the actual
//! work to the reducer's effect. Events a state does not handle are dropped,
//! which makes a `Refetch` during `loading` a no-op and keeps at most one
//! fetch in flight.

use crate::state::AllFilms;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateValue {
    Loading,
    Success,
    Error,
}

impl StateValue {
    /// Pure transition table. `None` means the event is ignored in this state.
    pub fn transition(self, event: &MachineEvent) -> Option<StateValue> {
        match (self, event) {
            (StateValue::Loading, MachineEvent::FetchDone(_)) => Some(StateValue::Success),
            (StateValue::Loading, MachineEvent::FetchFailed(_)) => Some(StateValue::Error),
            (StateValue::Success | StateValue::Error, MachineEvent::Refetch) => {
                Some(StateValue::Loading)
            }
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StateValue::Loading => "loading",
            StateValue::Success => "success",
            StateValue::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MachineEvent {
    /// User asked for fresh data
    Refetch,
    /// The fetch resolved
    FetchDone(AllFilms),
    /// The fetch rejected
    FetchFailed(String),
}

impl MachineEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MachineEvent::Refetch => "REFETCH",
            MachineEvent::FetchDone(_) => "FETCH_DONE",
            MachineEvent::FetchFailed(_) => "FETCH_FAILED",
        }
    }
}

/// Extended state carried across transitions
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilmsContext {
    /// Last successful payload. Survives a refetch until the next one lands.
    pub data: Option<AllFilms>,
    /// Message of the last failure
    pub error: Option<String>,
}

/// A transition that was taken
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: StateValue,
    pub to: StateValue,
}

impl Transition {
    pub fn entered_loading(&self) -> bool {
        self.to == StateValue::Loading
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilmsMachine {
    value: StateValue,
    context: FilmsContext,
    started: bool,
}

impl Default for FilmsMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmsMachine {
    /// A machine in its initial `loading` state, not yet started.
    pub fn new() -> Self {
        Self {
            value: StateValue::Loading,
            context: FilmsContext::default(),
            started: false,
        }
    }

    /// Start the machine. Returns `true` exactly once, when the initial
    /// `loading` state is entered and its fetch must be invoked.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.value == StateValue::Loading
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Feed an event. Returns the transition taken, or `None` if ignored.
    pub fn send(&mut self, event: MachineEvent) -> Option<Transition> {
        let to = self.value.transition(&event)?;

        match event {
            MachineEvent::FetchDone(data) => {
                self.context.data = Some(data);
                self.context.error = None;
            }
            MachineEvent::FetchFailed(message) => {
                self.context.error = Some(message);
            }
            MachineEvent::Refetch => {}
        }

        let from = std::mem::replace(&mut self.value, to);
        Some(Transition { from, to })
    }

    pub fn value(&self) -> StateValue {
        self.value
    }

    pub fn matches(&self, value: StateValue) -> bool {
        self.value == value
    }

    pub fn context(&self) -> &FilmsContext {
        &self.context
    }

    /// The film list, only while in `success`.
    pub fn films(&self) -> Option<&AllFilms> {
        match self.value {
            StateValue::Success => self.context.data.as_ref(),
            _ => None,
        }
    }

    /// The failure message, only while in `error`.
    pub fn error(&self) -> Option<&str> {
        match self.value {
            StateValue::Error => self.context.error.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::film;

    fn new_hope() -> AllFilms {
        AllFilms::new(vec![film("A New Hope", 4, "George Lucas")])
    }

    #[test]
    fn test_transition_table() {
        use MachineEvent::*;
        use StateValue::*;

        let done = FetchDone(new_hope());
        let failed = FetchFailed("boom".into());

        assert_eq!(Loading.transition(&done), Some(Success));
        assert_eq!(Loading.transition(&failed), Some(Error));
        assert_eq!(Loading.transition(&Refetch), None);

        assert_eq!(Success.transition(&Refetch), Some(Loading));
        assert_eq!(Success.transition(&done), None);
        assert_eq!(Success.transition(&failed), None);

        assert_eq!(Error.transition(&Refetch), Some(Loading));
        assert_eq!(Error.transition(&done), None);
        assert_eq!(Error.transition(&failed), None);
    }

    #[test]
    fn test_start_invokes_once() {
        let mut machine = FilmsMachine::new();
        assert!(machine.matches(StateValue::Loading));
        assert!(!machine.is_started());

        assert!(machine.start());
        assert!(!machine.start());
        assert!(machine.is_started());
    }

    #[test]
    fn test_success_stores_payload() {
        let mut machine = FilmsMachine::new();
        machine.start();

        let t = machine.send(MachineEvent::FetchDone(new_hope())).unwrap();
        assert_eq!(t.from, StateValue::Loading);
        assert_eq!(t.to, StateValue::Success);
        assert!(!t.entered_loading());

        assert_eq!(machine.films(), Some(&new_hope()));
        assert_eq!(machine.error(), None);
    }

    #[test]
    fn test_refetch_keeps_prior_payload_until_replaced() {
        let mut machine = FilmsMachine::new();
        machine.send(MachineEvent::FetchDone(new_hope()));

        let t = machine.send(MachineEvent::Refetch).unwrap();
        assert!(t.entered_loading());

        // Hidden while loading, still in context
        assert_eq!(machine.films(), None);
        assert_eq!(machine.context().data, Some(new_hope()));

        let empire = AllFilms::new(vec![film("The Empire Strikes Back", 5, "Irvin Kershner")]);
        machine.send(MachineEvent::FetchDone(empire.clone()));
        assert_eq!(machine.films(), Some(&empire));
    }

    #[test]
    fn test_error_then_refetch() {
        let mut machine = FilmsMachine::new();
        machine.send(MachineEvent::FetchFailed("offline".into()));

        assert!(machine.matches(StateValue::Error));
        assert_eq!(machine.error(), Some("offline"));
        assert_eq!(machine.films(), None);

        let t = machine.send(MachineEvent::Refetch).unwrap();
        assert_eq!(t.from, StateValue::Error);
        assert!(t.entered_loading());
        assert_eq!(machine.error(), None);
    }

    #[test]
    fn test_refetch_while_loading_is_ignored() {
        let mut machine = FilmsMachine::new();
        let before = machine.clone();

        assert_eq!(machine.send(MachineEvent::Refetch), None);
        assert_eq!(machine, before);
    }

    #[test]
    fn test_stale_result_ignored_outside_loading() {
        let mut machine = FilmsMachine::new();
        machine.send(MachineEvent::FetchDone(new_hope()));

        assert_eq!(machine.send(MachineEvent::FetchFailed("late".into())), None);
        assert!(machine.matches(StateValue::Success));
        assert_eq!(machine.context().error, None);
    }
}
