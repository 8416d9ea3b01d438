//! Effect-emitting store
//!
//! Reducers stay pure: instead of spawning work themselves they return a
//! [`DispatchResult`] that says whether state changed and which effects the
//! runtime should carry out next.
//!
//! ```ignore
//! fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::FilmsRefetch => match state.machine.send(MachineEvent::Refetch) {
//!             Some(t) if t.entered_loading() => DispatchResult::changed_with(Effect::FetchFilms),
//!             Some(_) => DispatchResult::changed(),
//!             None => DispatchResult::unchanged(),
//!         },
//!         Action::FilmsDidLoad(films) => {
//!             state.machine.send(MachineEvent::FetchDone(films));
//!             DispatchResult::changed()
//!         }
//!         _ => DispatchResult::unchanged(),
//!     }
//! }
//! ```

use std::marker::PhantomData;

use crate::action::Action;
use crate::middleware::Middleware;

/// Outcome of one dispatch: the re-render flag plus declared effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// Nothing changed, nothing to do.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed and one effect must run.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer function that can emit effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Holds the state and routes actions through the reducer.
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E>
where
    A: Action,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// An [`EffectStore`] wrapped with a [`Middleware`].
///
/// The middleware sees every action before and after the reducer, together
/// with the state change flag. It never sees the effects.
pub struct EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    store: EffectStore<S, A, E>,
    middleware: M,
}

impl<S, A, E, M> EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: EffectStore::new(state, reducer),
            middleware,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    #[inline]
    pub fn middleware(&self) -> &M {
        &self.middleware
    }

    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}
