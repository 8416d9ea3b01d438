//! Runtime pieces for the films TUI
//!
//! A small Redux/Elm-style core:
//!
//! - **Action**: something that happened, dispatched to the store
//! - **Effect store**: state plus a pure reducer returning [`DispatchResult`]
//! - **Component**: renders from props, turns events into actions
//! - **Tasks / Subscriptions**: async work and timers that report back as actions
//! - **EffectRuntime**: the loop tying terminal events, dispatch and rendering together
//!
//! # Async pattern
//!
//! Async work uses two actions: an intent (`FilmsRefetch`) whose reducer arm
//! declares an effect, and a result (`FilmsDidLoad` / `FilmsDidError`) sent
//! back by the task the effect handler spawned.
//!
//! ```ignore
//! fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
//!     match effect {
//!         Effect::FetchFilms => {
//!             ctx.tasks().spawn("films", async move {
//!                 match client.fetch_films().await {
//!                     Ok(films) => Action::FilmsDidLoad(films),
//!                     Err(e) => Action::FilmsDidError(e.to_string()),
//!                 }
//!             });
//!         }
//!     }
//! }
//! ```

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod middleware;
pub mod runtime;
pub mod subscriptions;
pub mod tasks;
pub mod testing;

pub use action::{Action, ActionSummary};
pub use component::Component;
pub use effect::{DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware};
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use middleware::{LoggingMiddleware, Middleware};
pub use runtime::{EffectContext, EffectRuntime, EffectStoreLike, EventOutcome};
pub use subscriptions::{SubKey, Subscriptions};
pub use tasks::{TaskKey, TaskManager};
