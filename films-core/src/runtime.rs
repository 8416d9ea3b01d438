//! The event/action/render loop.
//!
//! [`EffectRuntime`] owns the store, the action channel, the task manager and
//! the subscriptions. Each turn of the loop it:
//!
//! 1. renders if the last dispatch changed state,
//! 2. waits for either a terminal event or a queued action,
//! 3. maps events to actions through the app's `map_event` closure,
//! 4. dispatches actions and hands every declared effect to `handle_effect`.

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::effect::{DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware};
use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::middleware::Middleware;
use crate::subscriptions::Subscriptions;
use crate::tasks::TaskManager;
use crate::Action;

/// Timeout passed to each `crossterm::event::poll` call.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);
/// Sleep between poll cycles.
const POLL_LOOP_SLEEP: Duration = Duration::from_millis(16);

/// Actions produced by one event, plus a render hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    /// Force a re-render even if no action changes state.
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    /// Collect a `Component::handle_event` result.
    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }
}

/// Store interface used by [`EffectRuntime`].
pub trait EffectStoreLike<S, A: Action, E> {
    fn dispatch(&mut self, action: A) -> DispatchResult<E>;
    fn state(&self) -> &S;
}

impl<S, A: Action, E> EffectStoreLike<S, A, E> for EffectStore<S, A, E> {
    fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        EffectStore::dispatch(self, action)
    }

    fn state(&self) -> &S {
        EffectStore::state(self)
    }
}

impl<S, A: Action, E, M: Middleware<A>> EffectStoreLike<S, A, E>
    for EffectStoreWithMiddleware<S, A, E, M>
{
    fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        EffectStoreWithMiddleware::dispatch(self, action)
    }

    fn state(&self) -> &S {
        EffectStoreWithMiddleware::state(self)
    }
}

/// What an effect handler may touch.
pub struct EffectContext<'a, A: Action> {
    tasks: &'a mut TaskManager<A>,
    subscriptions: &'a mut Subscriptions<A>,
}

impl<A: Action> EffectContext<'_, A> {
    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }

    pub fn subscriptions(&mut self) -> &mut Subscriptions<A> {
        self.subscriptions
    }
}

/// Runtime for effect-based stores.
pub struct EffectRuntime<S, A: Action, E, St: EffectStoreLike<S, A, E> = EffectStore<S, A, E>> {
    store: St,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    should_render: bool,
    tasks: TaskManager<A>,
    subscriptions: Subscriptions<A>,
    _marker: std::marker::PhantomData<(S, E)>,
}

impl<S: 'static, A: Action, E> EffectRuntime<S, A, E, EffectStore<S, A, E>> {
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self::from_store(EffectStore::new(state, reducer))
    }
}

impl<S: 'static, A: Action, E, St: EffectStoreLike<S, A, E>> EffectRuntime<S, A, E, St> {
    pub fn from_store(store: St) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        let subscriptions = Subscriptions::new(action_tx.clone());

        Self {
            store,
            action_tx,
            action_rx,
            should_render: true,
            tasks,
            subscriptions,
            _marker: std::marker::PhantomData,
        }
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        &mut self.tasks
    }

    pub fn subscriptions(&mut self) -> &mut Subscriptions<A> {
        &mut self.subscriptions
    }

    /// Wait for the next queued action (from `enqueue`, tasks or subscriptions).
    pub async fn next_action(&mut self) -> Option<A> {
        self.action_rx.recv().await
    }

    /// Dispatch one action and run the effects it declares.
    ///
    /// Returns whether the state changed. The run loop uses this for every
    /// action; headless callers can drive the app with it directly.
    pub fn dispatch<FEffect>(&mut self, action: A, mut handle_effect: FEffect) -> bool
    where
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let result = self.store.dispatch(action);
        if result.has_effects() {
            let mut ctx = EffectContext {
                tasks: &mut self.tasks,
                subscriptions: &mut self.subscriptions,
            };
            for effect in result.effects {
                handle_effect(effect, &mut ctx);
            }
        }
        result.changed
    }

    /// Run the event/action loop until `should_quit` accepts an action.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> EventOutcome<A>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _handle = spawn_event_poller(
            event_tx,
            POLL_TIMEOUT,
            POLL_LOOP_SLEEP,
            cancel_token.clone(),
        );

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| render(frame, frame.area(), state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    let outcome = map_event(&event, self.store.state());
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }
                    if self.dispatch(action, &mut handle_effect) {
                        self.should_render = true;
                    }
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.subscriptions.cancel_all();
        self.tasks.cancel_all();

        Ok(())
    }
}
