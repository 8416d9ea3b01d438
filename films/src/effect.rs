//! Effects - side effects declared by the reducer
//!
//! The reducer never fetches. It returns [`Effect::FetchFilms`] whenever the
//! machine enters `loading`, and [`FilmsEffects`] turns that into a task whose
//! result comes back as `FilmsDidLoad` / `FilmsDidError`.

use std::sync::Arc;

use films_core::{EffectContext, TaskKey};

use crate::action::Action;
use crate::api::FilmsClient;
use crate::graphql::{HttpTransport, Transport};

/// Task key of the in-flight fetch. Spawning under the same key replaces
/// the previous task.
pub const FILMS_TASK: &str = "films";

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the films query
    FetchFilms,
}

/// Runs effects against a shared [`FilmsClient`]
pub struct FilmsEffects<T = HttpTransport> {
    client: Arc<FilmsClient<T>>,
}

impl<T> Clone for FilmsEffects<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<T: Transport + 'static> FilmsEffects<T> {
    pub fn new(client: FilmsClient<T>) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn client(&self) -> &FilmsClient<T> {
        &self.client
    }

    pub fn handle(&self, effect: Effect, ctx: &mut EffectContext<Action>) {
        match effect {
            Effect::FetchFilms => {
                let client = Arc::clone(&self.client);
                ctx.tasks()
                    .spawn(TaskKey::new(FILMS_TASK), async move {
                        fetch_action(&client).await
                    });
            }
        }
    }
}

/// Run one fetch and wrap its outcome in the matching result action.
pub async fn fetch_action<T: Transport>(client: &FilmsClient<T>) -> Action {
    match client.fetch_films().await {
        Ok(films) => Action::FilmsDidLoad(films),
        Err(e) => Action::FilmsDidError(e.to_string()),
    }
}
