//! In-memory transport for tests

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::FetchError;
use crate::graphql::{GraphQlErrorMessage, GraphQlRequest, GraphQlResponse, Transport};
use crate::state::Film;

/// A canned reply
#[derive(Clone, Debug)]
pub enum MockReply {
    Data(Value),
    Errors(Vec<String>),
    Status(u16),
}

/// Replays queued replies and records every request it receives
///
/// Once the queue is empty the `fallback` reply (if any) is repeated;
/// otherwise the transport answers with HTTP 503.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    fallback: Option<MockReply>,
    requests: Mutex<Vec<GraphQlRequest>>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request with `reply`.
    pub fn always(reply: MockReply) -> Self {
        Self {
            fallback: Some(reply),
            ..Self::default()
        }
    }

    /// Answer every request with the given films.
    pub fn serving(films: &[Film]) -> Self {
        Self::always(MockReply::Data(all_films_data(films)))
    }

    pub fn push(self, reply: MockReply) -> Self {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<GraphQlRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<GraphQlResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .or_else(|| self.fallback.clone());

        match reply {
            Some(MockReply::Data(data)) => Ok(GraphQlResponse::from_data(data)),
            Some(MockReply::Errors(messages)) => Ok(GraphQlResponse {
                data: None,
                errors: Some(
                    messages
                        .into_iter()
                        .map(|message| GraphQlErrorMessage { message })
                        .collect(),
                ),
            }),
            Some(MockReply::Status(code)) => Err(FetchError::Status(code)),
            None => Err(FetchError::Status(503)),
        }
    }
}

/// Build a film with the given fields.
pub fn film(title: &str, episode_id: i64, director: &str) -> Film {
    Film {
        title: title.into(),
        episode_id,
        director: director.into(),
    }
}

/// The `data` object a server returns for the films query.
pub fn all_films_data(films: &[Film]) -> Value {
    let films: Vec<Value> = films
        .iter()
        .map(|f| {
            json!({
                "title": f.title,
                "episodeId": f.episode_id,
                "director": f.director,
            })
        })
        .collect();
    json!({ "allFilms": films })
}
