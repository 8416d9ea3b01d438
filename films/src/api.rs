//! The films query
//!
//! One fixed query against one endpoint. The client is built once in `main`
//! and handed to the effect handler; nothing here is global.

use tracing::{info, warn};

use crate::error::FetchError;
use crate::graphql::{FetchPolicy, GraphQlClient, GraphQlRequest, HttpTransport, Transport};
use crate::state::AllFilms;

pub const DEFAULT_ENDPOINT: &str = "https://swapi.graph.cool";

pub const ALL_FILMS_QUERY: &str = r#"
  {
    allFilms {
      title
      episodeId
      director
    }
  }
"#;

/// Owns the GraphQL client used to fetch films
pub struct FilmsClient<T = HttpTransport> {
    graphql: GraphQlClient<T>,
    request: GraphQlRequest,
}

impl FilmsClient<HttpTransport> {
    /// Client talking HTTP to `endpoint`.
    pub fn http(endpoint: &str, policy: FetchPolicy) -> Self {
        Self::new(GraphQlClient::new(HttpTransport::new(endpoint)).with_fetch_policy(policy))
    }
}

impl<T: Transport> FilmsClient<T> {
    pub fn new(graphql: GraphQlClient<T>) -> Self {
        Self {
            graphql,
            request: GraphQlRequest::new(ALL_FILMS_QUERY),
        }
    }

    pub fn graphql(&self) -> &GraphQlClient<T> {
        &self.graphql
    }

    /// Fetch the film list. One attempt, no retry.
    pub async fn fetch_films(&self) -> Result<AllFilms, FetchError> {
        info!(policy = ?self.graphql.fetch_policy(), "Fetching films");
        match self.graphql.query::<AllFilms>(&self.request).await {
            Ok(films) => {
                info!(count = films.len(), "Films fetched");
                Ok(films)
            }
            Err(e) => {
                warn!(error = %e, "Films fetch failed");
                Err(e)
            }
        }
    }
}
