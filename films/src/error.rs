//! Errors raised while fetching films

use thiserror::Error;

/// Everything that can go wrong between sending a query and decoding its data
///
/// The state machine does not care which variant it got: any of them moves it
/// to `error`. The variants exist for logs and for the message shown under
/// the error indicator.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no data")]
    MissingData,
}
