//! Minimal GraphQL client
//!
//! Requests go through a [`Transport`] (HTTP in production, in-memory in
//! tests). [`GraphQlClient`] sits on top of it and consults the
//! [`QueryCache`] according to its [`FetchPolicy`].

mod cache;

pub use cache::{CacheKey, FetchPolicy, QueryCache};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::FetchError;

/// JSON body of a GraphQL POST
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(rename = "operationName", skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    /// Attach variables. `null` and `{}` are treated as no variables.
    pub fn with_variables(mut self, variables: Value) -> Self {
        let empty = variables.is_null() || variables.as_object().is_some_and(|o| o.is_empty());
        self.variables = if empty { None } else { Some(variables) };
        self
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// One entry of the `errors` array
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphQlErrorMessage {
    pub message: String,
}

/// JSON body of a GraphQL response
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorMessage>>,
}

impl GraphQlResponse {
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Extract `data`, treating any reported error as a failure.
    pub fn into_data(self) -> Result<Value, FetchError> {
        match self.errors {
            Some(errors) if !errors.is_empty() => Err(FetchError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            )),
            _ => match self.data {
                Some(Value::Null) | None => Err(FetchError::MissingData),
                Some(data) => Ok(data),
            },
        }
    }
}

/// Sends one request and returns the parsed response body
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &GraphQlRequest) -> Result<GraphQlResponse, FetchError>;
}

/// POSTs JSON to a fixed endpoint with `reqwest`
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &GraphQlRequest) -> Result<GraphQlResponse, FetchError> {
        debug!(endpoint = %self.endpoint, "POST GraphQL request");
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.json::<GraphQlResponse>().await?)
    }
}

/// GraphQL client with a response cache
pub struct GraphQlClient<T> {
    transport: T,
    cache: QueryCache,
    policy: FetchPolicy,
}

impl<T: Transport> GraphQlClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            cache: QueryCache::new(),
            policy: FetchPolicy::default(),
        }
    }

    /// Default policy for [`query`](Self::query).
    pub fn with_fetch_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn fetch_policy(&self) -> FetchPolicy {
        self.policy
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a query with the client's default fetch policy.
    pub async fn query<D>(&self, request: &GraphQlRequest) -> Result<D, FetchError>
    where
        D: DeserializeOwned,
    {
        self.query_with_policy(request, self.policy).await
    }

    /// Run a query with an explicit fetch policy.
    ///
    /// Only data that decodes into `D` is stored, so a bad payload is never
    /// served from the cache later.
    pub async fn query_with_policy<D>(
        &self,
        request: &GraphQlRequest,
        policy: FetchPolicy,
    ) -> Result<D, FetchError>
    where
        D: DeserializeOwned,
    {
        let key = CacheKey::for_request(request);

        if policy.reads_cache() {
            if let Some(data) = self.cache.get(&key) {
                info!(?policy, "Serving query from cache");
                return Ok(serde_json::from_value(data)?);
            }
        }

        let data = self.transport.execute(request).await?.into_data()?;
        let decoded = serde_json::from_value(data.clone())?;

        if policy.writes_cache() {
            self.cache.insert(key, data);
        }
        Ok(decoded)
    }
}
