//! GraphQL transport port and its HTTP implementation.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

/// Executes one GraphQL operation and returns its `data` member.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, query: &str, variables: Value) -> CatalogResult<Value>;
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphqlErrorWire>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorWire {
    message: String,
}

/// Unwrap a GraphQL response envelope.
///
/// Any entry in `errors` fails the whole operation, even when partial data
/// came back alongside it.
pub fn unwrap_response(body: Value) -> CatalogResult<Value> {
    let response: GraphqlResponse = serde_json::from_value(body)?;

    if let Some(errors) = response.errors {
        if !errors.is_empty() {
            return Err(CatalogError::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            ));
        }
    }

    match response.data {
        Some(Value::Null) | None => Err(CatalogError::EmptyResponse),
        Some(data) => Ok(data),
    }
}

/// POSTs operations as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, query: &str, variables: Value) -> CatalogResult<Value> {
        debug!(endpoint = %self.endpoint, "POST GraphQL operation");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response.json().await?;
        unwrap_response(body)
    }
}
