use crate::{ClientConfig, GraphqlRequest, SearchError};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait GraphqlTransport {
    /// Sends one request and returns the parsed response body as-is.
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value, SearchError>;
}

pub struct HttpTransport {
    client: Arc<Client>,
    endpoint: String,
    authorization: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Arc::new(Client::new()), config)
    }

    pub fn with_client(client: Arc<Client>, config: &ClientConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            authorization: config.authorization.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<Value, SearchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, &self.authorization)
            .body(serde_json::to_string(request)?)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        debug!(status = %status, body = %raw, "graphql response");

        if !status.is_success() {
            // GraphQL errors on a failed status still reach the caller as a
            // service error; anything else is reported with the status.
            return match serde_json::from_str::<Value>(&raw) {
                Ok(body) if first_error_message(&body).is_some() => Ok(body),
                _ => Err(SearchError::BackendResponse {
                    status: status.to_string(),
                    details: truncate(&raw, 200),
                }),
            };
        }

        Ok(serde_json::from_str(&raw)?)
    }
}

/// Message of the first entry in a top-level `errors` array, if any.
pub fn first_error_message(body: &Value) -> Option<String> {
    let first = body.pointer("/errors/0")?;
    let message = first
        .pointer("/message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| first.to_string());
    Some(message)
}

/// Fails with [`SearchError::Service`] when the body carries GraphQL errors.
pub fn ensure_no_errors(body: Value) -> Result<Value, SearchError> {
    match first_error_message(&body) {
        Some(message) => Err(SearchError::Service(message)),
        None => Ok(body),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text.to_string(),
    }
}
