use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::github::queries::GITHUB_GRAPHQL_ENDPOINT;
use crate::github::response::{GraphQlEnvelope, GraphQlError};

/// Client for the GitHub GraphQL endpoint. Stateless across calls; every
/// failure is classified, logged, and reported as a typed error.
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    pub fn new(token: &str, timeout: Duration) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitcard/0.1"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Execute one GraphQL query and decode the `data` payload into `T`.
    pub async fn execute<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        let payload = json!({ "query": query, "variables": variables });

        let response = self
            .client
            .post(GITHUB_GRAPHQL_ENDPOINT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = upstream_message(&response.text().await.unwrap_or_default());
            return Err(classify_status(status, message));
        }

        let envelope: GraphQlEnvelope<T> = response.json().await?;

        if let Some(errors) = envelope.errors {
            let message = join_error_messages(&errors);
            tracing::warn!("GraphQL errors: {}", message);
            return Err(Error::Upstream(message));
        }

        envelope
            .data
            .ok_or_else(|| Error::Upstream("response carried no data".to_string()))
    }
}

fn classify_status(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::FORBIDDEN => {
            tracing::warn!("Rate limit exceeded: {}", message);
            Error::RateLimited
        }
        StatusCode::NOT_FOUND => {
            tracing::warn!("Not found: {}", message);
            Error::NotFound(message)
        }
        _ => {
            tracing::warn!("API error {}: {}", status, message);
            Error::Upstream(format!("{}: {}", status, message))
        }
    }
}

/// Pull the `message` field out of an error body, falling back to the raw
/// body text.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

fn join_error_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_maps_to_rate_limited() {
        let err = classify_status(StatusCode::FORBIDDEN, "API rate limit exceeded".into());
        assert!(matches!(err, Error::RateLimited));
        assert!(err.is_retryable());
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let err = classify_status(StatusCode::NOT_FOUND, "Not Found".into());
        assert!(matches!(err, Error::NotFound(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn other_statuses_map_to_upstream() {
        let err = classify_status(StatusCode::BAD_GATEWAY, "bad gateway".into());
        match err {
            Error::Upstream(message) => assert!(message.contains("502")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn upstream_message_prefers_message_field() {
        let body = r#"{"message": "Bad credentials", "documentation_url": "..."}"#;
        assert_eq!(upstream_message(body), "Bad credentials");
    }

    #[test]
    fn upstream_message_falls_back_to_raw_body() {
        assert_eq!(upstream_message("service unavailable"), "service unavailable");
    }

    #[test]
    fn error_messages_join_with_separator() {
        let errors = vec![
            GraphQlError {
                message: "first".into(),
                kind: None,
            },
            GraphQlError {
                message: "second".into(),
                kind: Some("NOT_FOUND".into()),
            },
        ];
        assert_eq!(join_error_messages(&errors), "first; second");
    }
}
