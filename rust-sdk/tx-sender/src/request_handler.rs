//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use anyhow::{anyhow, Result};
use log::error;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// Sends HTTP requests to a JSON-RPC node
///
/// Wraps a `reqwest::Client`, serializes request bodies as JSON and turns non-success responses
/// into errors carrying the node's error message.
#[derive(Clone)]
pub struct RequestHandler {
    pub http_client: Client,
}

impl RequestHandler {
    /// Creates a new instance of `RequestHandler`
    ///
    /// # Arguments
    /// * `client` - A shared instance of a `reqwest::Client`
    pub fn new(client: Client) -> Self {
        Self { http_client: client }
    }

    /// Sends an HTTP request and deserializes the response body
    ///
    /// # Type Parameters
    /// * `R` - The type of the request body, which must implement `Serialize`
    /// * `T` - The expected type of the response, which must implement `Deserialize`
    ///
    /// # Arguments
    /// * `method` - The HTTP method to be used for the request
    /// * `url` - The URL to which the request is sent
    /// * `body` - An optional request body, serialized as JSON if provided
    ///
    /// # Errors
    /// Returns an error on network failures, on a non-success status or when the body cannot be deserialized
    pub async fn send<R, T>(&self, method: Method, url: Url, body: Option<&R>) -> Result<T>
    where
        R: Serialize + ?Sized + Send + Sync + Debug,
        T: for<'de> Deserialize<'de> + Default,
    {
        let mut request_builder: RequestBuilder = self.http_client.request(method, url);

        if let Some(body) = body {
            request_builder = request_builder.json(body);
        }

        let response: Response = request_builder.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de> + Default>(&self, response: Response) -> Result<T> {
        let status: StatusCode = response.status();
        let path: String = response.url().path().to_string();
        let body_text: String = response.text().await.unwrap_or_default();

        if status.is_success() {
            if body_text.is_empty() {
                return Ok(T::default());
            }

            match serde_json::from_str::<T>(&body_text) {
                Ok(data) => Ok(data),
                Err(e) => {
                    error!(target: "log", "Deserialization error: {}", e);
                    error!(target: "log", "Raw JSON: {}", body_text);
                    Err(e.into())
                }
            }
        } else {
            Err(anyhow!("status: {}; path: {}; error={}", status, path, error_message(&body_text)))
        }
    }
}

/// Extracts a readable error message from a failed response body.
fn error_message(body_text: &str) -> String {
    match serde_json::from_str::<Value>(body_text) {
        Ok(body) => match &body["error"] {
            Value::Object(error_value) => error_value
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<String>>()
                .join(", "),
            Value::String(error_value) => error_value.clone(),
            _ => "Unknown error".to_string(),
        },
        Err(_) => body_text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"error":{"code":-32000,"message":"nonce too low"}}"#), r#"code: -32000, message: "nonce too low""#);
        assert_eq!(error_message(r#"{"error":"rate limited"}"#), "rate limited");
        assert_eq!(error_message(r#"{"result":1}"#), "Unknown error");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
    }
}
