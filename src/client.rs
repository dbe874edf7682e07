use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::{Envelope, RecipeData, SearchData};
use crate::config::AppConfig;
use crate::error::ForkfulError;
use crate::state::{Recipe, SearchResultItem};

/// HTTP client for the recipe API
///
/// Every request races against a wall-clock timeout; whichever settles first
/// wins and the loser's eventual settlement is discarded. The client never
/// retries — retry policy, if any, belongs to the caller.
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ApiClient {
    /// Create a client from configuration
    pub fn new(config: &AppConfig) -> Self {
        ApiClient {
            http: Client::new(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout: config.timeout(),
        }
    }

    /// Override the request timeout (mostly useful in tests)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch one recipe by id: `GET {api_base}/{id}`
    pub async fn get_recipe(&self, id: &str) -> Result<Recipe, ForkfulError> {
        let url = format!("{}/{}", self.base_url, id);
        let envelope: Envelope<RecipeData> = self.get_json(&url, &[]).await?;
        let data = unwrap_envelope(envelope)?;
        Ok(data.recipe.into())
    }

    /// Search recipes: `GET {api_base}?search={query}&key={api_key}`
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>, ForkfulError> {
        let envelope: Envelope<SearchData> = self
            .get_json(&self.base_url, &[("search", query)])
            .await?;
        let data = unwrap_envelope(envelope)?;
        Ok(data.recipes.into_iter().map(Into::into).collect())
    }

    /// GET `url` and decode the JSON body, mapping failures into the error
    /// taxonomy: `Timeout` when the race loses, `Network` for transport
    /// errors, `Http` for non-2xx, `Decode` for schema mismatches.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ForkfulError> {
        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }
        debug!("GET {url}");

        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| ForkfulError::Timeout(self.timeout))??;

        let status = response.status();
        if !status.is_success() {
            // a stalled error body must not hang the flow; on expiry fall
            // back to the status-only message
            let body = tokio::time::timeout(self.timeout, response.text())
                .await
                .map(|body| body.unwrap_or_default())
                .unwrap_or_default();
            return Err(ForkfulError::Http {
                status: status.as_u16(),
                message: error_message(&body, status.as_u16()),
            });
        }

        let body = tokio::time::timeout(self.timeout, response.text())
            .await
            .map_err(|_| ForkfulError::Timeout(self.timeout))??;
        serde_json::from_str(&body).map_err(|e| ForkfulError::Decode(e.to_string()))
    }
}

/// Reject `"fail"` envelopes and missing payloads
fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, ForkfulError> {
    if envelope.status != "success" {
        return Err(ForkfulError::Decode(
            envelope
                .message
                .unwrap_or_else(|| format!("API returned status {:?}", envelope.status)),
        ));
    }
    envelope
        .data
        .ok_or_else(|| ForkfulError::Decode("missing data payload".to_string()))
}

/// Pull the `message` field out of an error body, falling back to the status
fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn client_for(server: &Server) -> ApiClient {
        ApiClient::new(&AppConfig {
            api_base: server.url(),
            ..AppConfig::default()
        })
    }

    const RECIPE_BODY: &str = r#"{
        "status": "success",
        "data": {
            "recipe": {
                "id": "5ed6604591c37cdc054bc886",
                "title": "Pizza Margherita",
                "publisher": "Closet Cooking",
                "source_url": "https://example.com/pizza",
                "image_url": "https://example.com/pizza.jpg",
                "servings": 4,
                "cooking_time": 60,
                "ingredients": [
                    {"quantity": 1.5, "unit": "cup", "description": "flour"}
                ]
            }
        }
    }"#;

    #[tokio::test]
    async fn test_get_recipe() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/5ed6604591c37cdc054bc886")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(RECIPE_BODY)
            .create();

        let recipe = client_for(&server)
            .get_recipe("5ed6604591c37cdc054bc886")
            .await
            .unwrap();
        assert_eq!(recipe.title, "Pizza Margherita");
        assert_eq!(recipe.image, "https://example.com/pizza.jpg");
        mock.assert();
    }

    #[tokio::test]
    async fn test_search_sends_query_and_key() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("search".into(), "pizza".into()),
                mockito::Matcher::UrlEncoded("key".into(), "k-1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status": "success", "results": 1, "data": {"recipes": [
                    {"id": "a", "title": "Pizza", "publisher": "P", "image_url": "u"}
                ]}}"#,
            )
            .create();

        let client = ApiClient::new(&AppConfig {
            api_base: server.url(),
            api_key: Some("k-1".to_string()),
            ..AppConfig::default()
        });
        let hits = client.search("pizza").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
        mock.assert();
    }

    #[tokio::test]
    async fn test_http_error_carries_api_message() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/bad-id")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status": "fail", "message": "Invalid _id: bad-id"}"#)
            .create();

        let err = client_for(&server).get_recipe("bad-id").await.unwrap_err();
        match err {
            ForkfulError::Http { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid _id: bad-id");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_error_without_message_body() {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/gone").with_status(500).create();

        let err = client_for(&server).get_recipe("gone").await.unwrap_err();
        match err {
            ForkfulError::Http { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("500"));
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/odd")
            .with_status(200)
            .with_body("not json")
            .create();

        let err = client_for(&server).get_recipe("odd").await.unwrap_err();
        assert!(matches!(err, ForkfulError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fail_envelope_with_200_status() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/weird")
            .with_status(200)
            .with_body(r#"{"status": "fail", "message": "nope"}"#)
            .create();

        let err = client_for(&server).get_recipe("weird").await.unwrap_err();
        match err {
            ForkfulError::Decode(message) => assert_eq!(message, "nope"),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }
}
