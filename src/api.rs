use crate::constants::{KEY_POINTS_PATH, REQUEST_TIMEOUT, SUMMARIZE_PATH};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when communicating with the text-processing backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP client-level error (connection, timeout, undecodable body).
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// Backend answered with a non-success status. The message carries the
    /// `detail` field of the error body, or the status line when absent.
    #[error("backend error: {0}")]
    Service(String),
    /// Backend answered 2xx but the body is missing expected fields.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

#[derive(Serialize)]
struct ProcessRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct SummaryResponse {
    summary_es: Option<String>,
    summary_en: Option<String>,
}

#[derive(Deserialize)]
struct KeyPointsResponse {
    key_points_es: Option<Vec<String>>,
    key_points_en: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// A summary in both output languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualSummary {
    pub spanish: String,
    pub english: String,
}

/// Ordered key points in both output languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualKeyPoints {
    pub spanish: Vec<String>,
    pub english: Vec<String>,
}

/// Client for the external text-processing service.
///
/// Provides the two supported operations: bilingual summarization and
/// bilingual key-point extraction. Both send the raw input text and decode
/// the structured result the service returns.
#[derive(Clone)]
pub struct AssistantClient {
    client: Client,
    base_url: String,
}

impl AssistantClient {
    /// Creates a client for the backend at `base_url`.
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Requests a bilingual summary of `text`.
    pub async fn summarize(&self, text: &str) -> Result<BilingualSummary, ApiError> {
        let body: SummaryResponse = self.post(SUMMARIZE_PATH, text).await?;
        match (body.summary_es, body.summary_en) {
            (Some(spanish), Some(english)) => Ok(BilingualSummary { spanish, english }),
            _ => Err(ApiError::MalformedResponse(
                "missing summary_es/summary_en".to_string(),
            )),
        }
    }

    /// Requests bilingual key points extracted from `text`.
    pub async fn key_points(&self, text: &str) -> Result<BilingualKeyPoints, ApiError> {
        let body: KeyPointsResponse = self.post(KEY_POINTS_PATH, text).await?;
        match (body.key_points_es, body.key_points_en) {
            (Some(spanish), Some(english)) => Ok(BilingualKeyPoints { spanish, english }),
            _ => Err(ApiError::MalformedResponse(
                "missing key_points_es/key_points_en".to_string(),
            )),
        }
    }

    async fn post<T>(&self, path: &str, text: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(url)
            .json(&ProcessRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| {
                    format!(
                        "Error {}: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown")
                    )
                });
            return Err(ApiError::Service(detail));
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn client_strips_trailing_slash() {
        let client = AssistantClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn api_error_display() {
        let err = ApiError::Service("model unavailable".to_string());
        assert_eq!(format!("{}", err), "backend error: model unavailable");
    }

    #[tokio::test]
    async fn summarize_decodes_bilingual_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .and(body_json(json!({ "text": "Plants need sunlight." })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary_es": "Las plantas necesitan luz solar.",
                "summary_en": "Plants need sunlight."
            })))
            .mount(&server)
            .await;

        let client = AssistantClient::new(&server.uri());
        let summary = client.summarize("Plants need sunlight.").await.unwrap();
        assert_eq!(summary.spanish, "Las plantas necesitan luz solar.");
        assert_eq!(summary.english, "Plants need sunlight.");
    }

    #[tokio::test]
    async fn key_points_decodes_both_lists() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/key-points"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key_points_es": ["Las plantas necesitan luz."],
                "key_points_en": ["Plants need light."]
            })))
            .mount(&server)
            .await;

        let client = AssistantClient::new(&server.uri());
        let points = client.key_points("Plants need sunlight.").await.unwrap();
        assert_eq!(points.spanish, vec!["Las plantas necesitan luz."]);
        assert_eq!(points.english, vec!["Plants need light."]);
    }

    #[tokio::test]
    async fn error_status_surfaces_detail_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({ "detail": "model unavailable" })),
            )
            .mount(&server)
            .await;

        let client = AssistantClient::new(&server.uri());
        let err = client.summarize("some text").await.unwrap_err();
        match err {
            ApiError::Service(detail) => assert_eq!(detail, "model unavailable"),
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn error_status_without_detail_falls_back_to_status_line() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/key-points"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let client = AssistantClient::new(&server.uri());
        let err = client.key_points("some text").await.unwrap_err();
        match err {
            ApiError::Service(detail) => assert!(detail.contains("503"), "got: {}", detail),
            other => panic!("expected Service error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_summary_field_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "summary_es": "Hola." })),
            )
            .mount(&server)
            .await;

        let client = AssistantClient::new(&server.uri());
        let err = client.summarize("some text").await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn non_json_success_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = AssistantClient::new(&server.uri());
        let err = client.summarize("some text").await.unwrap_err();
        assert!(matches!(err, ApiError::HttpClient(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        // Port 9 (discard) is never serving HTTP.
        let client = AssistantClient::new("http://127.0.0.1:9");
        let err = client.summarize("some text").await.unwrap_err();
        assert!(matches!(err, ApiError::HttpClient(_)));
    }
}
