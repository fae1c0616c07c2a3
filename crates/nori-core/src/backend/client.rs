//! HTTP client for the playground backend.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiResult};
use super::types::{
    ChatReply, ChatRequest, HealthStatus, ModelInfo, ModelInfoEnvelope, RecommendReply,
    RecommendRequest,
};

/// User-Agent sent with every backend request.
pub const NORI_USER_AGENT: &str = concat!("nori/", env!("CARGO_PKG_VERSION"));

const CHAT_PATH: &str = "/api/chat";
const HEALTH_PATH: &str = "/health";
const MODEL_INFO_PATH: &str = "/api/model-info";
const RECOMMEND_PATH: &str = "/recommend";

/// Backend client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Request timeout (`None` waits forever).
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Playground backend client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    http: reqwest::Client,
}

impl BackendClient {
    /// Creates a client.
    ///
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: BackendConfig) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder().default_headers(default_headers());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::from_transport(&e))?;
        Ok(Self { config, http })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// `POST /api/chat`.
    ///
    /// # Errors
    /// Returns a connect/timeout error when the backend is unreachable, an
    /// HTTP status error on non-2xx, and a parse error on a malformed body.
    pub async fn send_chat(&self, request: &ChatRequest) -> ApiResult<ChatReply> {
        tracing::info!(
            url = %self.url(CHAT_PATH),
            category = %request.category,
            user_id = %request.user_id,
            "sending chat message"
        );
        self.post_json(CHAT_PATH, request).await
    }

    /// `GET /health`.
    ///
    /// # Errors
    /// See [`BackendClient::send_chat`].
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        self.get_json(HEALTH_PATH).await
    }

    /// `GET /api/model-info`.
    ///
    /// # Errors
    /// See [`BackendClient::send_chat`].
    pub async fn model_info(&self) -> ApiResult<ModelInfo> {
        let envelope: ModelInfoEnvelope = self.get_json(MODEL_INFO_PATH).await?;
        Ok(envelope.model_info)
    }

    /// `POST /recommend`.
    ///
    /// # Errors
    /// See [`BackendClient::send_chat`].
    pub async fn recommend(&self, user_id: &str, limit: u32) -> ApiResult<RecommendReply> {
        let request = RecommendRequest {
            user_id: user_id.to_string(),
            limit,
        };
        self.post_json(RECOMMEND_PATH, &request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;
        read_json(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;
        read_json(path, response).await
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(NORI_USER_AGENT));
    headers
}

async fn read_json<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::from_transport(&e))?;
    tracing::debug!(path, status = status.as_u16(), "backend responded");

    if !status.is_success() {
        return Err(ApiError::http_status(status.as_u16(), &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| ApiError::parse(format!("Malformed response from {path}: {e}"), &body))
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::backend::ApiErrorKind;
    use crate::session::Category;

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(BackendConfig::new(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_send_chat_posts_canonical_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(header("accept", "application/json"))
            .and(body_json(serde_json::json!({
                "message": "혈압 관리 방법 알려주세요",
                "category": "health",
                "user_id": "user_42",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "response": "규칙적인 운동을 하세요.",
                "category": "health",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server)
            .send_chat(&ChatRequest {
                message: "혈압 관리 방법 알려주세요".to_string(),
                category: Category::Health,
                user_id: "user_42".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(reply.response.as_deref(), Some("규칙적인 운동을 하세요."));
        assert_eq!(reply.category.as_deref(), Some("health"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let err = client_for(&server).health().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::HttpStatus);
        assert_eq!(err.message, "HTTP 503");
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/model-info"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).model_info().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Parse);
        assert_eq!(err.details.as_deref(), Some("<html>"));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_connect_error() {
        // Port 9 (discard) is closed on test hosts.
        let client = BackendClient::new(BackendConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.health().await.unwrap_err();
        assert!(err.is_unreachable(), "unexpected kind: {}", err.kind);
    }

    #[tokio::test]
    async fn test_recommend_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/recommend"))
            .and(body_json(serde_json::json!({"user_id": "u", "limit": 5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "recommendations": [{"question": "제주도 여행 추천해주세요", "score": 0.91}]
            })))
            .mount(&server)
            .await;

        let reply = client_for(&server).recommend("u", 5).await.unwrap();
        assert_eq!(reply.recommendations.len(), 1);
        assert!((reply.recommendations[0].score - 0.91).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = BackendConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
    }
}
