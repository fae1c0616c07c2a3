//! Wire types for the playground backend.
//!
//! Read-side types are lenient: every field the UI can live without is
//! optional, so a partially filled body still parses.

use serde::{Deserialize, Serialize};

use crate::session::Category;

/// `POST /api/chat` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub category: Category,
    pub user_id: String,
}

/// `POST /api/chat` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// `GET /health` response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub model_status: Option<String>,
}

impl HealthStatus {
    pub fn model_name(&self) -> &str {
        self.model.as_deref().unwrap_or("Unknown")
    }
}

/// `GET /api/model-info` envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelInfoEnvelope {
    #[serde(default)]
    pub model_info: ModelInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, rename = "type")]
    pub model_type: Option<String>,
    #[serde(default)]
    pub embedding_status: Option<EmbeddingStatus>,
    #[serde(default)]
    pub available_models: Vec<AvailableModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmbeddingStatus {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AvailableModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size_mb: Option<f64>,
}

/// Coarse model status used for the status line colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelHealth {
    Active,
    Mock,
    Error,
    Offline,
    Unknown,
}

impl ModelInfo {
    /// Placeholder shown when model info could not be fetched.
    pub fn offline() -> Self {
        Self {
            name: Some("Offline".to_string()),
            status: Some("offline".to_string()),
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    pub fn health(&self) -> ModelHealth {
        match self.status.as_deref() {
            Some("loaded" | "active") => ModelHealth::Active,
            Some("mock") => ModelHealth::Mock,
            Some("error" | "file_not_found" | "load_error" | "dependency_missing") => {
                ModelHealth::Error
            }
            Some("offline") => ModelHealth::Offline,
            _ => ModelHealth::Unknown,
        }
    }

    /// Human readable status label.
    pub fn status_label(&self) -> String {
        match self.status.as_deref() {
            Some("loaded") => "로드됨 ✅".to_string(),
            Some("active") => "활성화됨 ✅".to_string(),
            Some("mock") => "Mock 모드 🟡".to_string(),
            Some("file_not_found") => "파일 없음 ❌".to_string(),
            Some("load_error") => "로드 오류 ❌".to_string(),
            Some("dependency_missing") => "의존성 누락 ❌".to_string(),
            Some("offline") => "오프라인 ⚫".to_string(),
            Some(other) => other.to_string(),
            None => "Unknown".to_string(),
        }
    }

    /// Multi-line description for the model info notice.
    pub fn describe(&self) -> String {
        let mut out = format!(
            "🤖 현재 AI 모델 정보:\n📋 이름: {}\n📊 상태: {}\n📂 경로: {}\n🔧 타입: {}\n🎯 임베딩: {}",
            self.display_name(),
            self.status_label(),
            self.path.as_deref().unwrap_or("-"),
            self.model_type.as_deref().unwrap_or("-"),
            self.embedding_status
                .as_ref()
                .and_then(|e| e.status.as_deref())
                .unwrap_or("Unknown"),
        );

        if self.available_models.is_empty() {
            out.push_str("\n\n📁 models/ 디렉토리에 모델 파일이 없습니다.");
        } else {
            out.push_str("\n\n🗂️ 사용 가능한 모델:");
            for model in &self.available_models {
                out.push_str(&format!(
                    "\n• {} ({:.1}MB)",
                    model.name,
                    model.size_mb.unwrap_or(0.0)
                ));
            }
        }
        out
    }
}

/// `POST /recommend` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendRequest {
    pub user_id: String,
    pub limit: u32,
}

/// `POST /recommend` response body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecommendReply {
    #[serde(default)]
    pub recommendations: Vec<RemoteRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteRecommendation {
    pub question: String,
    #[serde(default)]
    pub score: f64,
}
