//! Status line state types.

use nori_core::backend::ModelInfo;

/// What the startup health probe found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Checking,
    Connected,
    /// Answered with a non-success status.
    NotReady,
    /// Could not be reached.
    Starting,
}

impl BackendStatus {
    pub fn label(self) -> &'static str {
        match self {
            BackendStatus::Checking => "확인 중",
            BackendStatus::Connected => "연결됨",
            BackendStatus::NotReady => "준비 중",
            BackendStatus::Starting => "연결 안 됨",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub backend_url: String,
    pub backend: BackendStatus,
    pub model: Option<ModelInfo>,
}

impl StatusLine {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    /// `name (status)` for the model segment.
    pub fn model_summary(&self) -> String {
        match &self.model {
            Some(info) => format!("{} ({})", info.display_name(), info.status_label()),
            None => "모델 정보 없음".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_summary() {
        let mut status = StatusLine::new("http://localhost:8000");
        assert_eq!(status.model_summary(), "모델 정보 없음");

        status.model = Some(ModelInfo::offline());
        assert_eq!(status.model_summary(), "Offline (오프라인 ⚫)");
    }
}
