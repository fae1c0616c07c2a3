//! Playground backend: wire types, client, errors.

mod client;
mod error;
mod types;

pub use client::{BackendClient, BackendConfig, NORI_USER_AGENT};
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use types::{
    AvailableModel, ChatReply, ChatRequest, EmbeddingStatus, HealthStatus, ModelHealth, ModelInfo,
    ModelInfoEnvelope, RecommendReply, RecommendRequest, RemoteRecommendation,
};
