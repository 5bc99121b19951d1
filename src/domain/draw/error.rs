//! Draw service error taxonomy

use thiserror::Error;

use crate::domain::DomainError;

use super::engine::EngineError;
use super::validation::DrawRejection;

/// Failures surfaced by draw operations.
///
/// Rejections are expected, user-facing outcomes with stable keys; the
/// engine and storage variants are infrastructure failures.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error(transparent)]
    Rejected(#[from] DrawRejection),

    #[error("draw '{id}' not found")]
    NotFound { id: String },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Storage(#[from] DomainError),
}

impl DrawError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Stable message key for the response envelope
    pub fn key(&self) -> &'static str {
        match self {
            Self::Rejected(rejection) => rejection.key(),
            Self::NotFound { .. } => "DrawNotFound",
            Self::Engine(_) => "DrawFailed",
            Self::Storage(_) => "InternalError",
        }
    }
}
