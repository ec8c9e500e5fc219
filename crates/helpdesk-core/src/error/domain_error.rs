//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Only the kinds the reaction rules and stores actually raise live
/// here; collaborator lookups that fail in the service layer carry the
/// service's own error type.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Emoji not in preset set: {0}")]
    InvalidEmoji(String),

    #[error("Comment reactions are disabled for this deployment")]
    ReactionsDisabled,

    #[error("Reaction already exists for this comment and user")]
    ReactionAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmoji(_) => "INVALID_EMOJI",
            Self::ReactionsDisabled => "FEATURE_DISABLED",
            Self::ReactionAlreadyExists => "REACTION_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidEmoji(_))
    }

    /// Check if this is an authorization or feature-gate error
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::ReactionsDisabled)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ReactionAlreadyExists)
    }
}
