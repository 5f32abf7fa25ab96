//! Public error types for the `user-profile` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `UserProfileApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserProfileError {
    /// Profile with the specified ID does not exist or was soft-deleted.
    #[error("User profile not found: {id}")]
    NotFound { id: i64 },

    /// No live profile uses the given address.
    #[error("No user profile with address '{address}'")]
    AddressNotFound { address: String },

    /// The external identity is already linked to a profile.
    #[error("{provider} identity '{identity}' is already bound")]
    IdentityAlreadyBound { provider: String, identity: String },

    /// The profile already has a binding for this provider.
    #[error("User profile {user_id} already has a {provider} binding")]
    UserAlreadyBound { provider: String, user_id: i64 },

    /// Another live profile uses this address.
    #[error("Address '{address}' is already taken")]
    AddressTaken { address: String },

    /// Validation error with the provided data.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The underlying storage failed.
    #[error("Persistence failure: {message}")]
    PersistenceFailure { message: String },
}

impl UserProfileError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Create an `IdentityAlreadyBound` error.
    #[must_use]
    pub fn identity_already_bound(
        provider: impl Into<String>,
        identity: impl Into<String>,
    ) -> Self {
        Self::IdentityAlreadyBound {
            provider: provider.into(),
            identity: identity.into(),
        }
    }

    /// Create a `UserAlreadyBound` error.
    #[must_use]
    pub fn user_already_bound(provider: impl Into<String>, user_id: i64) -> Self {
        Self::UserAlreadyBound {
            provider: provider.into(),
            user_id,
        }
    }

    /// Create a Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a `PersistenceFailure` error.
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::PersistenceFailure {
            message: message.into(),
        }
    }
}
