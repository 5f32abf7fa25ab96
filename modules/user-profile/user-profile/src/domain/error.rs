use thiserror::Error;
use user_profile_sdk::UserProfileError;

use crate::domain::provider::IdentityKind;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User profile not found: {id}")]
    ProfileNotFound { id: i64 },

    #[error("No user profile with address '{address}'")]
    AddressNotFound { address: String },

    #[error("{kind} identity '{identity}' is already bound")]
    IdentityAlreadyBound { kind: IdentityKind, identity: String },

    #[error("User profile {user_id} already has a {kind} binding")]
    UserAlreadyBound { kind: IdentityKind, user_id: i64 },

    #[error("Address '{address}' is already taken")]
    AddressTaken { address: String },

    /// Storage rejected an insert on a unique key. The service resolves this
    /// into one of the `*AlreadyBound` variants before returning.
    #[error("{kind} binding conflict: {message}")]
    BindingConflict { kind: IdentityKind, message: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn profile_not_found(id: i64) -> Self {
        Self::ProfileNotFound { id }
    }

    #[must_use]
    pub fn address_not_found(address: impl Into<String>) -> Self {
        Self::AddressNotFound {
            address: address.into(),
        }
    }

    #[must_use]
    pub fn identity_already_bound(kind: IdentityKind, identity: impl Into<String>) -> Self {
        Self::IdentityAlreadyBound {
            kind,
            identity: identity.into(),
        }
    }

    #[must_use]
    pub fn user_already_bound(kind: IdentityKind, user_id: i64) -> Self {
        Self::UserAlreadyBound { kind, user_id }
    }

    #[must_use]
    pub fn address_taken(address: impl Into<String>) -> Self {
        Self::AddressTaken {
            address: address.into(),
        }
    }

    #[must_use]
    pub fn binding_conflict(kind: IdentityKind, message: impl Into<String>) -> Self {
        Self::BindingConflict {
            kind,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for UserProfileError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::ProfileNotFound { id } => UserProfileError::not_found(id),
            DomainError::AddressNotFound { address } => {
                UserProfileError::AddressNotFound { address }
            }
            DomainError::IdentityAlreadyBound { kind, identity } => {
                UserProfileError::identity_already_bound(kind.name(), identity)
            }
            DomainError::UserAlreadyBound { kind, user_id } => {
                UserProfileError::user_already_bound(kind.name(), user_id)
            }
            DomainError::AddressTaken { address } => UserProfileError::AddressTaken { address },
            DomainError::Validation { field, message } => {
                UserProfileError::validation(format!("{field}: {message}"))
            }
            DomainError::BindingConflict { kind, message } => {
                UserProfileError::persistence(format!("{kind} binding conflict: {message}"))
            }
            DomainError::Database { message } => UserProfileError::persistence(message),
        }
    }
}
