//! Domain errors

use thiserror::Error;

use crate::domain::Field;

/// Client-side validation failure. Never reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Company Name is required")]
    NameRequired,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid support email format")]
    InvalidSupportEmail,

    #[error("Invalid billing email format")]
    InvalidBillingEmail,
}

impl ValidationError {
    /// The form field the error should be shown next to
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameRequired => Field::CompanyName,
            ValidationError::InvalidEmail => Field::CompanyEmailId,
            ValidationError::InvalidSupportEmail => Field::SupportEmail,
            ValidationError::InvalidBillingEmail => Field::BillingEmail,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Company not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server responded with {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid attachment: {0}")]
    InvalidAttachment(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl DomainError {
    /// Network failures, non-2xx responses and unreadable bodies
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::Transport(_) | DomainError::Http { .. } | DomainError::Decode(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }

    /// Message supplied by the remote service in its error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            DomainError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
