//! # Company Core
//!
//! Domain entities, validation and the repository port for company master data.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod validation;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, ValidationError};
pub use repositories::CompanyRepository;

#[cfg(any(test, feature = "mock"))]
pub use repositories::MockCompanyRepository;
