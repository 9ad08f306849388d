//! Company resource port

use async_trait::async_trait;

use crate::domain::{Company, CompanyId, CompanyPayload};
use crate::error::DomainError;

/// Remote company resource. One outbound call per invocation, no retries,
/// no caching.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// `None` or an empty term returns the unfiltered collection
    async fn list(&self, search: Option<String>) -> Result<Vec<Company>, DomainError>;
    async fn get_by_id(&self, id: &CompanyId) -> Result<Company, DomainError>;
    async fn create(&self, payload: CompanyPayload) -> Result<Company, DomainError>;
    async fn update(&self, id: &CompanyId, payload: CompanyPayload) -> Result<Company, DomainError>;
    async fn delete(&self, id: &CompanyId) -> Result<(), DomainError>;
}
