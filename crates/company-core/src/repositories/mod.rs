//! Repository traits (ports)

pub mod company_repository;

pub use company_repository::CompanyRepository;

#[cfg(any(test, feature = "mock"))]
pub use company_repository::MockCompanyRepository;
