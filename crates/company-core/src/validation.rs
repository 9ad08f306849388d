//! Client-side form validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::CompanyForm;
use crate::error::ValidationError;

/// Basic `local@domain.tld` shape, no whitespace and a single `@`
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

fn check_optional_email(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if !value.is_empty() && !is_valid_email(value) {
        return Err(error);
    }
    Ok(())
}

/// Short-circuits on the first violated rule: name, company email, support
/// email, billing email.
pub fn validate_form(form: &CompanyForm) -> Result<(), ValidationError> {
    if form.company_name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    check_optional_email(&form.company_email_id, ValidationError::InvalidEmail)?;
    check_optional_email(&form.support_email, ValidationError::InvalidSupportEmail)?;
    check_optional_email(&form.billing_email, ValidationError::InvalidBillingEmail)?;
    Ok(())
}
