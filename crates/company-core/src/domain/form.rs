//! Editable company field state

use std::fmt;
use std::str::FromStr;

use crate::domain::company::Company;
use crate::error::{DomainError, ValidationError};
use crate::validation;

/// Scalar fields of a company, in submission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CompanyName,
    CompanyPhoneNumber,
    CompanyEmailId,
    SupportEmail,
    BillingEmail,
    CompanyAddress,
    Pincode,
    Website,
    GstNumber,
    PanNumber,
    BankName,
    BankAccountNumber,
    IfscCode,
    BranchName,
    AuthorizedSignatoryName,
    IsActive,
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::CompanyName,
        Field::CompanyPhoneNumber,
        Field::CompanyEmailId,
        Field::SupportEmail,
        Field::BillingEmail,
        Field::CompanyAddress,
        Field::Pincode,
        Field::Website,
        Field::GstNumber,
        Field::PanNumber,
        Field::BankName,
        Field::BankAccountNumber,
        Field::IfscCode,
        Field::BranchName,
        Field::AuthorizedSignatoryName,
        Field::IsActive,
    ];

    /// Name used for the multipart part and the JSON property
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::CompanyName => "companyName",
            Field::CompanyPhoneNumber => "companyPhoneNumber",
            Field::CompanyEmailId => "companyEmailId",
            Field::SupportEmail => "supportEmail",
            Field::BillingEmail => "billingEmail",
            Field::CompanyAddress => "companyAddress",
            Field::Pincode => "pincode",
            Field::Website => "website",
            Field::GstNumber => "gstNumber",
            Field::PanNumber => "panNumber",
            Field::BankName => "bankName",
            Field::BankAccountNumber => "bankAccountNumber",
            Field::IfscCode => "ifscCode",
            Field::BranchName => "branchName",
            Field::AuthorizedSignatoryName => "authorizedSignatoryName",
            Field::IsActive => "isActive",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

/// Value coming from an input control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(checked) => checked.to_string(),
        }
    }

    fn into_checked(self) -> bool {
        match self {
            FieldValue::Checked(checked) => checked,
            FieldValue::Text(text) => text.trim().eq_ignore_ascii_case("true"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyForm {
    pub company_name: String,
    pub company_phone_number: String,
    pub company_email_id: String,
    pub support_email: String,
    pub billing_email: String,
    pub company_address: String,
    pub pincode: String,
    pub website: String,
    pub gst_number: String,
    pub pan_number: String,
    pub bank_name: String,
    pub bank_account_number: String,
    pub ifsc_code: String,
    pub branch_name: String,
    pub authorized_signatory_name: String,
    pub is_active: bool,
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            company_phone_number: String::new(),
            company_email_id: String::new(),
            support_email: String::new(),
            billing_email: String::new(),
            company_address: String::new(),
            pincode: String::new(),
            website: String::new(),
            gst_number: String::new(),
            pan_number: String::new(),
            bank_name: String::new(),
            bank_account_number: String::new(),
            ifsc_code: String::new(),
            branch_name: String::new(),
            authorized_signatory_name: String::new(),
            is_active: true,
        }
    }
}

impl CompanyForm {
    /// Populate from a fetched record; missing values become empty strings
    pub fn from_company(company: &Company) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        Self {
            company_name: text(&company.company_name),
            company_phone_number: text(&company.company_phone_number),
            company_email_id: text(&company.company_email_id),
            support_email: text(&company.support_email),
            billing_email: text(&company.billing_email),
            company_address: text(&company.company_address),
            pincode: text(&company.pincode),
            website: text(&company.website),
            gst_number: text(&company.gst_number),
            pan_number: text(&company.pan_number),
            bank_name: text(&company.bank_name),
            bank_account_number: text(&company.bank_account_number),
            ifsc_code: text(&company.ifsc_code),
            branch_name: text(&company.branch_name),
            authorized_signatory_name: text(&company.authorized_signatory_name),
            is_active: company.is_active,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        Some(match field {
            Field::CompanyName => &mut self.company_name,
            Field::CompanyPhoneNumber => &mut self.company_phone_number,
            Field::CompanyEmailId => &mut self.company_email_id,
            Field::SupportEmail => &mut self.support_email,
            Field::BillingEmail => &mut self.billing_email,
            Field::CompanyAddress => &mut self.company_address,
            Field::Pincode => &mut self.pincode,
            Field::Website => &mut self.website,
            Field::GstNumber => &mut self.gst_number,
            Field::PanNumber => &mut self.pan_number,
            Field::BankName => &mut self.bank_name,
            Field::BankAccountNumber => &mut self.bank_account_number,
            Field::IfscCode => &mut self.ifsc_code,
            Field::BranchName => &mut self.branch_name,
            Field::AuthorizedSignatoryName => &mut self.authorized_signatory_name,
            Field::IsActive => return None,
        })
    }

    /// Boolean fields take the checked state, all others the text
    pub fn set(&mut self, field: Field, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.text_mut(field) {
            Some(slot) => *slot = value.into_text(),
            None => self.is_active = value.into_checked(),
        }
    }

    /// Current value rendered as it is submitted
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::CompanyName => self.company_name.clone(),
            Field::CompanyPhoneNumber => self.company_phone_number.clone(),
            Field::CompanyEmailId => self.company_email_id.clone(),
            Field::SupportEmail => self.support_email.clone(),
            Field::BillingEmail => self.billing_email.clone(),
            Field::CompanyAddress => self.company_address.clone(),
            Field::Pincode => self.pincode.clone(),
            Field::Website => self.website.clone(),
            Field::GstNumber => self.gst_number.clone(),
            Field::PanNumber => self.pan_number.clone(),
            Field::BankName => self.bank_name.clone(),
            Field::BankAccountNumber => self.bank_account_number.clone(),
            Field::IfscCode => self.ifsc_code.clone(),
            Field::BranchName => self.branch_name.clone(),
            Field::AuthorizedSignatoryName => self.authorized_signatory_name.clone(),
            Field::IsActive => self.is_active.to_string(),
        }
    }

    /// First violated rule only
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::validate_form(self)
    }

    /// All 16 scalar parts in submission order
    pub fn scalar_parts(&self) -> Vec<(&'static str, String)> {
        Field::ALL
            .iter()
            .map(|field| (field.wire_name(), self.get(*field)))
            .collect()
    }
}
