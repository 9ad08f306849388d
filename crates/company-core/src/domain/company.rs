//! Company entity as served by the remote resource

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier assigned by the remote service.
///
/// Services in the wild return either numeric or string keys, both are
/// accepted and kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CompanyId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CompanyId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for CompanyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => CompanyId(n.to_string()),
            RawId::Text(s) => CompanyId(s),
        })
    }
}

fn default_active() -> bool {
    true
}

/// `null` is treated like a missing flag
fn active_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_active))
}

/// Company record. Attachments are write-only and never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_phone_number: Option<String>,
    #[serde(default)]
    pub company_email_id: Option<String>,
    #[serde(default)]
    pub support_email: Option<String>,
    #[serde(default)]
    pub billing_email: Option<String>,
    #[serde(default)]
    pub company_address: Option<String>,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub website: Option<String>,

    // Tax
    #[serde(default)]
    pub gst_number: Option<String>,
    #[serde(default)]
    pub pan_number: Option<String>,

    // Bank
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_account_number: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub branch_name: Option<String>,

    #[serde(default)]
    pub authorized_signatory_name: Option<String>,
    #[serde(default = "default_active", deserialize_with = "active_or_default")]
    pub is_active: bool,
}

impl Default for Company {
    fn default() -> Self {
        Self {
            company_id: None,
            company_name: None,
            company_phone_number: None,
            company_email_id: None,
            support_email: None,
            billing_email: None,
            company_address: None,
            pincode: None,
            website: None,
            gst_number: None,
            pan_number: None,
            bank_name: None,
            bank_account_number: None,
            ifsc_code: None,
            branch_name: None,
            authorized_signatory_name: None,
            is_active: true,
        }
    }
}

impl Company {
    pub fn name(&self) -> &str {
        self.company_name.as_deref().unwrap_or_default()
    }

    /// Table cell text: the value, or "-" when missing or empty
    pub fn display_or_dash(value: Option<&str>) -> &str {
        match value {
            Some(v) if !v.is_empty() => v,
            _ => "-",
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }
}
