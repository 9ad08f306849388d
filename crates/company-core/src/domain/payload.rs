//! Multipart submission payload

use crate::domain::attachment::{Attachment, AttachmentSlot, Attachments};
use crate::domain::form::CompanyForm;

/// Scalar fields plus any set attachments, sent as one multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyPayload {
    pub form: CompanyForm,
    pub attachments: Attachments,
}

impl CompanyPayload {
    pub fn new(form: CompanyForm, attachments: Attachments) -> Self {
        Self { form, attachments }
    }

    pub fn scalar_parts(&self) -> Vec<(&'static str, String)> {
        self.form.scalar_parts()
    }

    pub fn file_parts(&self) -> impl Iterator<Item = (AttachmentSlot, &Attachment)> {
        self.attachments.iter()
    }
}

impl From<CompanyForm> for CompanyPayload {
    fn from(form: CompanyForm) -> Self {
        Self::new(form, Attachments::default())
    }
}
