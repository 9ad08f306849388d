//! Binary image attachments (logo, seal, signature)

use bytes::Bytes;
use std::path::Path;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    CompanyLogo,
    CompanySeal,
    AuthorizedSignature,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 3] = [
        AttachmentSlot::CompanyLogo,
        AttachmentSlot::CompanySeal,
        AttachmentSlot::AuthorizedSignature,
    ];

    /// Multipart part name
    pub fn wire_name(&self) -> &'static str {
        match self {
            AttachmentSlot::CompanyLogo => "companyLogo",
            AttachmentSlot::CompanySeal => "companySeal",
            AttachmentSlot::AuthorizedSignature => "authorizedSignature",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, guessing the content type from its extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| DomainError::InvalidAttachment(format!("not a file: {}", path.display())))?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| DomainError::InvalidAttachment(format!("{}: {}", path.display(), e)))?;

        let content_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self::new(file_name, content_type, bytes))
    }
}

/// One optional file per slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachments {
    pub company_logo: Option<Attachment>,
    pub company_seal: Option<Attachment>,
    pub authorized_signature: Option<Attachment>,
}

impl Attachments {
    fn slot_mut(&mut self, slot: AttachmentSlot) -> &mut Option<Attachment> {
        match slot {
            AttachmentSlot::CompanyLogo => &mut self.company_logo,
            AttachmentSlot::CompanySeal => &mut self.company_seal,
            AttachmentSlot::AuthorizedSignature => &mut self.authorized_signature,
        }
    }

    pub fn get(&self, slot: AttachmentSlot) -> Option<&Attachment> {
        match slot {
            AttachmentSlot::CompanyLogo => self.company_logo.as_ref(),
            AttachmentSlot::CompanySeal => self.company_seal.as_ref(),
            AttachmentSlot::AuthorizedSignature => self.authorized_signature.as_ref(),
        }
    }

    /// Replace the slot's file; `None` clears it
    pub fn set(&mut self, slot: AttachmentSlot, file: Option<Attachment>) {
        *self.slot_mut(slot) = file;
    }

    /// Set slots in part order
    pub fn iter(&self) -> impl Iterator<Item = (AttachmentSlot, &Attachment)> {
        AttachmentSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|file| (slot, file)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
