//! Domain entities

pub mod attachment;
pub mod company;
pub mod form;
pub mod payload;

pub use attachment::{Attachment, AttachmentSlot, Attachments};
pub use company::{Company, CompanyId};
pub use form::{CompanyForm, Field, FieldValue};
pub use payload::CompanyPayload;
