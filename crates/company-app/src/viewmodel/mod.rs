//! ViewModel Module
//!
//! State management layer with event-driven architecture.

pub mod form_vm;
pub mod list_vm;

pub use form_vm::{FormMode, FormState, FormViewModel};
pub use list_vm::{DateRange, ListViewModel};
