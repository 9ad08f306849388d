//! # Company App
//!
//! List and form view models for company master data, the route table and
//! the event loop that ties them to the remote resource.

pub mod app;
pub mod events;
pub mod messages;
pub mod navigation;
pub mod viewmodel;

pub use app::{CompanyApp, Screen};
pub use events::{AppEvent, Dispatch, EventSender, ViewId};
pub use navigation::Route;
pub use viewmodel::{FormState, FormViewModel, ListViewModel};
