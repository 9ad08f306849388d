//! Application Events
//!
//! Results of background tasks travel back to the event loop through one
//! channel. Each event is stamped with the view that issued it so results
//! for a view that has since been navigated away from are dropped.

use company_core::{Company, DomainError};
use tokio::sync::mpsc;
use tracing::debug;

/// Identifies one mounted view; bumped on every navigation
pub type ViewId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Debounce window of the search box elapsed
    SearchDebounced { ticket: u64 },
    /// A `list` call resolved
    CompaniesLoaded {
        seq: u64,
        result: Result<Vec<Company>, DomainError>,
    },
    /// A `delete` call resolved
    DeleteFinished {
        company: Company,
        result: Result<(), DomainError>,
    },
    /// Edit-mode fetch resolved
    CompanyLoaded(Result<Company, DomainError>),
    /// `create` or `update` resolved
    SaveFinished(Result<Company, DomainError>),
    /// Post-save confirmation delay elapsed
    RedirectElapsed,
}

#[derive(Debug)]
pub struct Dispatch {
    pub view: ViewId,
    pub event: AppEvent,
}

/// Sender handed to a view model, bound to its view id
#[derive(Debug, Clone)]
pub struct EventSender {
    view: ViewId,
    tx: mpsc::UnboundedSender<Dispatch>,
}

impl EventSender {
    pub fn new(view: ViewId, tx: mpsc::UnboundedSender<Dispatch>) -> Self {
        Self { view, tx }
    }

    pub fn send(&self, event: AppEvent) {
        if self.tx.send(Dispatch { view: self.view, event }).is_err() {
            debug!("Event loop gone, dropping event for view {}", self.view);
        }
    }
}
