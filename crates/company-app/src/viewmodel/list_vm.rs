//! Company List ViewModel
//!
//! Collection state, debounced search, delete confirmation and the staged
//! date filter.
//!
//! Every issued `list` call carries a sequence number. A response older than
//! the newest one already applied is dropped, so the displayed items always
//! belong to the latest issued query among those that have resolved.

use chrono::NaiveDate;
use company_core::{Company, CompanyRepository};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::events::{AppEvent, EventSender};
use crate::messages;
use crate::navigation::Route;

/// Inclusive date bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

pub struct ListViewModel {
    pub items: Vec<Company>,
    pub search_term: String,
    pub is_loading: bool,
    /// Company awaiting delete confirmation; `Some` means the dialog is open
    pub pending_delete: Option<Company>,
    pub is_deleting: bool,
    pub filter_draft: DateRange,
    /// Not forwarded to the resource client yet
    pub applied_filter: DateRange,
    /// Inline, non-fatal load error
    pub error: Option<String>,
    /// Blocking alert (delete failures)
    pub alert: Option<String>,
    repo: Arc<dyn CompanyRepository>,
    event_tx: EventSender,
    debounce: Duration,
    debounce_task: Option<JoinHandle<()>>,
    debounce_ticket: u64,
    next_seq: u64,
    applied_seq: u64,
    in_flight: usize,
}

impl ListViewModel {
    pub fn new(repo: Arc<dyn CompanyRepository>, event_tx: EventSender, debounce: Duration) -> Self {
        Self {
            items: Vec::new(),
            search_term: String::new(),
            is_loading: false,
            pending_delete: None,
            is_deleting: false,
            filter_draft: DateRange::default(),
            applied_filter: DateRange::default(),
            error: None,
            alert: None,
            repo,
            event_tx,
            debounce,
            debounce_task: None,
            debounce_ticket: 0,
            next_seq: 0,
            applied_seq: 0,
            in_flight: 0,
        }
    }

    pub fn on_mount(&mut self) {
        self.load(String::new());
    }

    /// Echo the term now, query after the debounce window stays quiet
    pub fn on_search_change(&mut self, term: impl Into<String>) {
        self.search_term = term.into();

        if let Some(task) = self.debounce_task.take() {
            task.abort();
        }

        self.debounce_ticket += 1;
        let ticket = self.debounce_ticket;
        let delay = self.debounce;
        let tx = self.event_tx.clone();

        self.debounce_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tx.send(AppEvent::SearchDebounced { ticket });
        }));
    }

    /// A debounced search is scheduled but has not fired yet
    pub fn has_pending_search(&self) -> bool {
        self.debounce_task.is_some()
    }

    pub fn refresh(&mut self) {
        self.load(self.search_term.clone());
    }

    fn load(&mut self, term: String) {
        self.next_seq += 1;
        self.in_flight += 1;
        self.is_loading = true;

        let seq = self.next_seq;
        let repo = Arc::clone(&self.repo);
        let tx = self.event_tx.clone();
        let search = Some(term).filter(|t| !t.is_empty());

        debug!("Loading companies seq={} search={:?}", seq, search);
        tokio::spawn(async move {
            let result = repo.list(search).await;
            tx.send(AppEvent::CompaniesLoaded { seq, result });
        });
    }

    /// Ignored while a delete is in flight; the open dialog belongs to it
    pub fn request_delete(&mut self, company: Company) {
        if self.is_deleting {
            return;
        }
        self.pending_delete = Some(company);
    }

    pub fn cancel_delete(&mut self) {
        if self.is_deleting {
            return;
        }
        self.pending_delete = None;
    }

    pub fn delete_confirmation(&self) -> Option<String> {
        self.pending_delete
            .as_ref()
            .map(|c| messages::delete_confirmation(c.name()))
    }

    pub fn confirm_delete(&mut self) {
        if self.is_deleting {
            return;
        }
        let Some(company) = self.pending_delete.clone() else {
            return;
        };
        let Some(id) = company.company_id.clone() else {
            warn!("Delete requested for a company without id: {}", company.name());
            self.pending_delete = None;
            self.alert = Some(messages::DELETE_FAILED.to_string());
            return;
        };

        self.is_deleting = true;
        let repo = Arc::clone(&self.repo);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = repo.delete(&id).await;
            tx.send(AppEvent::DeleteFinished { company, result });
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn set_filter_start(&mut self, date: Option<NaiveDate>) {
        self.filter_draft.start = date;
    }

    pub fn set_filter_end(&mut self, date: Option<NaiveDate>) {
        self.filter_draft.end = date;
    }

    /// Highlight state of the filter button
    pub fn has_active_filter(&self) -> bool {
        !self.filter_draft.is_empty()
    }

    pub fn apply_filter(&mut self) {
        self.applied_filter = self.filter_draft;
        self.refresh();
    }

    pub fn clear_filter(&mut self) {
        self.filter_draft = DateRange::default();
        self.applied_filter = DateRange::default();
        self.refresh();
    }

    pub fn add(&self) -> Route {
        Route::CompanyAdd
    }

    pub fn edit(&self, company: &Company) -> Option<Route> {
        company.company_id.clone().map(Route::CompanyEdit)
    }

    /// "No companies found" state
    pub fn is_empty(&self) -> bool {
        !self.is_loading && self.items.is_empty()
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Option<Route> {
        match event {
            AppEvent::SearchDebounced { ticket } => {
                if ticket == self.debounce_ticket {
                    self.debounce_task = None;
                    self.refresh();
                }
            }
            AppEvent::CompaniesLoaded { seq, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.is_loading = self.in_flight > 0;

                if seq < self.applied_seq {
                    debug!("Dropping stale list response seq={} (applied {})", seq, self.applied_seq);
                    return None;
                }
                self.applied_seq = seq;

                match result {
                    Ok(items) => {
                        debug!("Loaded {} companies (seq={})", items.len(), seq);
                        self.items = items;
                        self.error = None;
                    }
                    Err(e) => {
                        error!("Error loading companies: {}", e);
                        self.error = Some(messages::LIST_LOAD_FAILED.to_string());
                    }
                }
            }
            AppEvent::DeleteFinished { company, result } => {
                self.is_deleting = false;
                self.pending_delete = None;
                match result {
                    Ok(()) => {
                        info!("Deleted company {}", company.name());
                        self.refresh();
                    }
                    Err(e) => {
                        error!("Error deleting company {}: {}", company.name(), e);
                        self.alert = Some(messages::DELETE_FAILED.to_string());
                    }
                }
            }
            other => debug!("List view ignoring {:?}", other),
        }
        None
    }
}

impl Drop for ListViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.debounce_task.take() {
            task.abort();
        }
    }
}
