//! Company Form ViewModel
//!
//! State machine: `Loading` (edit only) -> `Ready` -> `Submitting` ->
//! `Success` | `Ready` with error. `Success` schedules the redirect back to
//! the list after the configured delay.

use company_core::{
    Attachment, AttachmentSlot, Attachments, CompanyForm, CompanyId, CompanyPayload,
    CompanyRepository, DomainError, Field, FieldValue, ValidationError,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::events::{AppEvent, EventSender};
use crate::messages;
use crate::navigation::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Loading,
    Ready,
    /// Edit target does not exist; only navigation away is possible
    Unavailable,
    Submitting,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CompanyId),
}

pub struct FormViewModel {
    pub mode: FormMode,
    pub state: FormState,
    pub form: CompanyForm,
    pub files: Attachments,
    pub error: Option<String>,
    pub success: Option<String>,
    repo: Arc<dyn CompanyRepository>,
    event_tx: EventSender,
    redirect_delay: Duration,
    redirect_task: Option<JoinHandle<()>>,
}

impl FormViewModel {
    pub fn create(repo: Arc<dyn CompanyRepository>, event_tx: EventSender, redirect_delay: Duration) -> Self {
        Self {
            mode: FormMode::Create,
            state: FormState::Ready,
            form: CompanyForm::default(),
            files: Attachments::default(),
            error: None,
            success: None,
            repo,
            event_tx,
            redirect_delay,
            redirect_task: None,
        }
    }

    /// Starts in `Loading` and fetches the record
    pub fn edit(
        repo: Arc<dyn CompanyRepository>,
        event_tx: EventSender,
        id: CompanyId,
        redirect_delay: Duration,
    ) -> Self {
        let mut vm = Self::create(repo, event_tx, redirect_delay);
        vm.mode = FormMode::Edit(id.clone());
        vm.load_for_edit(id);
        vm
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            messages::TITLE_EDIT
        } else {
            messages::TITLE_CREATE
        }
    }

    pub fn load_for_edit(&mut self, id: CompanyId) {
        self.state = FormState::Loading;
        let repo = Arc::clone(&self.repo);
        let tx = self.event_tx.clone();

        debug!("Loading company {} for edit", id);
        tokio::spawn(async move {
            let result = repo.get_by_id(&id).await;
            tx.send(AppEvent::CompanyLoaded(result));
        });
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<FieldValue>) {
        self.form.set(field, value);
    }

    pub fn set_file(&mut self, slot: AttachmentSlot, file: Option<Attachment>) {
        self.files.set(slot, file);
    }

    pub async fn set_file_from_path(
        &mut self,
        slot: AttachmentSlot,
        path: impl AsRef<Path>,
    ) -> Result<(), DomainError> {
        let file = Attachment::from_path(path).await?;
        self.files.set(slot, Some(file));
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.form.validate()
    }

    pub fn can_submit(&self) -> bool {
        self.state == FormState::Ready
    }

    pub fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }

        self.error = None;
        self.success = None;

        if let Err(e) = self.validate() {
            warn!("Company form rejected: {} ({})", e, e.field());
            self.error = Some(e.to_string());
            return;
        }

        self.state = FormState::Submitting;
        let payload = CompanyPayload::new(self.form.clone(), self.files.clone());
        let mode = self.mode.clone();
        let repo = Arc::clone(&self.repo);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = match mode {
                FormMode::Create => repo.create(payload).await,
                FormMode::Edit(id) => repo.update(&id, payload).await,
            };
            tx.send(AppEvent::SaveFinished(result));
        });
    }

    /// Discard edits and go back to the list
    pub fn cancel(&mut self) -> Route {
        if let Some(task) = self.redirect_task.take() {
            task.abort();
        }
        Route::CompanyList
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn schedule_redirect(&mut self) {
        let delay = self.redirect_delay;
        let tx = self.event_tx.clone();
        self.redirect_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tx.send(AppEvent::RedirectElapsed);
        }));
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Option<Route> {
        match event {
            AppEvent::CompanyLoaded(result) => {
                if self.state != FormState::Loading {
                    return None;
                }
                match result {
                    Ok(company) => {
                        self.form = CompanyForm::from_company(&company);
                        self.files = Attachments::default();
                        self.state = FormState::Ready;
                    }
                    Err(e) => {
                        error!("Error loading company: {}", e);
                        self.error = Some(messages::FORM_LOAD_FAILED.to_string());
                        self.state = if e.is_not_found() {
                            FormState::Unavailable
                        } else {
                            FormState::Ready
                        };
                    }
                }
            }
            AppEvent::SaveFinished(result) => match result {
                Ok(company) => {
                    info!("Company saved: {:?}", company.company_id);
                    self.state = FormState::Success;
                    self.success = Some(
                        if self.is_edit() {
                            messages::UPDATED
                        } else {
                            messages::CREATED
                        }
                        .to_string(),
                    );
                    self.schedule_redirect();
                }
                Err(e) => {
                    error!("Error saving company: {}", e);
                    self.state = FormState::Ready;
                    self.error = Some(
                        e.server_message()
                            .unwrap_or(messages::SAVE_FAILED)
                            .to_string(),
                    );
                }
            },
            AppEvent::RedirectElapsed => {
                self.redirect_task = None;
                if self.state == FormState::Success {
                    return Some(Route::CompanyList);
                }
            }
            other => debug!("Form view ignoring {:?}", other),
        }
        None
    }
}

impl Drop for FormViewModel {
    fn drop(&mut self) {
        if let Some(task) = self.redirect_task.take() {
            task.abort();
        }
    }
}
