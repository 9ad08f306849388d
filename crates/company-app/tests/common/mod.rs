#![allow(dead_code)]

use async_trait::async_trait;
use company_app::CompanyApp;
use company_core::{Company, CompanyForm, CompanyId, CompanyPayload, CompanyRepository, DomainError};
use company_shared::config::UiSettings;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(Option<String>),
    Get(String),
    Create(CompanyPayload),
    Update(String, CompanyPayload),
    Delete(String),
}

#[derive(Default)]
struct State {
    companies: BTreeMap<u64, Company>,
    next_id: u64,
    calls: Vec<Call>,
    list_latency: HashMap<String, Duration>,
    fail_delete: bool,
    fail_save: Option<DomainError>,
    fail_get: Option<DomainError>,
}

/// In-memory company service with scripted latency and failures
#[derive(Clone, Default)]
pub struct FakeRepository {
    state: Arc<Mutex<State>>,
}

impl FakeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_companies(names: &[&str]) -> Self {
        let repo = Self::new();
        for name in names {
            let mut form = CompanyForm::default();
            form.company_name = name.to_string();
            repo.insert(&form);
        }
        repo
    }

    pub fn insert(&self, form: &CompanyForm) -> CompanyId {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.companies.insert(id, company_from_form(id, form));
        CompanyId::new(id.to_string())
    }

    /// Delay `list` calls for a given term ("" for the unfiltered query)
    pub fn set_list_latency(&self, term: &str, latency: Duration) {
        self.state
            .lock()
            .unwrap()
            .list_latency
            .insert(term.to_string(), latency);
    }

    pub fn fail_deletes(&self) {
        self.state.lock().unwrap().fail_delete = true;
    }

    pub fn fail_saves_with(&self, error: DomainError) {
        self.state.lock().unwrap().fail_save = Some(error);
    }

    pub fn clear_save_failure(&self) {
        self.state.lock().unwrap().fail_save = None;
    }

    pub fn fail_gets_with(&self, error: DomainError) {
        self.state.lock().unwrap().fail_get = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn list_calls(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::List(term) => Some(term),
                _ => None,
            })
            .collect()
    }

    pub fn stored(&self, id: &CompanyId) -> Option<Company> {
        let key: u64 = id.as_str().parse().ok()?;
        self.state.lock().unwrap().companies.get(&key).cloned()
    }

    fn record(&self, call: Call) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn key(id: &CompanyId) -> Result<u64, DomainError> {
        id.as_str()
            .parse()
            .map_err(|_| DomainError::NotFound(id.to_string()))
    }
}

pub fn company_from_form(id: u64, form: &CompanyForm) -> Company {
    let text = |value: &str| Some(value.to_string());
    Company {
        company_id: Some(CompanyId::new(id.to_string())),
        company_name: text(&form.company_name),
        company_phone_number: text(&form.company_phone_number),
        company_email_id: text(&form.company_email_id),
        support_email: text(&form.support_email),
        billing_email: text(&form.billing_email),
        company_address: text(&form.company_address),
        pincode: text(&form.pincode),
        website: text(&form.website),
        gst_number: text(&form.gst_number),
        pan_number: text(&form.pan_number),
        bank_name: text(&form.bank_name),
        bank_account_number: text(&form.bank_account_number),
        ifsc_code: text(&form.ifsc_code),
        branch_name: text(&form.branch_name),
        authorized_signatory_name: text(&form.authorized_signatory_name),
        is_active: form.is_active,
    }
}

fn matches_term(company: &Company, term: &str) -> bool {
    let term = term.to_lowercase();
    [&company.company_name, &company.gst_number, &company.pan_number]
        .iter()
        .any(|v| v.as_deref().unwrap_or_default().to_lowercase().contains(&term))
}

#[async_trait]
impl CompanyRepository for FakeRepository {
    async fn list(&self, search: Option<String>) -> Result<Vec<Company>, DomainError> {
        self.record(Call::List(search.clone()));
        let term = search.unwrap_or_default();
        let latency = self.state.lock().unwrap().list_latency.get(&term).copied();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        let state = self.state.lock().unwrap();
        Ok(state
            .companies
            .values()
            .filter(|c| term.is_empty() || matches_term(c, &term))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &CompanyId) -> Result<Company, DomainError> {
        self.record(Call::Get(id.to_string()));
        let state = self.state.lock().unwrap();
        if let Some(err) = &state.fail_get {
            return Err(err.clone());
        }
        let key = Self::key(id)?;
        state
            .companies
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }

    async fn create(&self, payload: CompanyPayload) -> Result<Company, DomainError> {
        self.record(Call::Create(payload.clone()));
        if let Some(err) = self.state.lock().unwrap().fail_save.clone() {
            return Err(err);
        }
        let id = self.insert(&payload.form);
        Ok(self.stored(&id).expect("just inserted"))
    }

    async fn update(&self, id: &CompanyId, payload: CompanyPayload) -> Result<Company, DomainError> {
        self.record(Call::Update(id.to_string(), payload.clone()));
        let mut state = self.state.lock().unwrap();
        if let Some(err) = &state.fail_save {
            return Err(err.clone());
        }
        let key = Self::key(id)?;
        if !state.companies.contains_key(&key) {
            return Err(DomainError::NotFound(id.to_string()));
        }
        let company = company_from_form(key, &payload.form);
        state.companies.insert(key, company.clone());
        Ok(company)
    }

    async fn delete(&self, id: &CompanyId) -> Result<(), DomainError> {
        self.record(Call::Delete(id.to_string()));
        let mut state = self.state.lock().unwrap();
        if state.fail_delete {
            return Err(DomainError::Transport("connection reset".into()));
        }
        let key = Self::key(id)?;
        state.companies.remove(&key);
        Ok(())
    }
}

pub fn ui_settings() -> UiSettings {
    UiSettings {
        search_debounce_ms: 300,
        redirect_delay_ms: 1500,
    }
}

pub fn app_with(repo: Arc<dyn CompanyRepository>) -> CompanyApp {
    CompanyApp::new(repo, ui_settings())
}

/// Advance paused time in 10ms steps, applying events after each step
pub async fn drive(app: &mut CompanyApp, duration: Duration) {
    let step = Duration::from_millis(10);
    let mut elapsed = Duration::ZERO;
    tokio::task::yield_now().await;
    app.process_events();
    while elapsed < duration {
        tokio::time::sleep(step).await;
        app.process_events();
        elapsed += step;
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
