//! HTTP client for the remote company resource
//!
//! Every call is a single outbound request. Failures are mapped onto
//! [`DomainError`] and returned as-is: no retries, no caching.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use company_core::{Company, CompanyId, CompanyPayload, CompanyRepository, DomainError};
use company_shared::config::ApiSettings;

const COMPANY_RESOURCE: &str = "company";
const SEARCH_PARAM: &str = "search";

/// Error body shape returned by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[derive(Clone)]
pub struct HttpCompanyClient {
    client: Client,
    base_url: Url,
}

impl HttpCompanyClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, DomainError> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            DomainError::Transport(format!("Invalid base url {}: {}", settings.base_url, e))
        })?;

        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// `{base}/company` or `{base}/company/{id}`, id percent-encoded
    fn endpoint(&self, id: Option<&CompanyId>) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                DomainError::Transport(format!("Base url cannot hold a path: {}", self.base_url))
            })?;
            segments.pop_if_empty().push(COMPANY_RESOURCE);
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        warn!("Company API returned {}: {:?}", status, message);
        Err(DomainError::Http {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DomainError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| DomainError::Decode(e.to_string()))
    }

    fn multipart(payload: CompanyPayload) -> Result<Form, DomainError> {
        let mut form = Form::new();
        for (name, value) in payload.scalar_parts() {
            form = form.text(name, value);
        }

        for (slot, file) in payload.file_parts() {
            let part = Part::bytes(file.bytes.to_vec())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)
                .map_err(|e| {
                    DomainError::InvalidAttachment(format!("{}: {}", file.file_name, e))
                })?;
            form = form.part(slot.wire_name(), part);
        }

        Ok(form)
    }
}

#[async_trait]
impl CompanyRepository for HttpCompanyClient {
    async fn list(&self, search: Option<String>) -> Result<Vec<Company>, DomainError> {
        let mut url = self.endpoint(None)?;
        if let Some(term) = search.as_deref().filter(|t| !t.is_empty()) {
            url.query_pairs_mut().append_pair(SEARCH_PARAM, term);
        }

        debug!("GET {}", url);
        let response = self.send(self.client.get(url)).await?;
        Self::decode(response).await
    }

    async fn get_by_id(&self, id: &CompanyId) -> Result<Company, DomainError> {
        let url = self.endpoint(Some(id))?;

        debug!("GET {}", url);
        let response = match self.send(self.client.get(url)).await {
            Err(DomainError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Err(DomainError::NotFound(id.to_string()));
            }
            other => other?,
        };
        Self::decode(response).await
    }

    async fn create(&self, payload: CompanyPayload) -> Result<Company, DomainError> {
        let url = self.endpoint(None)?;
        let form = Self::multipart(payload)?;

        debug!("POST {}", url);
        let response = self.send(self.client.post(url).multipart(form)).await?;
        let created: Company = Self::decode(response).await?;
        info!("Company created: {:?}", created.company_id);
        Ok(created)
    }

    async fn update(&self, id: &CompanyId, payload: CompanyPayload) -> Result<Company, DomainError> {
        let url = self.endpoint(Some(id))?;
        let form = Self::multipart(payload)?;

        debug!("PUT {}", url);
        let response = self.send(self.client.put(url).multipart(form)).await?;
        let updated = Self::decode(response).await?;
        info!("Company updated: {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: &CompanyId) -> Result<(), DomainError> {
        let url = self.endpoint(Some(id))?;

        debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        info!("Company deleted: {}", id);
        Ok(())
    }
}
