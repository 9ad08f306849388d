use company_client::HttpCompanyClient;
use company_core::{
    Attachment, AttachmentSlot, Attachments, CompanyForm, CompanyId, CompanyPayload,
    CompanyRepository, DomainError, Field,
};
use company_shared::config::ApiSettings;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpCompanyClient {
    HttpCompanyClient::new(&ApiSettings {
        base_url: format!("{}/api", server.uri()),
        timeout_seconds: 5,
    })
    .unwrap()
}

fn acme_form() -> CompanyForm {
    let mut form = CompanyForm::default();
    form.set(Field::CompanyName, "Acme");
    form.set(Field::CompanyEmailId, "info@acme.com");
    form.set(Field::GstNumber, "27AAACA1234A1Z5");
    form
}

#[tokio::test]
async fn list_without_term_sends_no_search_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company"))
        .and(query_param_is_missing("search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"companyId": 1, "companyName": "Acme", "isActive": true},
            {"companyId": 2, "companyName": "Globex", "isActive": false}
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let all = client.list(None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].name(), "Globex");
    assert!(!all[1].is_active);

    // Empty term behaves like no term
    assert_eq!(client.list(Some(String::new())).await.unwrap().len(), 2);
}

#[tokio::test]
async fn list_passes_search_term() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company"))
        .and(query_param("search", "acme corp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"companyId": "c-1", "companyName": "Acme Corp"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let found = client_for(&server)
        .list(Some("acme corp".into()))
        .await
        .unwrap();
    assert_eq!(found[0].company_id, Some(CompanyId::new("c-1")));
}

#[tokio::test]
async fn get_by_id_maps_404_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_by_id(&CompanyId::new("99"))
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::NotFound("99".into()));
}

#[tokio::test]
async fn non_success_carries_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company/5"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Database unavailable"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_by_id(&CompanyId::new("5"))
        .await
        .unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.server_message(), Some("Database unavailable"));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/company"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).list(None).await.unwrap_err();
    assert!(matches!(err, DomainError::Decode(_)));
}

#[tokio::test]
async fn create_posts_multipart_with_scalars_and_files() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/company"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "companyId": 11,
            "companyName": "Acme",
            "companyEmailId": "info@acme.com",
            "gstNumber": "27AAACA1234A1Z5",
            "isActive": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut files = Attachments::default();
    files.set(
        AttachmentSlot::CompanyLogo,
        Some(Attachment::new("logo.png", "image/png", b"\x89PNG".to_vec())),
    );

    let created = client_for(&server)
        .create(CompanyPayload::new(acme_form(), files))
        .await
        .unwrap();
    assert_eq!(created.company_id, Some(CompanyId::new("11")));

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    for field in Field::ALL {
        assert!(
            body.contains(&format!("name=\"{}\"", field.wire_name())),
            "missing part {}",
            field
        );
    }
    assert!(body.contains("name=\"companyLogo\"; filename=\"logo.png\""));
    assert!(!body.contains("name=\"companySeal\""));
}

#[tokio::test]
async fn update_puts_to_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/company/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "companyId": 7,
            "companyName": "Acme",
            "isActive": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = acme_form();
    form.set(Field::IsActive, false);
    let updated = client_for(&server)
        .update(&CompanyId::new("7"), form.into())
        .await
        .unwrap();
    assert!(!updated.is_active);

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"isActive\"\r\n\r\nfalse"));
}

#[tokio::test]
async fn delete_ignores_body_and_reports_failures() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/company/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/company/8"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"message": "In use"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete(&CompanyId::new("7")).await.unwrap();

    let err = client.delete(&CompanyId::new("8")).await.unwrap_err();
    assert_eq!(
        err,
        DomainError::Http {
            status: 409,
            message: Some("In use".into())
        }
    );
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let client = HttpCompanyClient::new(&ApiSettings {
        base_url: "http://127.0.0.1:1/api".into(),
        timeout_seconds: 2,
    })
    .unwrap();

    let err = client.list(None).await.unwrap_err();
    assert!(matches!(err, DomainError::Transport(_)));
}
