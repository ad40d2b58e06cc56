//! Integration tests for the resource clients.
//!
//! These tests verify that each resource picks the endpoint of the configured
//! API generation and sends its payload in the expected shape.

use octadesk_api::clients::InvalidRequestError;
use octadesk_api::rest::resources::{PersonType, TicketStatus};
use octadesk_api::{
    AgentEmail, ApiError, ApiGeneration, ApiKey, BaseUrl, OctadeskClient, OctadeskConfig,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, generation: ApiGeneration) -> OctadeskClient {
    let config = OctadeskConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_key(ApiKey::new("token").unwrap())
        .agent_email(AgentEmail::new("agent@example.com").unwrap())
        .generation(generation)
        .build()
        .unwrap();
    OctadeskClient::new(config).unwrap()
}

// ============================================================================
// Contacts
// ============================================================================

#[tokio::test]
async fn test_contacts_create_posts_json_per_generation() {
    let server = MockServer::start().await;
    let fields = json!({"name": "Ana", "email": "ana@example.com", "type": PersonType::Customer});

    Mock::given(method("POST"))
        .and(path("/persons"))
        .and(body_json(json!({"name": "Ana", "email": "ana@example.com", "type": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "p1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "c1"})))
        .expect(1)
        .mount(&server)
        .await;

    let legacy = client_for(&server, ApiGeneration::Legacy);
    let response = legacy.contacts().create(&fields).await.unwrap();
    assert_eq!(response.code, 201);
    assert_eq!(response.body["id"], "p1");

    let current = client_for(&server, ApiGeneration::Current);
    let response = current.contacts().create(&fields).await.unwrap();
    assert_eq!(response.body["id"], "c1");
}

#[tokio::test]
async fn test_contacts_patch_is_unsupported_on_legacy() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Legacy);
    let error = client
        .contacts()
        .patch("abc", &json!({"name": "Ana"}))
        .await
        .unwrap_err();

    assert!(error.is_configuration_error());
    match error {
        ApiError::InvalidRequest(InvalidRequestError::UnsupportedOperation {
            resource,
            operation,
            generation,
        }) => {
            assert_eq!(resource, "Contacts");
            assert_eq!(operation, "patch");
            assert_eq!(generation, ApiGeneration::Legacy);
        }
        other => panic!("expected an unsupported operation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_contacts_patch_on_current() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/contacts/abc"))
        .and(body_json(json!({"name": "Ana"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Current);
    client
        .contacts()
        .patch("abc", &json!({"name": "Ana"}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_contacts_get_by_email_filters_on_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/persons"))
        .and(query_param("email", "ana@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("filters[0][property]", "email"))
        .and(query_param("filters[0][value]", "ana@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    for generation in [ApiGeneration::Legacy, ApiGeneration::Current] {
        let client = client_for(&server, generation);
        client
            .contacts()
            .get_by_email("ana@example.com")
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_contacts_get_by_phone_number_on_legacy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/persons/filter"))
        .and(query_param("phoneContacts.countryCode", "55"))
        .and(query_param("phoneContacts.number", "11999990000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Legacy);
    client
        .contacts()
        .get_by_phone_number("55", "11999990000")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_contacts_agents_sends_keyword_detail_and_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/persons/agents"))
        .and(query_param("keywork", "ana"))
        .and(query_param("detailed", "1"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Legacy);
    client.contacts().agents(Some("ana"), 2, true).await.unwrap();
}

#[tokio::test]
async fn test_contacts_agents_without_detail_sends_empty_flags() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/persons/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Legacy);
    client.contacts().agents(None, 1, false).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=1&keywork=&detailed="));
}

#[tokio::test]
async fn test_contacts_update_avatar_url_sends_form() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/persons/abc"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("email=ana%40example.com"))
        .and(body_string_contains("thumbUrl=https%3A%2F%2Fcdn.example.com%2Fa.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Legacy);
    client
        .contacts()
        .update_avatar_url("abc", "ana@example.com", "https://cdn.example.com/a.png")
        .await
        .unwrap();
}

// ============================================================================
// Tickets
// ============================================================================

#[tokio::test]
async fn test_tickets_create_and_interactions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tickets"))
        .and(body_json(json!({"summary": "Printer", "status": "novo"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"number": 15})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tickets/15/interactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "i1"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Legacy);
    let tickets = client.tickets();

    let created = tickets
        .create(&json!({"summary": "Printer", "status": TicketStatus::New}))
        .await
        .unwrap();
    let number = created.body["number"].as_u64().unwrap();

    let interactions = tickets.interactions(number).await.unwrap();
    assert_eq!(interactions.body, json!([{"id": "i1"}]));
}

#[tokio::test]
async fn test_tickets_get_by_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickets/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"number": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Current);
    let response = client.tickets().get_by_number(42).await.unwrap();
    assert_eq!(response.body["number"], 42);
}

// ============================================================================
// Chat and authentication
// ============================================================================

#[tokio::test]
async fn test_chat_send_template_and_get_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/send-template"))
        .and(body_json(json!({"template": "welcome"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "chat-1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chat/chat-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "chat-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Current);
    let sent = client
        .chat()
        .send_template(&json!({"template": "welcome"}))
        .await
        .unwrap();
    let id = sent.body["id"].as_str().unwrap();

    client.chat().get_by_id(id).await.unwrap();
}

#[tokio::test]
async fn test_check_api_key_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .and(header("X-API-KEY", "token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, ApiGeneration::Current);
    let error = client.authentication().check_api_key().await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    assert!(!error.is_configuration_error());
}
