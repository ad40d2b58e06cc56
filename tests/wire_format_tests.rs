//! Integration tests for the wire format of both API generations.
//!
//! Every test runs the real client against a local mock server and checks
//! what actually reached the server.

use octadesk_api::clients::{FilterOperator, SortDirection};
use octadesk_api::rest::SearchParams;
use octadesk_api::{
    AgentEmail, ApiError, ApiGeneration, ApiKey, BaseUrl, HttpMethod, InvalidRequestError,
    OctadeskClient, OctadeskConfig, Request, ResponseMetadata,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn legacy_client(server: &MockServer) -> OctadeskClient {
    let config = OctadeskConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_key(ApiKey::new("legacy-token").unwrap())
        .build()
        .unwrap();
    OctadeskClient::new(config).unwrap()
}

fn current_client(server: &MockServer) -> OctadeskClient {
    let config = OctadeskConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .api_key(ApiKey::new("current-key").unwrap())
        .agent_email(AgentEmail::new("agent@example.com").unwrap())
        .generation(ApiGeneration::Current)
        .build()
        .unwrap();
    OctadeskClient::new(config).unwrap()
}

// ============================================================================
// Current API
// ============================================================================

#[tokio::test]
async fn test_current_search_sends_bracketed_filters_and_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(header("X-API-KEY", "current-key"))
        .and(header("octa-agent-email", "agent@example.com"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = current_client(&server);
    let params = SearchParams::new().filter("email", FilterOperator::Eq, "a@b.com");
    client.contacts().search(&params).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("filters[0][property]=email&filters[0][operator]=eq&filters[0][value]=a@b.com&page=1&limit=20")
    );
}

#[tokio::test]
async fn test_current_search_sends_sort_between_filters_and_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = current_client(&server);
    let params = SearchParams::new()
        .filter("status", FilterOperator::Ne, "closed")
        .sort("number", SortDirection::Desc)
        .page(2)
        .limit(50);
    client.tickets().search(&params).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("filters[0][property]=status&filters[0][operator]=ne&filters[0][value]=closed&sort[property]=number&sort[direction]=desc&page=2&limit=50")
    );
}

#[tokio::test]
async fn test_current_requester_alias_is_rewritten() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickets"))
        .and(query_param("filters[0][property]", "requester.id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = current_client(&server);
    let params = SearchParams::new().filter("idRequester", FilterOperator::Eq, "r-1");
    client.tickets().search(&params).await.unwrap();
}

#[tokio::test]
async fn test_current_metadata_reads_total_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Total-Items", "42")
                .insert_header("X-Total-Pages", "3")
                .insert_header("search-id", "ignored")
                .set_body_json(json!([{"id": "c1"}])),
        )
        .mount(&server)
        .await;

    let client = current_client(&server);
    let response = client.contacts().search(&SearchParams::new()).await.unwrap();

    assert_eq!(
        response.metadata(),
        ResponseMetadata {
            total_items: Some(42),
            total_pages: Some(3),
            search_id: None,
        }
    );
    assert_eq!(response.body, json!([{"id": "c1"}]));
}

// ============================================================================
// Legacy API
// ============================================================================

#[tokio::test]
async fn test_legacy_search_sends_encoded_pairs_and_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(header("Authorization", "Bearer legacy-token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let params = SearchParams::new().filter("email", FilterOperator::Eq, "a@b.com");
    client.contacts().search(&params).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=1&take=20&email=a%40b.com"));
}

#[tokio::test]
async fn test_legacy_operators_become_value_prefixes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickets/search"))
        .and(query_param("number", ">100"))
        .and(query_param("status", "!closed"))
        .and(query_param("sortBy", "number"))
        .and(query_param("sortDirection", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let params = SearchParams::new()
        .filter("number", FilterOperator::Gt, 100)
        .filter("status", FilterOperator::Ne, "closed")
        .sort("number", SortDirection::Asc);
    client.tickets().search(&params).await.unwrap();
}

#[tokio::test]
async fn test_legacy_metadata_reads_count_pages_and_search_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickets/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("total-count", "7")
                .insert_header("total-pages", "1")
                .insert_header("search-id", "s-123")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let response = client.tickets().search(&SearchParams::new()).await.unwrap();

    assert_eq!(response.total_items(), Some(7));
    assert_eq!(response.total_pages(), Some(1));
    assert_eq!(response.search_id(), Some("s-123"));
}

#[tokio::test]
async fn test_legacy_metadata_is_empty_without_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/persons/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc"})))
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let response = client.contacts().get_by_id("abc").await.unwrap();

    assert_eq!(response.metadata(), ResponseMetadata::default());
}

// ============================================================================
// Responses and errors
// ============================================================================

#[tokio::test]
async fn test_non_success_status_becomes_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/persons/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not found"})))
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let error = client.contacts().get_by_id("missing").await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    match error {
        ApiError::Response(e) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.body, json!({"message": "not found"}));
            assert!(e.message.contains("not found"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_plain_text_body_is_kept_as_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/check"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let client = current_client(&server);
    let response = client.authentication().check_api_key().await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!("OK"));
}

#[tokio::test]
async fn test_empty_body_becomes_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/tickets/15"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let response = client
        .tickets()
        .update(15, &json!({"subject": "Printer"}))
        .await
        .unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = current_client(&server);
    let params: SearchParams = serde_json::from_value(json!({
        "filters": [{"property": "email", "operator": "like", "value": "a@b.com"}]
    }))
    .unwrap();
    let error = client.contacts().search(&params).await.unwrap_err();

    assert!(error.is_configuration_error());
    assert!(matches!(
        error,
        ApiError::InvalidRequest(InvalidRequestError::InvalidFilterOperator { index: 0, .. })
    ));
}

#[tokio::test]
async fn test_caller_header_overrides_generation_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/persons"))
        .and(header("Accept", "text/csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("id\n1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let request = Request::builder(HttpMethod::Get, "/persons")
        .header("accept", "text/csv")
        .build()
        .unwrap();
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.body, json!("id\n1"));
}

#[tokio::test]
async fn test_requests_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/persons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = legacy_client(&server);
    let first = Request::builder(HttpMethod::Get, "/persons")
        .filter("email", FilterOperator::Eq, "a@b.com")
        .header("X-Trace", "1")
        .build()
        .unwrap();
    let second = Request::builder(HttpMethod::Get, "/persons").build().unwrap();

    client.send(&first).await.unwrap();
    client.send(&second).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("email=a%40b.com")
    );
    assert_eq!(requests[1].url.query(), None);
}

#[tokio::test]
async fn test_unsendable_caller_header_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = Request::builder(HttpMethod::Get, "/custom-fields/1")
        .header("App SubDomain", "acme")
        .build()
        .unwrap_err();

    assert!(error.is_configuration_error());
    assert!(matches!(
        error,
        ApiError::InvalidRequest(InvalidRequestError::InvalidHeader { ref name })
            if name == "App SubDomain"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
