//! Mock API tests for the pawhub-http client.
//!
//! These tests use wiremock to simulate the platform backend and test
//! the client's behavior without network access or real credentials.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pawhub_core::domain::PetQuery;
use pawhub_core::optimistic::{self, MutationLedger};
use pawhub_core::types::{AccessToken, ApiUrl, ResourceId, Species};
use pawhub_core::{Error, FeedLoader};
use pawhub_http::{ImageHost, PetPages, Session};

/// Helper to create an API URL from a mock server.
fn mock_api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(&format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn pet_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "name": name,
        "category": "dog",
        "shortDescription": "",
        "adopted": false
    })
}

fn pets_page(prefix: &str, count: usize, next: Option<u64>, total: u64) -> serde_json::Value {
    let data: Vec<_> = (0..count)
        .map(|n| pet_json(&format!("{prefix}{n}"), "Dog"))
        .collect();
    json!({ "data": data, "nextPage": next, "total": total })
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_bearer_attached_when_signed_in() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u1",
            "email": "alice@example.com",
            "role": "admin"
        })))
        .mount(&server)
        .await;

    let session = Session::with_token(mock_api_url(&server), AccessToken::new("test-token"));
    let user = session.current_user().await.unwrap();

    assert_eq!(user.email, "alice@example.com");
    assert!(user.is_admin());
}

#[tokio::test]
async fn test_anonymous_listing_sends_no_credential() {
    let server = MockServer::start().await;

    // The matcher set has no authorization header; wiremock would still
    // match if one were sent, so assert on the received request below.
    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pets_page("a", 1, None, 1)))
        .mount(&server)
        .await;

    let session = Session::anonymous(mock_api_url(&server));
    session.list_pets(&PetQuery::all(), None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_signed_in_operation_fails_fast_when_anonymous() {
    let server = MockServer::start().await;
    let session = Session::anonymous(mock_api_url(&server));

    let err = session.my_campaigns().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)));

    // Nothing reached the server.
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_list_pets_sends_filters_and_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pets"))
        .and(query_param("search", "husky"))
        .and(query_param("category", "dog"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pets_page("a", 2, None, 2)))
        .mount(&server)
        .await;

    let session = Session::anonymous(mock_api_url(&server));
    let query = PetQuery::category(Species::Dog).with_search("husky");
    let page = session
        .list_pets(&query, Some(&pawhub_core::PageToken::new("3")))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert!(page.is_last());
}

#[tokio::test]
async fn test_feed_accumulates_to_exhaustion() {
    let server = MockServer::start().await;

    // Page one: 9 dogs, next page 2.
    Mock::given(method("GET"))
        .and(path("/pets"))
        .and(query_param("category", "dog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pets_page("a", 9, Some(2), 18)))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // Page two: 9 more, no further pages.
    Mock::given(method("GET"))
        .and(path("/pets"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pets_page("b", 9, None, 18)))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::anonymous(mock_api_url(&server));
    let mut loader = FeedLoader::new(PetPages::new(session), PetQuery::category(Species::Dog));

    loader.load_first().await.unwrap();
    assert_eq!(loader.items().len(), 9);

    // Sentinel becomes visible: one more page, then exhaustion.
    assert_eq!(loader.notify_visible().await.unwrap(), Some(9));
    assert_eq!(loader.items().len(), 18);
    assert!(!loader.feed().has_more());
    assert_eq!(loader.feed().total(), Some(18));

    // Further visibility events issue no request (expect(1) above would
    // trip if another page-2 fetch went out).
    assert_eq!(loader.notify_visible().await.unwrap(), None);
    assert_eq!(loader.notify_visible().await.unwrap(), None);
}

#[tokio::test]
async fn test_failed_page_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "database unavailable"
        })))
        .mount(&server)
        .await;

    let session = Session::anonymous(mock_api_url(&server));
    let err = session.list_pets(&PetQuery::all(), None).await.unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 500);
            assert_eq!(api.message.as_deref(), Some("database unavailable"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ============================================================================
// Mutation Tests
// ============================================================================

#[tokio::test]
async fn test_refund_request_confirmed() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/donations/c1/refund"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "flagged" })))
        .mount(&server)
        .await;

    let session = Session::with_token(mock_api_url(&server), AccessToken::new("tok"));

    let mut donation: pawhub_core::Donation = serde_json::from_value(json!({
        "_id": "d1",
        "amount": 40.0,
        "refundRequested": false
    }))
    .unwrap();

    let campaign_id = ResourceId::new("c1").unwrap();
    let mut ledger = MutationLedger::new();

    // The flag flips immediately, and stays flipped after the server
    // accepts.
    optimistic::mutate(
        &mut ledger,
        &mut donation,
        optimistic::REFUND_REQUESTED,
        json!(true),
        || session.request_refund(&campaign_id),
    )
    .await
    .unwrap();

    assert!(donation.refund_requested);
    assert!(!ledger.is_pending(&donation.id, optimistic::REFUND_REQUESTED));
}

#[tokio::test]
async fn test_refund_request_rolls_back_on_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/donations/c1/refund"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "campaign already closed"
        })))
        .mount(&server)
        .await;

    let session = Session::with_token(mock_api_url(&server), AccessToken::new("tok"));

    let mut donation: pawhub_core::Donation = serde_json::from_value(json!({
        "_id": "d1",
        "amount": 40.0,
        "refundRequested": false
    }))
    .unwrap();

    let campaign_id = ResourceId::new("c1").unwrap();
    let mut ledger = MutationLedger::new();

    let err = optimistic::mutate(
        &mut ledger,
        &mut donation,
        optimistic::REFUND_REQUESTED,
        json!(true),
        || session.request_refund(&campaign_id),
    )
    .await
    .unwrap_err();

    // Rolled back, error surfaced for the user notification.
    assert!(!donation.refund_requested);
    assert!(err.to_string().contains("campaign already closed"));
}

#[tokio::test]
async fn test_pause_campaign_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/donations/c1/pause"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "c1",
            "petName": "Mochi",
            "maxAmount": 500.0,
            "lastDate": "2026-12-31T00:00:00Z",
            "isPaused": true
        })))
        .mount(&server)
        .await;

    let session = Session::with_token(mock_api_url(&server), AccessToken::new("tok"));
    let id = ResourceId::new("c1").unwrap();
    let campaign = session.pause_campaign(&id).await.unwrap();

    assert!(campaign.paused);
}

#[tokio::test]
async fn test_donate_sends_payment_token_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/donations/c1/donate"))
        .and(body_json(json!({
            "amount": 25.0,
            "paymentMethodToken": "pm_test_123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "c1",
            "petName": "Mochi",
            "maxAmount": 500.0,
            "currentAmount": 25.0,
            "lastDate": "2026-12-31T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let session = Session::with_token(mock_api_url(&server), AccessToken::new("tok"));
    let id = ResourceId::new("c1").unwrap();
    let campaign = session
        .donate(
            &id,
            &pawhub_http::DonateRequest {
                amount: 25.0,
                payment_method_token: "pm_test_123".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(campaign.current_amount, 25.0);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let session = Session::anonymous(mock_api_url(&server));
    let err = session.list_pets(&PetQuery::all(), None).await.unwrap_err();

    // Should handle non-JSON errors gracefully.
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_unauthorized_is_an_auth_flavored_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "token expired"
        })))
        .mount(&server)
        .await;

    let session = Session::with_token(mock_api_url(&server), AccessToken::new("stale"));
    let err = session.profile().await.unwrap_err();

    match err {
        Error::Api(api) => assert!(api.is_auth_error()),
        other => panic!("expected Api error, got {other:?}"),
    }
}

// ============================================================================
// Image Upload Tests
// ============================================================================

#[tokio::test]
async fn test_image_upload_returns_hosted_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/upload"))
        .and(query_param("key", "host-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "url": "https://images.example/abc.jpg" }
        })))
        .mount(&server)
        .await;

    let host = ImageHost::new(
        format!("http://127.0.0.1:{}/1/upload", server.address().port()),
        "host-key",
    )
    .unwrap();

    let url = host.upload(vec![0xFF, 0xD8, 0xFF], "pet.jpg").await.unwrap();
    assert_eq!(url, "https://images.example/abc.jpg");
}
