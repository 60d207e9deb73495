//! HTTP-level tests for the NextDNS client against a mock server.

use gatesync_client::NextDnsClient;
use gatesync_core::{GateError, Rule, BLOCK_TARGET};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> NextDnsClient {
    NextDnsClient::builder("test-key", "abc123")
        .base_url(server.uri())
        .build()
}

#[tokio::test]
async fn list_denylist_parses_data_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profiles/abc123/denylist"))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"id": "ads.example.com", "active": true},
                {"id": "tracker.example.com", "active": false}
            ]
        })))
        .mount(&server)
        .await;

    let remote = client_for(&server).await.denylist().list().await.unwrap();
    assert_eq!(remote.len(), 2);
    assert_eq!(remote[0].id, "ads.example.com");
    assert_eq!(remote[0].domain, "ads.example.com");
    assert_eq!(remote[0].target, BLOCK_TARGET);
}

#[tokio::test]
async fn create_denylist_batch_posts_json_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/profiles/abc123/denylist"))
        .and(body_json(json!([
            {"id": "ads.example.com", "active": true},
            {"id": "tracker.example.com", "active": true}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let rules = vec![Rule::block("ads.example.com"), Rule::block("tracker.example.com")];
    client_for(&server)
        .await
        .denylist()
        .create_batch(&rules)
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_rewrite_hits_id_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/profiles/abc123/rewrites/rw_42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .await
        .rewrites()
        .delete("rw_42")
        .await
        .unwrap();
}

#[tokio::test]
async fn create_rewrite_posts_name_and_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/profiles/abc123/rewrites"))
        .and(body_json(json!({
            "name": "nas.lan.example",
            "content": "192.168.1.10"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let rule = Rule::rewrite("nas.lan.example", "192.168.1.10");
    client_for(&server)
        .await
        .rewrites()
        .create(&rule)
        .await
        .unwrap();
}

async fn error_for_status(status: u16) -> GateError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles/abc123/denylist"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    client_for(&server)
        .await
        .denylist()
        .list()
        .await
        .unwrap_err()
}

#[tokio::test]
async fn status_codes_map_to_error_variants() {
    assert!(error_for_status(401).await.is_auth_error());
    assert!(error_for_status(429).await.is_rate_limited());
    assert!(matches!(
        error_for_status(404).await,
        GateError::NotFound { .. }
    ));
    assert!(matches!(
        error_for_status(500).await,
        GateError::Api { code: 500, .. }
    ));
}

#[tokio::test]
async fn api_error_message_is_recovered_from_errors_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/profiles/abc123/rewrites"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"errors": [{"code": "duplicate"}]})),
        )
        .mount(&server)
        .await;

    let rule = Rule::rewrite("nas.lan.example", "192.168.1.10");
    let err = client_for(&server)
        .await
        .rewrites()
        .create(&rule)
        .await
        .unwrap_err();

    match err {
        GateError::Api { code, message } => {
            assert_eq!(code, 400);
            assert_eq!(message, "duplicate");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
