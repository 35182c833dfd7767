// Integration tests for `XiqClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use xiq_api::models::CcgPayload;
use xiq_api::{Error, TransportConfig, XiqClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, XiqClient) {
    let server = MockServer::start().await;
    let client = XiqClient::with_token(
        &server.uri(),
        SecretString::from("t0k3n"),
        &TransportConfig::default(),
    )
    .expect("client should build");
    (server, client)
}

// ── Auth ────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_installs_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "admin@example.com", "password": "hunter2"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "fresh-token"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/account/external"))
        .and(header("Authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = XiqClient::login(
        &server.uri(),
        "admin@example.com",
        &SecretString::from("hunter2"),
        &TransportConfig::default(),
    )
    .await
    .expect("login should succeed");

    let accounts = client.external_accounts().await.expect("listing should succeed");
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn login_without_token_in_response_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"expires_in": 86400})))
        .mount(&server)
        .await;

    let result = XiqClient::login(
        &server.uri(),
        "admin@example.com",
        &SecretString::from("hunter2"),
        &TransportConfig::default(),
    )
    .await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication, got: {:?}",
        result.err()
    );
}

#[tokio::test]
async fn login_rejected_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error_message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let result = XiqClient::login(
        &server.uri(),
        "admin@example.com",
        &SecretString::from("wrong"),
        &TransportConfig::default(),
    )
    .await;

    match result {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn switch_account_replaces_bearer_token() {
    let (server, mut client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/account/:switch"))
        .and(query_param("id", "42"))
        .and(header("Authorization", "Bearer t0k3n"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"access_token": "tenant-token"})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/account/external"))
        .and(header("Authorization", "Bearer tenant-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    client.switch_account(42).await.expect("switch should succeed");
    client
        .external_accounts()
        .await
        .expect("call with the replacement token should succeed");
}

#[tokio::test]
async fn switch_account_without_token_fails() {
    let (server, mut client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/account/:switch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = client.switch_account(42).await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication, got: {:?}",
        result.err()
    );
}

// ── Devices & radios ────────────────────────────────────────────────

#[tokio::test]
async fn devices_page_parses_listing() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [
            { "id": 101, "hostname": "ap-lobby", "device_function": "AP" },
            { "id": 102, "hostname": "sw-core", "device_function": "Switch" },
        ],
        "total_pages": 3
    });

    Mock::given(method("GET"))
        .and(path("/devices"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client.devices_page(1, 50, false).await.expect("listing should parse");

    assert_eq!(page.total_pages, 3);
    assert_eq!(page.data.len(), 2);
    assert!(page.data[0].is_ap());
    assert!(!page.data[1].is_ap());
}

#[tokio::test]
async fn devices_page_simulated_adds_device_type_filter() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .and(query_param("deviceTypes", "SIMULATED"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [], "total_pages": 1})),
        )
        .mount(&server)
        .await;

    client
        .devices_page(1, 50, true)
        .await
        .expect("simulated listing should succeed");
}

#[tokio::test]
async fn radio_information_joins_device_ids() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [{
            "device_id": 101,
            "radios": [{
                "name": "wifi0",
                "wlans": [{ "ssid": "guest", "bssid": "aa:bb:cc:dd:ee:01" }]
            }]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/devices/radio-information"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .and(query_param("deviceIds", "101,102,103"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client
        .radio_information(1, 50, &[101, 102, 103])
        .await
        .expect("radio info should parse");

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].radios[0].wlans[0].ssid, "guest");
}

// ── CCGs ────────────────────────────────────────────────────────────

#[tokio::test]
async fn ccgs_page_parses_cursor_fields() {
    let (server, client) = setup().await;

    let body = json!({
        "data": [
            { "id": 7, "name": "guest", "description": "lobby APs", "device_ids": [101, 102] },
        ],
        "total_pages": 4,
        "page": 2
    });

    Mock::given(method("GET"))
        .and(path("/ccgs"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client.ccgs_page(2, 50).await.expect("listing should parse");

    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.data[0].device_ids, vec![101, 102]);
}

#[tokio::test]
async fn create_ccg_posts_full_payload() {
    let (server, client) = setup().await;

    let expected = json!({
        "name": "lab",
        "description": "group for SSID lab",
        "device_ids": [201, 202]
    });

    Mock::given(method("POST"))
        .and(path("/ccgs"))
        .and(body_json(&expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "name": "lab",
            "description": "group for SSID lab",
            "device_ids": [201, 202]
        })))
        .mount(&server)
        .await;

    let created = client
        .create_ccg(&CcgPayload {
            name: "lab".into(),
            description: "group for SSID lab".into(),
            device_ids: vec![201, 202],
        })
        .await
        .expect("create should succeed");

    assert_eq!(created.id, 9);
    assert_eq!(created.name, "lab");
}

#[tokio::test]
async fn update_ccg_puts_to_group_path() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/ccgs/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "guest",
            "description": "lobby APs",
            "device_ids": [101, 103]
        })))
        .mount(&server)
        .await;

    let updated = client
        .update_ccg(
            7,
            &CcgPayload {
                name: "guest".into(),
                description: "lobby APs".into(),
                device_ids: vec![101, 103],
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.device_ids, vec![101, 103]);
}

// ── Response contract ───────────────────────────────────────────────

#[tokio::test]
async fn non_2xx_with_error_message_is_surfaced() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ccgs"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error_message": "limit out of range"})),
        )
        .mount(&server)
        .await;

    match client.ccgs_page(1, 50).await {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "limit out of range");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_without_body_falls_back_to_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.devices_page(1, 50, false).await;

    assert_eq!(result.err().and_then(|e| e.status()), Some(500));
}

#[tokio::test]
async fn unparsable_body_is_a_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let result = client.devices_page(1, 50, false).await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization, got: {:?}",
        result.err()
    );
}

#[tokio::test]
async fn status_204_violates_the_contract() {
    // The contract is exactly 200 or 201; an empty 204 is treated as a
    // failure, not a success with no payload.
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result = client.devices_page(1, 50, false).await;

    assert_eq!(result.err().and_then(|e| e.status()), Some(204));
}
