//! Integration tests for common Chargily workflows.
//!
//! Every test runs the real client against a local mock server.

use chargily::prelude::*;
use serde_json::{Value, json};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test_sk_integration";

fn client_for(server: &MockServer) -> ChargilyClient {
    client_with_timeout(server, Duration::from_secs(5))
}

fn client_with_timeout(server: &MockServer, timeout: Duration) -> ChargilyClient {
    let config = ChargilyConfig::builder(API_KEY)
        .test_mode()
        .base_url(server.uri())
        .timeout(timeout)
        .build()
        .unwrap();
    ChargilyClient::new(config).unwrap()
}

fn customer_json(id: &str) -> Value {
    json!({
        "id": id,
        "entity": "customer",
        "livemode": false,
        "name": "Amel Benali",
        "email": "amel@example.dz",
        "phone": "+213555000000",
        "address": {"country": "DZ", "state": "Alger", "address": "12 Rue Didouche Mourad"},
        "metadata": [],
        "created_at": 1703144000,
        "updated_at": 1703144000
    })
}

fn checkout_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "entity": "checkout",
        "livemode": false,
        "amount": 1000,
        "currency": "dzd",
        "fees": 0,
        "pass_fees_to_customer": false,
        "status": status,
        "locale": "en",
        "description": null,
        "success_url": "https://x.test/ok",
        "failure_url": null,
        "webhook_endpoint": null,
        "payment_method": null,
        "invoice_id": null,
        "customer_id": null,
        "payment_link_id": null,
        "metadata": null,
        "created_at": 1703144567,
        "updated_at": 1703144567,
        "shipping_address": null,
        "collect_shipping_address": false,
        "checkout_url": format!("https://pay.chargily.dz/test/checkouts/{}/pay", id)
    })
}

fn envelope(data: Vec<Value>, page: u32, per_page: u32) -> Value {
    json!({
        "livemode": false,
        "current_page": page,
        "data": data,
        "first_page_url": "https://pay.chargily.net/test/api/v2/customers?page=1",
        "last_page": 1,
        "last_page_url": "https://pay.chargily.net/test/api/v2/customers?page=1",
        "next_page_url": null,
        "path": "https://pay.chargily.net/test/api/v2/customers",
        "per_page": per_page,
        "prev_page_url": null,
        "total": 1,
        "links": [{"url": null, "label": "1", "active": true}]
    })
}

async fn mount_nothing_expected(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

// =============================================================================
// Checkout Validation Tests
// =============================================================================

#[tokio::test]
async fn test_checkout_with_amount_is_sent_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkouts"))
        .and(header("authorization", format!("Bearer {}", API_KEY).as_str()))
        .and(body_json(json!({
            "amount": 1000,
            "currency": "dzd",
            "success_url": "https://x.test/ok"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(checkout_json("ch_1", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let checkout = assert_ok!(
        client
            .create_checkout(&CreateCheckoutParams::with_amount(1000, "dzd", "https://x.test/ok"))
            .await
    );

    assert_eq!(checkout.id, "ch_1");
    assert_eq!(checkout.status, CheckoutStatus::Pending);
}

#[tokio::test]
async fn test_checkout_with_items_proceeds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkouts"))
        .and(body_json(json!({
            "items": [{"price": "01hhy9wjfcdjk2z8kqs7hn0tmy", "quantity": 2}],
            "success_url": "http://localhost:3000/done"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(checkout_json("ch_2", "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = CreateCheckoutParams::with_items(
        vec![CheckoutItemParams::new("01hhy9wjfcdjk2z8kqs7hn0tmy", 2)],
        "http://localhost:3000/done",
    );
    assert_ok!(client.create_checkout(&params).await);
}

#[tokio::test]
async fn test_invalid_checkouts_make_no_network_call() {
    let server = MockServer::start().await;
    mount_nothing_expected(&server).await;
    let client = client_for(&server);

    let ftp = CreateCheckoutParams {
        success_url: "ftp://x.test".into(),
        ..Default::default()
    };
    let err = assert_err!(client.create_checkout(&ftp).await);
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.field_errors().iter().any(|e| e.field == "success_url"));

    let mut both = CreateCheckoutParams::with_amount(1000, "dzd", "https://x.test/ok");
    both.items = Some(vec![CheckoutItemParams::new("price_1", 1)]);
    let err = assert_err!(client.create_checkout(&both).await);
    assert_eq!(err.field_errors()[0].constraint, "xor");

    let neither = CreateCheckoutParams {
        success_url: "https://x.test/ok".into(),
        ..Default::default()
    };
    let err = assert_err!(client.create_checkout(&neither).await);
    assert_eq!(err.field_errors()[0].constraint, "xor");
}

// =============================================================================
// Pagination Tests
// =============================================================================

#[tokio::test]
async fn test_list_defaults_to_first_page_of_ten() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("per_page", "10"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(vec![customer_json("c_1")], 1, 10)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = assert_ok!(client.list_customers(None).await);
    assert_eq!(list.len(), 1);
    assert_eq!(list.data[0].name, "Amel Benali");
    assert!(!list.has_next_page());
}

#[tokio::test]
async fn test_list_explicit_page_overrides_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/checkouts"))
        .and(query_param("per_page", "50"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![], 3, 50)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = assert_ok!(client.list_checkouts(Some(PageParams::new(3, 50))).await);
    assert!(list.is_empty());
    assert_eq!(list.current_page, 3);
}

#[tokio::test]
async fn test_list_envelope_round_trips() {
    let server = MockServer::start().await;
    let fixture = envelope(vec![customer_json("c_1")], 1, 10);
    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let list = assert_ok!(client.list_customers(None).await);
    assert_eq!(serde_json::to_value(&list).unwrap(), fixture);
}

#[tokio::test]
async fn test_nested_lists_page_too() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payment-links/pl_1/items"))
        .and(query_param("per_page", "10"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![], 2, 10)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.get_payment_link_items("pl_1", Some(PageParams::page(2))).await);
}

// =============================================================================
// Error Mapping Tests
// =============================================================================

async fn error_for(status: u16, body: Value) -> ChargilyError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/c_1"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_customer("c_1").await.unwrap_err()
}

#[tokio::test]
async fn test_status_codes_map_to_error_kinds() {
    let err = error_for(400, json!({"message": "The name field is required."})).await;
    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert!(err.to_string().contains("The name field is required."));

    assert_eq!(error_for(401, json!({})).await.kind(), ErrorKind::Unauthorized);
    assert_eq!(error_for(403, json!({})).await.kind(), ErrorKind::Unauthorized);
    assert_eq!(error_for(404, json!({})).await.kind(), ErrorKind::NotFound);

    let err = error_for(500, json!({"message": "Server Error"})).await;
    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_timeout_is_no_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"entity": "balance", "livemode": false, "wallets": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = client_with_timeout(&server, Duration::from_millis(200));
    let err = assert_err!(client.get_balance().await);
    assert_eq!(err.kind(), ErrorKind::NoResponse);
    assert_eq!(err.status_code(), None);
}

// =============================================================================
// Resource Tests
// =============================================================================

#[tokio::test]
async fn test_get_customer_is_stable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customers/c_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("c_1")))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = assert_ok!(client.get_customer("c_1").await);
    let second = assert_ok!(client.get_customer("c_1").await);
    assert_eq!(first, second);
    assert_eq!(first.address.unwrap().country, "DZ");
}

#[tokio::test]
async fn test_update_verbs() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/customers/c_1"))
        .and(body_json(json!({"email": "new@example.dz"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer_json("c_1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/prices/pr_1"))
        .and(body_json(json!({"metadata": {"tier": "gold"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pr_1", "entity": "price", "livemode": false, "amount": 5000,
            "currency": "dzd", "product_id": "p_1", "metadata": {"tier": "gold"},
            "created_at": 1703144000, "updated_at": 1703145000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = UpdateCustomerParams {
        email: Some("new@example.dz".into()),
        ..Default::default()
    };
    assert_ok!(client.update_customer("c_1", &update).await);

    let update = UpdatePriceParams {
        metadata: Some(json!({"tier": "gold"})),
    };
    let price = assert_ok!(client.update_price("pr_1", &update).await);
    assert_eq!(price.metadata()["tier"], "gold");
}

#[tokio::test]
async fn test_expire_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/checkouts/ch_1/expire"))
        .respond_with(ResponseTemplate::new(200).set_body_json(checkout_json("ch_1", "expired")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/products/p_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "livemode": false, "id": "p_1", "entity": "product", "deleted": true,
            "deleted_at": 1703150000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let checkout = assert_ok!(client.expire_checkout("ch_1").await);
    assert_eq!(checkout.status, CheckoutStatus::Other("expired".to_string()));
    assert_eq!(
        serde_json::to_value(&checkout).unwrap(),
        checkout_json("ch_1", "expired")
    );

    let deleted = assert_ok!(client.delete_product("p_1").await);
    assert!(deleted.deleted);
    assert_eq!(deleted.extra["deleted_at"], 1703150000);
}

#[tokio::test]
async fn test_identifier_is_a_single_path_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/checkouts/a%2Fb/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![], 1, 10)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(client.get_checkout_items("a/b", None).await);
}

#[tokio::test]
async fn test_service_trait_drives_the_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entity": "balance",
            "livemode": false,
            "wallets": [{"currency": "dzd", "balance": 7500, "ready_for_payout": 5000, "on_hold": 2500}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api: std::sync::Arc<dyn ChargilyApi> = std::sync::Arc::new(client_for(&server));
    let balance = assert_ok!(api.get_balance().await);
    assert_eq!(balance.wallet("dzd").unwrap().on_hold, 2500);
}
