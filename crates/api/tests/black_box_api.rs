use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use reqwest::StatusCode;
use serde_json::json;

use stockroom_api::config::Config;
use stockroom_auth::Claims;
use stockroom_core::DocumentId;

const JWT_SECRET: &str = "test-secret";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the same router as prod, bound to an ephemeral port. No
        // STRIPE_SECRET_KEY means the in-process fake gateway.
        let config = Config {
            listen_addr: "127.0.0.1:0".to_string(),
            jwt_secret: JWT_SECRET.to_string(),
            stripe_secret_key: None,
        };
        let app = stockroom_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mint_jwt(email: &str, role: Option<&str>, ttl: ChronoDuration) -> String {
    let now = Utc::now();
    let claims = Claims {
        email: email.to_string(),
        role: role.map(str::to_string),
        iat: (now - ChronoDuration::minutes(1)).timestamp(),
        exp: (now + ttl).timestamp(),
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("failed to encode jwt")
}

fn fresh_jwt(email: &str) -> String {
    mint_jwt(email, None, ChronoDuration::minutes(10))
}

/// Upsert a user through the public endpoint and return the token the API
/// issued for it.
async fn register_user(
    client: &reqwest::Client,
    base_url: &str,
    email: &str,
    body: serde_json::Value,
) -> String {
    let res = client
        .put(format!("{}/user/{}", base_url, email))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn liveness_endpoint_needs_no_auth() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(&srv.base_url).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("warehouse"));
}

#[tokio::test]
async fn missing_bearer_token_is_401_and_mutates_nothing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/users", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // A gated delete without a token must not touch the record.
    let id = DocumentId::new();
    let res = client
        .put(format!("{}/management/{}", srv.base_url, id))
        .json(&json!({ "quantity": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/management/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .get(format!("{}/management/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn expired_or_malformed_token_is_403_and_mutates_nothing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let expired = mint_jwt("a@x.com", None, ChronoDuration::minutes(-10));
    let res = client
        .get(format!("{}/users", srv.base_url))
        .bearer_auth(&expired)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(format!("{}/users", srv.base_url))
        .bearer_auth("definitely.not.a.jwt")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Same short-circuit on a mutating route.
    let id = DocumentId::new();
    let res = client
        .put(format!("{}/management/{}", srv.base_url, id))
        .json(&json!({ "quantity": 7 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/management/{}", srv.base_url, id))
        .bearer_auth(&expired)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(format!("{}/management/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn owner_scoped_read_rejects_other_principals() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (email, name) in [("a@x.com", "forklift"), ("a@x.com", "rack"), ("b@x.com", "bin")] {
        let res = client
            .post(format!("{}/item", srv.base_url))
            .json(&json!({ "email": email, "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let token_b = fresh_jwt("b@x.com");
    let res = client
        .get(format!("{}/item?email=a@x.com", srv.base_url))
        .bearer_auth(&token_b)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let token_a = fresh_jwt("a@x.com");
    let res = client
        .get(format!("{}/item?email=a@x.com", srv.base_url))
        .bearer_auth(&token_a)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let items: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i["email"] == "a@x.com"));

    // No target email at all fails the owner check rather than widening
    // the query.
    let res = client
        .get(format!("{}/item", srv.base_url))
        .bearer_auth(&token_a)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn management_quantity_round_trip() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let id = DocumentId::new();
    let res = client
        .put(format!("{}/management/{}", srv.base_url, id))
        .json(&json!({ "quantity": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["upserted_id"].is_string());

    let res = client
        .get(format!("{}/management/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let record: serde_json::Value = res.json().await.unwrap();
    assert_eq!(record["quantity"], json!(5));

    // Malformed ids are rejected, not crashed on.
    let res = client
        .get(format!("{}/management/not-an-id", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_missing_item_is_idempotent() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let id = DocumentId::new();
    for _ in 0..2 {
        let res = client
            .delete(format!("{}/item/{}", srv.base_url, id))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["deleted_count"], json!(0));
    }
}

#[tokio::test]
async fn admin_gate_blocks_non_admins_and_passes_admins() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin_token =
        register_user(&client, &srv.base_url, "admin@x.com", json!({ "role": "admin" })).await;
    let user_token = register_user(&client, &srv.base_url, "bob@x.com", json!({})).await;

    let res = client
        .get(format!("{}/allOrders", srv.base_url))
        .bearer_auth(&user_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(format!("{}/allOrders", srv.base_url))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    // A valid token for an email with no user record fails the gate with
    // 404, never silent admission.
    let ghost_token = fresh_jwt("ghost@x.com");
    let res = client
        .get(format!("{}/allOrders", srv.base_url))
        .bearer_auth(&ghost_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_promotion_end_to_end() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let admin_token =
        register_user(&client, &srv.base_url, "admin@x.com", json!({ "role": "admin" })).await;
    register_user(&client, &srv.base_url, "bob@x.com", json!({})).await;
    let carol_token = register_user(&client, &srv.base_url, "carol@x.com", json!({})).await;

    // Non-admin cannot promote.
    let res = client
        .put(format!("{}/user/admin/bob@x.com", srv.base_url))
        .bearer_auth(&carol_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(format!("{}/admin/bob@x.com", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["admin"], json!(false));

    // Admin can.
    let res = client
        .put(format!("{}/user/admin/bob@x.com", srv.base_url))
        .bearer_auth(&admin_token)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["matched_count"], json!(1));

    let res = client
        .get(format!("{}/admin/bob@x.com", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["admin"], json!(true));
}

#[tokio::test]
async fn paying_an_order_records_payment_and_flags_order() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({ "email": "a@x.com", "item": "forklift", "qty": 2 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: serde_json::Value = res.json().await.unwrap();
    let id = created["inserted_id"].as_str().unwrap().to_string();

    let token = fresh_jwt("a@x.com");
    let res = client
        .patch(format!("{}/orders/{}", srv.base_url, id))
        .bearer_auth(&token)
        .json(&json!({ "transaction_id": "tx_123", "amount": 1999 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["order"]["matched_count"], json!(1));
    assert!(body["payment"]["inserted_id"].is_string());

    let res = client
        .get(format!("{}/orders/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    let order: serde_json::Value = res.json().await.unwrap();
    assert_eq!(order["paid"], json!(true));
    assert_eq!(order["transaction_id"], json!("tx_123"));
}

#[tokio::test]
async fn payment_intent_requires_auth_and_valid_price() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/create-payment-intent", srv.base_url))
        .json(&json!({ "price": 19.99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let token = fresh_jwt("a@x.com");
    let res = client
        .post(format!("{}/create-payment-intent", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "price": 19.99 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["clientSecret"].as_str().unwrap().contains("secret"));

    let res = client
        .post(format!("{}/create-payment-intent", srv.base_url))
        .bearer_auth(&token)
        .json(&json!({ "price": -1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
