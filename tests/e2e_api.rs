//! Full-stack scenario test.
//!
//! Needs a reachable MongoDB deployment, so it is ignored by default:
//!
//! ```text
//! MONGODB_URI=mongodb://localhost:27017 cargo test -- --ignored
//! ```

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use bistro_backend::{
    api::{create_router, AppState},
    auth::JwtHandler,
    config::Config,
    store::Store,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const TEST_SECRET: &str = "e2e-test-secret-key";

async fn app() -> Router {
    let config = Config {
        port: 0,
        access_token_secret: TEST_SECRET.to_string(),
        mongodb_uri: std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        db_name: "BistroBossTest".to_string(),
        jwt_expiration_hours: 1,
    };

    let store = Store::connect(&config).await.expect("MongoDB reachable");
    let state = AppState {
        store: Arc::new(store),
        jwt_handler: Arc::new(JwtHandler::new(config.access_token_secret.clone(), 1)),
    };
    create_router(state)
}

async fn send(app: &Router, method: Method, path: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn register_then_check_admin_then_promote() {
    let app = app().await;

    // Unique identity per run; users are never deleted by this system
    let email = format!(
        "diner-{}@x.com",
        chrono::Utc::now().timestamp_micros()
    );

    // Issue a token for the claims body
    let (status, body) = send(
        &app,
        Method::POST,
        "/jwt",
        None,
        Some(json!({ "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    // Listing users is admin-gated: no token -> 401, fresh user -> 403
    let (status, _) = send(&app, Method::GET, "/users", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Register the user
    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "email": email, "name": "E2E Diner" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let user_id = body["insertedId"].as_str().unwrap().to_string();

    // Re-registering the same email is a message, not an error
    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        None,
        Some(json!({ "email": email })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "user already exists");

    // Freshly created users are not admin
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/users/admin/{}", email),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admin"], false);

    let (status, _) = send(&app, Method::GET, "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Asking about someone else's email reports false, not an error
    let (status, body) = send(
        &app,
        Method::GET,
        "/users/admin/other@x.com",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admin"], false);

    // Promote via the unguarded PATCH, then the same token clears the gate
    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/users/admin/{}", user_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 1);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/users/admin/{}", email),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admin"], true);

    let (status, _) = send(&app, Method::GET, "/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    // Deleting a menu item that does not exist reports zero, not an error
    let missing_id = mongodb::bson::oid::ObjectId::new().to_hex();
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/menu/{}", missing_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 0);
}

#[tokio::test]
#[ignore = "requires a running MongoDB deployment"]
async fn cart_round_trip_for_owner() {
    let app = app().await;

    let email = format!("cart-{}@x.com", chrono::Utc::now().timestamp_micros());
    let (_, body) = send(
        &app,
        Method::POST,
        "/jwt",
        None,
        Some(json!({ "email": email })),
    )
    .await;
    let token = body["token"].as_str().unwrap().to_string();

    // Cart writes are open
    let (status, body) = send(
        &app,
        Method::POST,
        "/carts",
        None,
        Some(json!({
            "menuItemId": "652a1f0000000000000000aa",
            "email": email,
            "name": "Roast Duck",
            "price": 14.5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let item_id = body["insertedId"].as_str().unwrap().to_string();

    // Reads are owner-scoped
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/carts?email={}", email),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Roast Duck");

    // Delete by identifier, then the cart is empty again
    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/carts/{}", item_id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);

    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/carts?email={}", email),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
