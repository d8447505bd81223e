use futures::executor::block_on;

use super::*;
use crate::net::interceptor::AuthInterceptor;
use crate::net::transport::Method;
use crate::net::types::{Gender, OrderStatus};
use crate::state::session::{Identity, SessionStore};
use crate::testing::{MockTransport, RecordingNavigator};

struct Harness {
    api: ApiClient<AuthInterceptor<MockTransport, RecordingNavigator>>,
    session: SessionStore,
    transport: MockTransport,
    nav: RecordingNavigator,
}

fn harness(at: &str) -> Harness {
    let transport = MockTransport::new();
    let nav = RecordingNavigator::at(at);
    let session = SessionStore::new();
    session.write(Some(Identity::new("u1", "alice", "a@x.com", "Alice A")));
    let http = AuthInterceptor::new(transport.clone(), session.clone(), nav.clone());
    Harness { api: ApiClient::new(http, BffConfig::default()), session, transport, nav }
}

fn order_json(id: i64, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "orderNumber": format!("ORD-{id}"),
        "status": status,
        "createdBy": "u1",
        "creationTime": "2024-01-15T10:30:00"
    })
}

// =============================================================
// Profile
// =============================================================

#[test]
fn get_profile_returns_none_on_404() {
    let h = harness("/profile");
    h.transport.respond(404, "");
    assert_eq!(block_on(h.api.get_profile()), Ok(None));
    assert_eq!(h.transport.last_request().url, "/bff/api/profile");
}

#[test]
fn get_profile_parses_body() {
    let h = harness("/profile");
    h.transport.respond_json(
        200,
        &serde_json::json!({
            "id": 3,
            "userId": "u1",
            "firstName": "Alice",
            "lastName": "A",
            "email": "a@x.com",
            "gender": "FEMALE",
            "age": 30
        }),
    );
    let profile = block_on(h.api.get_profile()).unwrap().unwrap();
    assert_eq!(profile.user_id, "u1");
    assert_eq!(profile.gender, Gender::Female);
}

#[test]
fn get_profile_propagates_server_errors() {
    let h = harness("/profile");
    h.transport.respond(500, "");
    assert_eq!(block_on(h.api.get_profile()), Err(ApiError::Status { status: 500, message: None }));
}

#[test]
fn create_and_delete_profile_use_expected_methods() {
    let h = harness("/profile");
    let draft = NewProfile { user_id: "u1".to_owned(), age: 25, ..NewProfile::default() };
    h.transport.respond_json(
        201,
        &serde_json::json!({
            "id": 1, "userId": "u1", "firstName": "", "lastName": "",
            "email": "", "gender": "MALE", "age": 25
        }),
    );
    h.transport.respond(204, "");

    block_on(h.api.create_profile(&draft)).unwrap();
    block_on(h.api.delete_profile()).unwrap();

    let requests = h.transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert!(requests[0].body.as_deref().unwrap().contains(r#""userId":"u1""#));
    assert_eq!(requests[1].method, Method::Delete);
    assert_eq!(requests[1].url, "/bff/api/profile");
}

// =============================================================
// Orders
// =============================================================

#[test]
fn list_orders_parses_array() {
    let h = harness("/orders");
    h.transport.respond_json(200, &serde_json::json!([order_json(1, "CREATED"), order_json(2, "SHIPPED")]));
    let orders = block_on(h.api.list_orders()).unwrap();
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].status, OrderStatus::Shipped);
}

#[test]
fn create_order_posts_empty_object() {
    let h = harness("/orders");
    h.transport.respond_json(201, &order_json(9, "CREATED"));
    let order = block_on(h.api.create_order()).unwrap();
    assert_eq!(order.order_number, "ORD-9");
    let sent = h.transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "/bff/api/orders");
    assert_eq!(sent.body.as_deref(), Some("{}"));
}

#[test]
fn mid_session_unauthorized_on_orders_invalidates_session() {
    let h = harness("/orders");
    h.transport.respond(401, "");

    assert_eq!(block_on(h.api.list_orders()), Err(ApiError::Unauthorized));
    assert!(!h.session.is_authenticated());
    assert_eq!(h.nav.visits(), vec!["/login".to_owned()]);
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_posts_to_public_endpoint_and_keeps_server_message() {
    let h = harness("/register");
    h.transport.respond_json(409, &serde_json::json!({ "message": "Email already registered" }));
    let request = RegisterRequest {
        username: "a@x.com".to_owned(),
        email: "a@x.com".to_owned(),
        password: "secret123".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "A".to_owned(),
        mobile_number: None,
        gender: Gender::Female,
        age: 30,
    };
    let err = block_on(h.api.register(&request)).unwrap_err();
    assert_eq!(err.user_message("fallback"), "Email already registered");
    assert_eq!(h.transport.last_request().url, "/bff/public/profile/register");
    assert!(h.transport.last_request().with_credentials);
}

#[test]
fn confirm_sends_token_as_query() {
    let h = harness("/confirm");
    h.transport.respond_json(200, &serde_json::json!({ "message": "ok", "email": "a@x.com" }));
    let resp = block_on(h.api.confirm("tok-1")).unwrap();
    assert_eq!(resp.email, "a@x.com");
    let sent = h.transport.last_request();
    assert_eq!(sent.url, "/bff/public/profile/confirm");
    assert_eq!(sent.query, vec![("token".to_owned(), "tok-1".to_owned())]);
}
