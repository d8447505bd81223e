use futures::executor::block_on;

use super::*;
use crate::config::BffConfig;
use crate::error::ApiError;
use crate::testing::MockTransport;

fn order(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "orderNumber": format!("ORD-{id}"),
        "status": "CREATED",
        "createdBy": "u1",
        "creationTime": "2024-01-15T10:30:00"
    })
}

#[test]
fn stats_reflect_profile_and_orders() {
    let transport = MockTransport::new();
    transport
        .respond_json(
            200,
            &serde_json::json!({
                "id": 1,
                "userId": "u1",
                "firstName": "Alice",
                "lastName": "A",
                "email": "a@x.com",
                "gender": "FEMALE",
                "age": 30
            }),
        )
        .respond_json(200, &serde_json::json!([order(1), order(2)]));
    let api = ApiClient::new(transport.clone(), BffConfig::default());

    let stats = block_on(load_stats(&api));

    assert_eq!(stats, DashboardStats { has_profile: true, order_count: 2 });
    let urls: Vec<_> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, ["/bff/api/profile", "/bff/api/orders"]);
}

#[test]
fn missing_profile_is_not_an_error() {
    let transport = MockTransport::new();
    transport.respond(404, "").respond_json(200, &serde_json::json!([]));
    let api = ApiClient::new(transport, BffConfig::default());

    assert_eq!(block_on(load_stats(&api)), DashboardStats::default());
}

#[test]
fn failures_collapse_to_defaults() {
    let transport = MockTransport::new();
    transport.respond(500, "").fail(ApiError::Network("offline".to_owned()));
    let api = ApiClient::new(transport, BffConfig::default());

    assert_eq!(block_on(load_stats(&api)), DashboardStats { has_profile: false, order_count: 0 });
}
