use chat2rec::api::models::{
    CreateSessionRequest, CreateSessionResponse, PersistMessageRequest, RecommendRequest,
    RecommendResponse, DEFAULT_TOP_K,
};
use chat2rec::error::ChatError;
use chat2rec::models::{Message, MessageKind, Product, Role};
use serde_json::json;

#[test]
fn test_create_session_request_uses_camel_case() {
    let request = CreateSessionRequest {
        user_id: "user-1".to_string(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({"userId": "user-1"}));
}

#[test]
fn test_create_session_response_reads_store_id() {
    let response: CreateSessionResponse =
        serde_json::from_value(json!({"_id": "65f0c0ffee"})).unwrap();
    assert_eq!(response.id, "65f0c0ffee");
}

#[test]
fn test_persist_message_request_shape() {
    let request = PersistMessageRequest {
        session_id: "sess-1".to_string(),
        role: Role::Assistant,
        content: "Recommended products".to_string(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "sessionId": "sess-1",
            "role": "assistant",
            "content": "Recommended products"
        })
    );
}

#[test]
fn test_recommend_request_validation() {
    assert!(matches!(
        RecommendRequest::new("", Some("user-1"), 5),
        Err(ChatError::EmptyQuery)
    ));
    assert!(matches!(
        RecommendRequest::new("   ", Some("user-1"), 5),
        Err(ChatError::EmptyQuery)
    ));
    assert!(matches!(
        RecommendRequest::new("sneakers", Some("user-1"), 0),
        Err(ChatError::ConfigError(_))
    ));

    let request = RecommendRequest::new("  sneakers  ", None, DEFAULT_TOP_K).unwrap();
    assert_eq!(request.query, "sneakers");
    assert_eq!(request.top_k, 5);

    // user_id is omitted from the payload when absent
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({"query": "sneakers", "top_k": 5}));
}

#[test]
fn test_recommend_request_uses_snake_case() {
    let request = RecommendRequest::new("sneakers", Some("user-1"), 3).unwrap();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({"query": "sneakers", "user_id": "user-1", "top_k": 3})
    );
}

#[test]
fn test_recommend_response_with_and_without_summary() {
    let with: RecommendResponse = serde_json::from_value(json!({
        "results": [{"id": "p1", "name": "Sneaker A"}],
        "summary": "Top picks"
    }))
    .unwrap();
    assert_eq!(with.results.len(), 1);
    assert_eq!(with.summary.as_deref(), Some("Top picks"));

    let without: RecommendResponse =
        serde_json::from_value(json!({"results": []})).unwrap();
    assert!(without.results.is_empty());
    assert!(without.summary.is_none());
}

#[test]
fn test_product_tolerates_missing_optional_fields() {
    let product: Product = serde_json::from_value(json!({"id": "p1"})).unwrap();
    assert_eq!(product.id, "p1");
    assert!(product.name.is_none());
    assert_eq!(product.label(), "p1");

    let full: Product = serde_json::from_value(json!({
        "id": "p2",
        "name": "Sneaker A",
        "brand": "Acme",
        "category": "shoes",
        "price": 79.99,
        "rating": 4.5,
        "score": 0.92,
        "semantic": 0.88
    }))
    .unwrap();
    assert_eq!(full.label(), "Sneaker A");
    assert_eq!(full.price, Some(79.99));
}

#[test]
fn test_message_kind_tagging() {
    let text = Message::text(1, Role::User, "hello");
    let value = serde_json::to_value(&text).unwrap();
    assert_eq!(value["kind"], "text");
    assert_eq!(value["content"], "hello");
    // Non-pending messages omit the flag entirely
    assert!(value.get("pending").is_none());

    let results = Message::product_results(
        2,
        vec![serde_json::from_value(json!({"id": "p1"})).unwrap()],
        Some("Recommended products".to_string()),
    );
    let value = serde_json::to_value(&results).unwrap();
    assert_eq!(value["kind"], "product-results");
    assert_eq!(value["results"][0]["id"], "p1");
    assert_eq!(value["summary"], "Recommended products");

    let placeholder = Message::pending_placeholder(3);
    let value = serde_json::to_value(&placeholder).unwrap();
    assert_eq!(value["pending"], true);
    assert_eq!(value["role"], "assistant");
}

#[test]
fn test_message_round_trips_through_json() {
    let message = Message::product_results(
        7,
        vec![serde_json::from_value(json!({"id": "p1", "price": 12.5})).unwrap()],
        None,
    );
    let encoded = serde_json::to_string(&message).unwrap();
    let decoded: Message = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.id, 7);
    assert_eq!(decoded.role, Role::Assistant);
    match decoded.kind {
        MessageKind::ProductResults { results, summary } => {
            assert_eq!(results[0].id, "p1");
            assert!(summary.is_none());
        }
        other => panic!("expected product results, got {:?}", other),
    }
}
