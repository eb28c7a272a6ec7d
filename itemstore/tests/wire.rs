//! JSON shapes exchanged with a boundary adapter.

use itemstore::{memory::InMemoryItemStore, prelude::*};
use serde_json::{json, Value};

#[tokio::test]
async fn created_item_serializes_with_every_key() {
    let service = ItemService::new(InMemoryItemStore::new());
    let item = service
        .create_item(CreateItemRequest::new("Widget", "A widget").price(19.99))
        .await
        .unwrap();

    let value = serde_json::to_value(&item).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["category", "createdAt", "description", "id", "name", "price", "stockQuantity"]
    );

    assert_eq!(value["id"], json!(item.id().to_string()));
    assert_eq!(value["price"], json!(19.99));
    assert_eq!(value["category"], Value::Null);

    let created_at = value["createdAt"].as_str().unwrap();
    let parsed = itemstore::chrono::DateTime::parse_from_rfc3339(created_at).unwrap();
    assert_eq!(parsed, *item.created_at());
}

#[tokio::test]
async fn item_round_trips_through_json() {
    let service = ItemService::new(InMemoryItemStore::new());
    let item = service
        .create_item(
            CreateItemRequest::new("Widget", "A widget")
                .category("Tools")
                .stock_quantity(5),
        )
        .await
        .unwrap();

    let decoded: Item = serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();

    assert_eq!(decoded, item);
}

#[tokio::test]
async fn request_body_with_missing_name_is_a_validation_error() {
    let service = ItemService::new(InMemoryItemStore::new());
    let request: CreateItemRequest =
        serde_json::from_value(json!({"description": "Nameless", "price": 3.5})).unwrap();

    let err = service.create_item(request).await.unwrap_err();

    assert!(err.is_client_error());
    assert_eq!(
        serde_json::to_value(err.violations().unwrap()).unwrap(),
        json!([{"field": "name", "message": "Name is required"}])
    );
}

#[test]
fn search_criteria_from_query_parameters() {
    let criteria: SearchCriteria =
        serde_json::from_value(json!({"category": "Electronics", "minPrice": 10.0})).unwrap();

    assert_eq!(
        criteria,
        SearchCriteria::builder().category("Electronics").min_price(10.0).build()
    );
}
