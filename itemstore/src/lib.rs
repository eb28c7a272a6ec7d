//! Main itemstore crate providing a unified interface for an in-memory item catalog.
//!
//! This crate is the primary entry point for users of itemstore. It re-exports the
//! core types and the in-memory backend from the sub-crates.
//!
//! # Features
//!
//! - **Immutable items** - Records are replaced wholesale, never mutated in place
//! - **Concurrency-safe store** - Snapshot reads and serialized writes
//! - **Search** - Case-insensitive category and inclusive price-range filters
//! - **Request validation** - Field constraints checked before anything is stored
//!
//! # Quick Start
//!
//! ```ignore
//! use itemstore::{prelude::*, memory::InMemoryItemStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = ItemService::new(InMemoryItemStore::builder().build().await.unwrap());
//!
//!     let item = service
//!         .create_item(
//!             CreateItemRequest::new("Widget", "A widget")
//!                 .price(19.99)
//!                 .category("Tools")
//!                 .stock_quantity(5),
//!         )
//!         .await
//!         .unwrap();
//!
//!     let tools = service
//!         .search_items(&SearchCriteria::builder().category("tools").build())
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(tools, vec![item]);
//! }
//! ```
//!
//! # HTTP mapping
//!
//! The crate does not ship an HTTP layer. An adapter exposing the service is
//! expected to map results as follows:
//!
//! | route                  | service call                 | success | failure                         |
//! |------------------------|------------------------------|---------|---------------------------------|
//! | `POST /api/items`      | [`create_item`]              | 201     | 400 on validation error         |
//! | `GET /api/items/{id}`  | [`get_item_by_id`]           | 200     | 404 on `None`                   |
//! | `GET /api/items`       | [`list_items`]               | 200     |                                 |
//! | `PUT /api/items/{id}`  | [`update_item`]              | 200     | 400 on validation, 404 on `None`|
//! | `DELETE /api/items/{id}` | [`delete_item`]            | 204     | 404 on `false`                  |
//!
//! An `{id}` that is not a valid UUID cannot name a stored item and maps to 404.
//!
//! [`create_item`]: service::ItemService::create_item
//! [`get_item_by_id`]: service::ItemService::get_item_by_id
//! [`list_items`]: service::ItemService::list_items
//! [`update_item`]: service::ItemService::update_item
//! [`delete_item`]: service::ItemService::delete_item
//!
//! # Backends
//!
//! - [`memory`] - In-memory storage; nothing survives a restart

pub mod prelude;

pub use itemstore_core::{backend, config, error, item, request, search, service};

// Re-export the id, timestamp and trait-helper crates for convenience
pub use async_trait::async_trait;
pub use chrono;
pub use uuid;

/// In-memory storage backend implementations.
pub mod memory {
    pub use itemstore_memory::{InMemoryItemStore, InMemoryItemStoreBuilder};
}
