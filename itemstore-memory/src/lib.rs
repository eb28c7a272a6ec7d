//! In-memory item storage backend for itemstore.
//!
//! This crate provides a thread-safe, in-memory implementation of the `ItemBackend` trait.
//! It uses an async-aware read-write lock around a copy-on-write vector, so readers
//! always iterate a stable snapshot while writers are serialized.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes through shared clones
//! - **Snapshot reads** - Listing and searching never observe a half-applied write
//! - **Insertion order** - Items are returned in the order they were added
//!
//! Nothing is persisted; the items are gone when the process exits.
//!
//! # Quick Start
//!
//! ```ignore
//! use itemstore::{prelude::*, memory::InMemoryItemStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InMemoryItemStore::builder().build().await?;
//!     let service = ItemService::new(backend);
//!
//!     let item = service
//!         .create_item(CreateItemRequest::new("Widget", "A widget"))
//!         .await?;
//!
//!     println!("Created {}", item.id());
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as itemstore_memory;

pub mod store;
pub mod evaluator;

pub use store::{InMemoryItemStore, InMemoryItemStoreBuilder};
