//! Core types for an in-memory item catalog.
//!
//! This crate is the core of the itemstore project and provides:
//!
//! - **Item entity** ([`item`]) - The immutable catalog record and its mutable field set
//! - **Search criteria** ([`search`]) - Category and price-range filters
//! - **Backend abstraction** ([`backend`]) - The storage trait implemented by backends
//! - **Requests** ([`request`]) - Create/update request bodies and their validation
//! - **Configuration** ([`config`]) - Validation limits
//! - **Service** ([`service`]) - Id and timestamp generation on top of a backend
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use itemstore_core::{request::CreateItemRequest, service::ItemService};
//!
//! let service = ItemService::new(backend);
//! let item = service
//!     .create_item(CreateItemRequest::new("Widget", "A widget"))
//!     .await?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as itemstore_core;

pub mod backend;
pub mod config;
pub mod error;
pub mod item;
pub mod request;
pub mod search;
pub mod service;
