//! Convenient re-exports of commonly used types from itemstore.
//!
//! ```ignore
//! use itemstore::prelude::*;
//! ```
//!
//! This provides access to:
//! - The item entity and its field set
//! - Backend traits
//! - Requests, search criteria and the service
//! - Configuration and error types

pub use itemstore_core::{
    backend::{ItemBackend, ItemBackendBuilder},
    config::{ServiceConfig, ValidationLimits},
    error::{FieldViolation, ItemStoreError, ItemStoreResult, ValidationErrors},
    item::{Item, ItemFields},
    request::{CreateItemRequest, ItemRequest, UpdateItemRequest},
    search::{Criterion, CriterionVisitor, SearchCriteria, SearchCriteriaBuilder},
    service::ItemService,
};
