//! Item service: the business-rule layer between a boundary adapter and a backend.
//!
//! The service validates requests, generates identifiers and creation
//! timestamps, and translates each request into backend operations.
//!
//! # Example
//!
//! ```ignore
//! use itemstore::{prelude::*, memory::InMemoryItemStore};
//!
//! let service = ItemService::new(InMemoryItemStore::new());
//!
//! let item = service
//!     .create_item(CreateItemRequest::new("Widget", "A widget").price(19.99))
//!     .await?;
//!
//! assert_eq!(service.get_item_by_id(item.id()).await?, Some(item));
//! ```

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    backend::ItemBackend,
    config::ServiceConfig,
    error::ItemStoreResult,
    item::Item,
    request::{CreateItemRequest, UpdateItemRequest},
    search::SearchCriteria,
};

/// Orchestrates item operations on top of a backend.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
///
/// # Missing items
///
/// Operations on an unknown id do not fail: `get_item_by_id` and `update_item`
/// return `Ok(None)`, `delete_item` returns `Ok(false)`. Errors are reserved
/// for requests that fail validation.
#[derive(Debug)]
pub struct ItemService<B: ItemBackend> {
    backend: B,
    config: ServiceConfig,
}

impl<B: ItemBackend> ItemService<B> {
    /// Creates a service with the default configuration.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: ServiceConfig::default(),
        }
    }

    /// Creates a service with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ItemStoreError::Configuration`](crate::error::ItemStoreError::Configuration)
    /// if the configuration fails validation.
    pub fn with_config(backend: B, config: ServiceConfig) -> ItemStoreResult<Self> {
        config.validate()?;

        Ok(Self { backend, config })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Validates the request and stores a new item with a fresh id and timestamp.
    #[instrument(skip_all)]
    pub async fn create_item(&self, request: CreateItemRequest) -> ItemStoreResult<Item> {
        let fields = request
            .into_fields(&self.config.limits)
            .inspect_err(|err| debug!(%err, "Rejected create request"))?;

        let item = Item::new(Uuid::new_v4(), Utc::now(), fields);
        let item = self.backend.insert(item).await?;

        info!(id = %item.id(), "Created item");

        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn get_item_by_id(&self, id: &Uuid) -> ItemStoreResult<Option<Item>> {
        self.backend.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_all_items(&self) -> ItemStoreResult<Vec<Item>> {
        self.backend.find_all().await
    }

    /// Replaces every mutable field of an existing item.
    ///
    /// The replacement keeps the original `id` and `created_at`; all other fields
    /// come from `request`, so omitted optionals become absent. Returns `Ok(None)`
    /// if no item has this id, including when it is deleted concurrently
    /// between the lookup and the write.
    #[instrument(skip(self, request))]
    pub async fn update_item(
        &self,
        id: &Uuid,
        request: UpdateItemRequest,
    ) -> ItemStoreResult<Option<Item>> {
        let fields = request
            .into_fields(&self.config.limits)
            .inspect_err(|err| debug!(%err, "Rejected update request"))?;

        let Some(existing) = self.backend.find_by_id(id).await? else {
            debug!("Update target not found");
            return Ok(None);
        };

        let updated = self.backend.replace(existing.with_fields(fields)).await?;

        if updated.is_some() {
            info!("Updated item");
        }

        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &Uuid) -> ItemStoreResult<bool> {
        let deleted = self.backend.delete_by_id(id).await?;

        if deleted {
            info!("Deleted item");
        }

        Ok(deleted)
    }

    #[instrument(skip(self))]
    pub async fn search_items(&self, criteria: &SearchCriteria) -> ItemStoreResult<Vec<Item>> {
        self.backend.search(criteria).await
    }

    /// Lists items for the collection endpoint.
    ///
    /// Returns every item when `criteria` is empty and the search results otherwise.
    pub async fn list_items(&self, criteria: &SearchCriteria) -> ItemStoreResult<Vec<Item>> {
        if criteria.is_empty() {
            self.get_all_items().await
        } else {
            self.search_items(criteria).await
        }
    }
}
