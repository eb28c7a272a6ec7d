//! Storage backend abstraction for the item store.
//!
//! The [`ItemBackend`] trait is the seam between the [`ItemService`](crate::service::ItemService)
//! and whatever holds the items. Backends own the authoritative sequence of items
//! and must be safe to call concurrently from many tasks without the caller
//! taking any lock of its own.
//!
//! # Traits
//!
//! - [`ItemBackend`]: The storage operations
//! - [`ItemBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use itemstore::backend::ItemBackend;
//!
//! let backend = MyBackendImpl::new();
//! let stored = backend.insert(item).await?;
//! assert_eq!(backend.find_by_id(stored.id()).await?, Some(stored));
//! ```

use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use uuid::Uuid;

use crate::{error::ItemStoreResult, item::Item, search::SearchCriteria};

/// Abstract interface for item storage backends.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` and support concurrent readers and
/// writers. Reads (`find_all`, `search`) must return a consistent snapshot in
/// which every item is whole; writes (`insert`, `replace`, `delete_by_id`) must
/// be mutually exclusive so that no update is lost.
///
/// # Missing items
///
/// An unknown id is not an error. `find_by_id` and `replace` return `Ok(None)`,
/// `delete_by_id` returns `Ok(false)`.
#[async_trait]
pub trait ItemBackend: Send + Sync + Debug {
    /// Appends an item and returns the stored value.
    ///
    /// No duplicate-id check is performed; callers guarantee uniqueness by
    /// generating fresh identifiers.
    async fn insert(&self, item: Item) -> ItemStoreResult<Item>;

    /// Returns the first item whose id equals `id`.
    async fn find_by_id(&self, id: &Uuid) -> ItemStoreResult<Option<Item>>;

    /// Returns a snapshot of every item in insertion order.
    async fn find_all(&self) -> ItemStoreResult<Vec<Item>>;

    /// Overwrites the stored item that has the same id, keeping its position.
    ///
    /// Returns the new value, or `None` if no item with that id exists.
    async fn replace(&self, item: Item) -> ItemStoreResult<Option<Item>>;

    /// Removes every item with the given id.
    ///
    /// Returns `true` if anything was removed.
    async fn delete_by_id(&self, id: &Uuid) -> ItemStoreResult<bool>;

    /// Returns the items matching all active filters in `criteria`, in insertion order.
    ///
    /// Category matching ignores case; price bounds are inclusive. An item that
    /// lacks the field an active filter looks at is excluded.
    async fn search(&self, criteria: &SearchCriteria) -> ItemStoreResult<Vec<Item>>;

    /// Returns the number of stored items.
    async fn len(&self) -> ItemStoreResult<usize>;

    async fn is_empty(&self) -> ItemStoreResult<bool> {
        Ok(self.len().await? == 0)
    }
}

#[async_trait]
impl<B> ItemBackend for &B
where
    B: ItemBackend,
{
    async fn insert(&self, item: Item) -> ItemStoreResult<Item> {
        (*self).insert(item).await
    }

    async fn find_by_id(&self, id: &Uuid) -> ItemStoreResult<Option<Item>> {
        (*self).find_by_id(id).await
    }

    async fn find_all(&self) -> ItemStoreResult<Vec<Item>> {
        (*self).find_all().await
    }

    async fn replace(&self, item: Item) -> ItemStoreResult<Option<Item>> {
        (*self).replace(item).await
    }

    async fn delete_by_id(&self, id: &Uuid) -> ItemStoreResult<bool> {
        (*self).delete_by_id(id).await
    }

    async fn search(&self, criteria: &SearchCriteria) -> ItemStoreResult<Vec<Item>> {
        (*self).search(criteria).await
    }

    async fn len(&self) -> ItemStoreResult<usize> {
        (*self).len().await
    }
}

#[async_trait]
impl<B> ItemBackend for Arc<B>
where
    B: ItemBackend,
{
    async fn insert(&self, item: Item) -> ItemStoreResult<Item> {
        (**self).insert(item).await
    }

    async fn find_by_id(&self, id: &Uuid) -> ItemStoreResult<Option<Item>> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> ItemStoreResult<Vec<Item>> {
        (**self).find_all().await
    }

    async fn replace(&self, item: Item) -> ItemStoreResult<Option<Item>> {
        (**self).replace(item).await
    }

    async fn delete_by_id(&self, id: &Uuid) -> ItemStoreResult<bool> {
        (**self).delete_by_id(id).await
    }

    async fn search(&self, criteria: &SearchCriteria) -> ItemStoreResult<Vec<Item>> {
        (**self).search(criteria).await
    }

    async fn len(&self) -> ItemStoreResult<usize> {
        (**self).len().await
    }
}

/// Factory for constructing [`ItemBackend`] instances.
#[async_trait]
pub trait ItemBackendBuilder {
    type Backend: ItemBackend;

    async fn build(self) -> ItemStoreResult<Self::Backend>;
}
