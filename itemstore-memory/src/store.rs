//! In-memory storage implementation for the item store.
//!
//! Items live in a single insertion-ordered `Vec` behind an async-aware
//! read-write lock. The vector is shared through an `Arc` so that readers can
//! take a snapshot and release the lock before iterating.

use std::sync::Arc;
use async_trait::async_trait;
use mea::rwlock::RwLock;
use tracing::debug;
use uuid::Uuid;

use itemstore_core::{
    backend::{ItemBackend, ItemBackendBuilder},
    error::ItemStoreResult,
    item::Item,
    search::SearchCriteria,
};

use crate::evaluator::ItemEvaluator;

type Snapshot = Arc<Vec<Item>>;


/// Thread-safe in-memory item storage backend.
///
/// # Thread Safety
///
/// `InMemoryItemStore` is cloneable and uses an `Arc`-wrapped internal state, so
/// clones share the same items and can be handed to any number of tasks.
///
/// Reads hold the read lock only long enough to clone the snapshot `Arc`, then
/// work on an immutable vector. Writes hold the write lock for their whole
/// duration and go through [`Arc::make_mut`]: when a reader still holds the
/// previous snapshot the vector is copied first, so that reader keeps seeing a
/// stable sequence. Items are never mutated in place; `replace` swaps in a whole
/// new value.
///
/// # Performance
///
/// Every lookup is a linear scan. This is intended for catalogs small enough to
/// keep in memory.
///
/// # Example
///
/// ```ignore
/// use itemstore_memory::InMemoryItemStore;
/// use itemstore::backend::ItemBackend;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryItemStore::new();
///     let stored = store.insert(item).await?;
///
///     assert_eq!(store.find_by_id(stored.id()).await?, Some(stored));
///
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<Snapshot>>,
}

impl InMemoryItemStore {
    /// Creates a new empty in-memory item store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store with room for `capacity` items before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Arc::new(RwLock::new(Arc::new(Vec::with_capacity(capacity)))),
        }
    }

    /// Creates a builder for constructing an `InMemoryItemStore` with custom options.
    pub fn builder() -> InMemoryItemStoreBuilder {
        InMemoryItemStoreBuilder::default()
    }

    /// Returns the current snapshot without holding the lock afterwards.
    async fn snapshot(&self) -> Snapshot {
        Arc::clone(&*self.items.read().await)
    }
}


#[async_trait]
impl ItemBackend for InMemoryItemStore {
    async fn insert(&self, item: Item) -> ItemStoreResult<Item> {
        let mut guard = self.items.write().await;
        Arc::make_mut(&mut *guard).push(item.clone());

        debug!(id = %item.id(), "Inserted item");

        Ok(item)
    }

    async fn find_by_id(&self, id: &Uuid) -> ItemStoreResult<Option<Item>> {
        Ok(
            self.snapshot()
                .await
                .iter()
                .find(|item| item.id() == id)
                .cloned()
        )
    }

    async fn find_all(&self) -> ItemStoreResult<Vec<Item>> {
        Ok(self.snapshot().await.as_ref().clone())
    }

    async fn replace(&self, item: Item) -> ItemStoreResult<Option<Item>> {
        let mut guard = self.items.write().await;

        let Some(position) = guard.iter().position(|existing| existing.id() == item.id()) else {
            return Ok(None);
        };

        Arc::make_mut(&mut *guard)[position] = item.clone();

        debug!(id = %item.id(), position, "Replaced item");

        Ok(Some(item))
    }

    async fn delete_by_id(&self, id: &Uuid) -> ItemStoreResult<bool> {
        let mut guard = self.items.write().await;

        if !guard.iter().any(|item| item.id() == id) {
            return Ok(false);
        }

        Arc::make_mut(&mut *guard).retain(|item| item.id() != id);

        debug!(%id, "Deleted item");

        Ok(true)
    }

    async fn search(&self, criteria: &SearchCriteria) -> ItemStoreResult<Vec<Item>> {
        let snapshot = self.snapshot().await;

        Ok(ItemEvaluator::filter_items(snapshot.iter(), criteria))
    }

    async fn len(&self) -> ItemStoreResult<usize> {
        Ok(self.items.read().await.len())
    }
}


/// Builder for constructing [`InMemoryItemStore`] instances.
///
/// # Example
///
/// ```ignore
/// use itemstore_memory::InMemoryItemStore;
/// use itemstore::backend::ItemBackendBuilder;
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryItemStore::builder().capacity(1024).build().await.unwrap();
/// }
/// ```
#[derive(Default, Debug, Clone)]
pub struct InMemoryItemStoreBuilder {
    capacity: usize,
}

impl InMemoryItemStoreBuilder {
    /// Pre-allocates room for `capacity` items.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

#[async_trait]
impl ItemBackendBuilder for InMemoryItemStoreBuilder {
    type Backend = InMemoryItemStore;

    /// Builds and returns a new [`InMemoryItemStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    async fn build(self) -> ItemStoreResult<Self::Backend> {
        Ok(InMemoryItemStore::with_capacity(self.capacity))
    }
}
