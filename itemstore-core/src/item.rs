//! The item entity and its mutable field set.
//!
//! An [`Item`] is an immutable value: once constructed none of its fields change.
//! Updates build a new `Item` through [`Item::with_fields`], which carries the
//! identity (`id`, `created_at`) over and replaces everything else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The caller-controlled part of an item.
///
/// Everything except the identifier and the creation timestamp. Creating and
/// updating an item both supply a complete `ItemFields`; absent optionals stay
/// absent, they are never merged with a previous value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub stock_quantity: Option<i32>,
}

impl ItemFields {
    /// Creates a field set with the required values and no optional attributes.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: None,
            category: None,
            stock_quantity: None,
        }
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn stock_quantity(mut self, stock_quantity: i32) -> Self {
        self.stock_quantity = Some(stock_quantity);
        self
    }
}

/// A single catalog record (a product, a movie, ...).
///
/// Serializes to the wire shape
/// `{id, name, description, price, category, stockQuantity, createdAt}` with
/// `createdAt` as an RFC 3339 timestamp and absent optionals as `null`.
///
/// # Example
///
/// ```ignore
/// use itemstore_core::item::{Item, ItemFields};
///
/// let item = Item::new(
///     uuid::Uuid::new_v4(),
///     chrono::Utc::now(),
///     ItemFields::new("Widget", "A widget").price(19.99),
/// );
/// assert_eq!(item.name(), "Widget");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: Uuid,
    name: String,
    description: String,
    price: Option<f64>,
    category: Option<String>,
    stock_quantity: Option<i32>,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Assembles an item from its identity and field set.
    pub fn new(id: Uuid, created_at: DateTime<Utc>, fields: ItemFields) -> Self {
        let ItemFields {
            name,
            description,
            price,
            category,
            stock_quantity,
        } = fields;

        Self {
            id,
            name,
            description,
            price,
            category,
            stock_quantity,
            created_at,
        }
    }

    /// Builds the full replacement for this item.
    ///
    /// The result keeps `id` and `created_at`; every other field comes from `fields`.
    pub fn with_fields(&self, fields: ItemFields) -> Self {
        Self::new(self.id, self.created_at, fields)
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn stock_quantity(&self) -> Option<i32> {
        self.stock_quantity
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    /// Returns a copy of the caller-controlled fields.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            stock_quantity: self.stock_quantity,
        }
    }
}
