//! Boundary request types and their validation rules.
//!
//! Create and update requests have the same shape: update is a full replace, so
//! it carries the complete field set just like create does.
//!
//! | field           | rule                                       |
//! |-----------------|--------------------------------------------|
//! | `name`          | required, not blank, at most 200 chars     |
//! | `description`   | required, not blank, at most 1000 chars    |
//! | `price`         | unconstrained                              |
//! | `category`      | at most 100 chars                          |
//! | `stockQuantity` | not negative                               |
//!
//! The maxima come from [`ValidationLimits`] and can be configured.

use serde::{Deserialize, Serialize};

use crate::{
    config::ValidationLimits,
    error::{ItemStoreResult, ValidationErrors},
    item::ItemFields,
};

/// Body of a create or update request.
///
/// `name` and `description` are optional here only so that a missing value is
/// reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i32>,
}

/// Request body for creating an item.
pub type CreateItemRequest = ItemRequest;

/// Request body for replacing an existing item.
pub type UpdateItemRequest = ItemRequest;

impl ItemRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            ..Self::default()
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

    /// Checks every field against `limits`, collecting all violations.
    pub fn validate(&self, limits: &ValidationLimits) -> ItemStoreResult<()> {
        let mut errors = ValidationErrors::new();

        check_required_text(
            &mut errors,
            "name",
            "Name is required",
            self.name.as_deref(),
            limits.max_name_len,
        );
        check_required_text(
            &mut errors,
            "description",
            "Description is required",
            self.description.as_deref(),
            limits.max_description_len,
        );

        if let Some(category) = self.category.as_deref() {
            if category.chars().count() > limits.max_category_len {
                errors.push(
                    "category",
                    format!("size must be between 0 and {}", limits.max_category_len),
                );
            }
        }

        if matches!(self.stock_quantity, Some(quantity) if quantity < 0) {
            errors.push("stockQuantity", "Stock quantity cannot be negative");
        }

        errors.into_result()
    }

    /// Validates the request and converts it into the item field set.
    pub fn into_fields(self, limits: &ValidationLimits) -> ItemStoreResult<ItemFields> {
        self.validate(limits)?;

        Ok(ItemFields {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price: self.price,
            category: self.category,
            stock_quantity: self.stock_quantity,
        })
    }
}

fn check_required_text(
    errors: &mut ValidationErrors,
    field: &'static str,
    missing_message: &str,
    value: Option<&str>,
    max_len: usize,
) {
    match value {
        Some(text) if !text.trim().is_empty() => {
            if text.chars().count() > max_len {
                errors.push(field, format!("size must be between 1 and {max_len}"));
            }
        }
        _ => errors.push(field, missing_message),
    }
}
