//! Search criteria for filtering items.
//!
//! A [`SearchCriteria`] carries up to three independent filters: a category and
//! an inclusive price range. Active filters combine with AND semantics and an
//! empty criteria value matches every item.
//!
//! ```ignore
//! use itemstore_core::search::SearchCriteria;
//!
//! let criteria = SearchCriteria::builder()
//!     .category("Electronics")
//!     .min_price(10.0)
//!     .max_price(50.0)
//!     .build();
//! ```
//!
//! Backends evaluate criteria through the [`CriterionVisitor`] trait, which
//! receives one call per active filter.

use serde::{Deserialize, Serialize};

/// A single active filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion<'a> {
    /// Category equals the value, ignoring case.
    Category(&'a str),
    /// Price is greater than or equal to the value.
    MinPrice(f64),
    /// Price is less than or equal to the value.
    MaxPrice(f64),
}

/// Optional category and price-range filters.
///
/// Deserializes from the list endpoint's query parameters
/// (`category`, `minPrice`, `maxPrice`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl SearchCriteria {
    /// Criteria with no active filters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::new()
    }

    /// Returns `true` if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.min_price.is_none() && self.max_price.is_none()
    }

    /// Iterates over the active filters.
    pub fn criteria(&self) -> impl Iterator<Item = Criterion<'_>> {
        self.category
            .as_deref()
            .map(Criterion::Category)
            .into_iter()
            .chain(self.min_price.map(Criterion::MinPrice))
            .chain(self.max_price.map(Criterion::MaxPrice))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaBuilder {
    criteria: SearchCriteria,
}

impl SearchCriteriaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to items in `category` (case-insensitive).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.criteria.category = Some(category.into());
        self
    }

    /// Restricts results to items priced at or above `min_price`.
    pub fn min_price(mut self, min_price: f64) -> Self {
        self.criteria.min_price = Some(min_price);
        self
    }

    /// Restricts results to items priced at or below `max_price`.
    pub fn max_price(mut self, max_price: f64) -> Self {
        self.criteria.max_price = Some(max_price);
        self
    }

    pub fn build(self) -> SearchCriteria {
        self.criteria
    }
}

pub trait CriterionVisitor {
    type Output;

    fn visit_category(&mut self, category: &str) -> Self::Output;
    fn visit_min_price(&mut self, min_price: f64) -> Self::Output;
    fn visit_max_price(&mut self, max_price: f64) -> Self::Output;

    fn visit_criterion(&mut self, criterion: &Criterion<'_>) -> Self::Output {
        match criterion {
            Criterion::Category(category) => self.visit_category(category),
            Criterion::MinPrice(min_price) => self.visit_min_price(*min_price),
            Criterion::MaxPrice(max_price) => self.visit_max_price(*max_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_criteria_has_no_active_filters() {
        let criteria = SearchCriteria::new();

        assert!(criteria.is_empty());
        assert_eq!(criteria.criteria().count(), 0);
    }

    #[test]
    fn builder_sets_every_filter() {
        let criteria = SearchCriteria::builder()
            .category("Electronics")
            .min_price(10.0)
            .max_price(50.0)
            .build();

        assert!(!criteria.is_empty());
        assert_eq!(
            criteria.criteria().collect::<Vec<_>>(),
            vec![
                Criterion::Category("Electronics"),
                Criterion::MinPrice(10.0),
                Criterion::MaxPrice(50.0),
            ]
        );
    }

    #[test]
    fn deserializes_from_query_parameter_names() {
        let criteria: SearchCriteria =
            serde_json::from_str(r#"{"category":"Movies","maxPrice":9.5}"#).unwrap();

        assert_eq!(criteria.category.as_deref(), Some("Movies"));
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, Some(9.5));
    }
}
