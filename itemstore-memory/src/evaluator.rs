//! Search criteria evaluation for in-memory item filtering.

use itemstore_core::{
    item::Item,
    search::{CriterionVisitor, SearchCriteria},
};

/// Evaluates search criteria against a single item.
///
/// Every active criterion must match. A criterion that looks at a field the item
/// does not have never matches.
pub(crate) struct ItemEvaluator<'a> {
    item: &'a Item,
}

impl<'a> ItemEvaluator<'a> {
    pub fn new(item: &'a Item) -> Self {
        Self { item }
    }

    pub fn evaluate(&mut self, criteria: &SearchCriteria) -> bool {
        criteria
            .criteria()
            .all(|criterion| self.visit_criterion(&criterion))
    }

    pub fn filter_items(
        items: impl IntoIterator<Item = &'a Item>,
        criteria: &SearchCriteria,
    ) -> Vec<Item> {
        items
            .into_iter()
            .filter(|item| ItemEvaluator::new(item).evaluate(criteria))
            .cloned()
            .collect()
    }
}

impl<'a> CriterionVisitor for ItemEvaluator<'a> {
    type Output = bool;

    fn visit_category(&mut self, category: &str) -> Self::Output {
        self.item
            .category()
            .is_some_and(|value| eq_ignore_case(value, category))
    }

    fn visit_min_price(&mut self, min_price: f64) -> Self::Output {
        self.item
            .price()
            .is_some_and(|price| price >= min_price)
    }

    fn visit_max_price(&mut self, max_price: f64) -> Self::Output {
        self.item
            .price()
            .is_some_and(|price| price <= max_price)
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}
