// ============================================================================
// Food Explorer Core - Catalog Service
// File: crates/foodexplorer-core/src/services/catalog_service.rs
// ============================================================================
//! Search filter and category partition for the home carousels

use tracing::debug;

use crate::domain::{Category, Dish};

/// Filtered catalog, one bucket per carousel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSections {
    pub meals: Vec<Dish>,
    pub desserts: Vec<Dish>,
    pub drinks: Vec<Dish>,
}

impl CatalogSections {
    pub fn bucket(&self, category: Category) -> &[Dish] {
        match category {
            Category::Meals => &self.meals,
            Category::Desserts => &self.desserts,
            Category::Drinks => &self.drinks,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<Dish> {
        match category {
            Category::Meals => &mut self.meals,
            Category::Desserts => &mut self.desserts,
            Category::Drinks => &mut self.drinks,
        }
    }

    /// Non-empty buckets in carousel order
    pub fn carousels(&self) -> impl Iterator<Item = (Category, &[Dish])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.bucket(category)))
            .filter(|(_, dishes)| !dishes.is_empty())
    }

    pub fn len(&self) -> usize {
        self.meals.len() + self.desserts.len() + self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filter `dishes` by `query` and partition the survivors by category.
///
/// A dish is kept when the query is empty, or when its name or any ingredient
/// name contains the query, ignoring case. Dishes whose category is not one of
/// the three known labels are dropped. Order follows `dishes`; the input is
/// never modified.
pub fn filter_dishes(dishes: &[Dish], query: &str) -> CatalogSections {
    let needle = query.to_lowercase();
    let mut sections = CatalogSections::default();

    for dish in dishes {
        if !needle.is_empty() && !dish.matches_lowercase(&needle) {
            continue;
        }

        match dish.category() {
            Some(category) => sections.bucket_mut(category).push(dish.clone()),
            None => debug!("Dropping dish {} with unrecognized category {:?}", dish.id, dish.category),
        }
    }

    sections
}

/// Placeholder shown instead of the carousels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Something to show, or still loading
    None,
    /// A search is active and nothing matched
    NoResults,
    /// The catalog itself came back empty
    NoDishesRegistered,
}

impl EmptyState {
    /// At most one state is reported. An empty catalog takes precedence over
    /// an empty search result, since no query could match anything.
    pub fn evaluate(catalog: &[Dish], loading: bool, query: &str, sections: &CatalogSections) -> Self {
        if !loading && catalog.is_empty() {
            return EmptyState::NoDishesRegistered;
        }

        if !query.is_empty() && sections.is_empty() {
            return EmptyState::NoResults;
        }

        EmptyState::None
    }
}
