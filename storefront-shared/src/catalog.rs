//! # Catalog View
//!
//! The product grid shows one derived set: cards matching the category filter
//! *and* the search query, in the selected order. The set is recomputed from
//! the full card list whenever any control changes, so filter and search never
//! overwrite each other.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::models::ProductCard;

/// Order options of the sort selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum SortOrder {
    /// Server order.
    #[default]
    #[strum(serialize = "")]
    #[serde(rename = "")]
    Server,
    /// Title, ascending, case-insensitive.
    #[strum(serialize = "title")]
    #[serde(rename = "title")]
    Title,
    /// Price, cheapest first.
    #[strum(serialize = "price-low")]
    #[serde(rename = "price-low")]
    PriceLow,
    /// Price, most expensive first.
    #[strum(serialize = "price-high")]
    #[serde(rename = "price-high")]
    PriceHigh,
}

impl SortOrder {
    /// Parse a selector value; unknown values keep server order.
    #[must_use]
    pub fn from_selector(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    fn compare(self, a: &ProductCard, b: &ProductCard) -> Ordering {
        match self {
            Self::Server => Ordering::Equal,
            Self::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            Self::PriceLow => a.price.total_cmp(&b.price),
            Self::PriceHigh => b.price.total_cmp(&a.price),
        }
    }
}

/// Current state of the filter, search and sort controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogView {
    /// Selected category; empty shows every category.
    pub category: String,
    /// Free-text search over titles; empty matches every title.
    pub query: String,
    pub sort: SortOrder,
}

/// Card counts displayed next to the controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogCounts {
    pub visible: usize,
    pub total: usize,
}

impl CatalogView {
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Case-insensitive substring match of the selected category.
    #[must_use]
    pub fn matches_category(&self, card: &ProductCard) -> bool {
        let needle = self.category.trim().to_lowercase();
        needle.is_empty() || card.category.to_lowercase().contains(&needle)
    }

    /// Case-insensitive substring match of the query against the title.
    #[must_use]
    pub fn matches_query(&self, card: &ProductCard) -> bool {
        let needle = self.query.trim().to_lowercase();
        needle.is_empty() || card.title.to_lowercase().contains(&needle)
    }

    /// Cards to display, filtered and sorted. The sort is stable: ties keep
    /// their relative order from `cards`.
    #[must_use]
    pub fn visible<'a>(&self, cards: &'a [ProductCard]) -> Vec<&'a ProductCard> {
        let mut visible: Vec<&ProductCard> = cards
            .iter()
            .filter(|card| self.matches_category(card) && self.matches_query(card))
            .collect();
        let sort = self.sort;
        visible.sort_by(|a, b| sort.compare(a, b));
        visible
    }

    #[must_use]
    pub fn counts(&self, cards: &[ProductCard]) -> CatalogCounts {
        CatalogCounts {
            visible: cards
                .iter()
                .filter(|card| self.matches_category(card) && self.matches_query(card))
                .count(),
            total: cards.len(),
        }
    }
}
