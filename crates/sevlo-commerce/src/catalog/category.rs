//! Category filter for the product grid.

use crate::catalog::CatalogItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which slice of the catalog the product grid shows.
///
/// `All` is a distinguished value, not a category label: a catalog could
/// carry a category literally named "All" and it would still be filtered
/// as a normal category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// Every item in the catalog.
    #[default]
    All,
    /// Items whose category label matches exactly.
    Category(String),
}

impl CategoryFilter {
    /// Filter on a single category label.
    pub fn category(label: impl Into<String>) -> Self {
        Self::Category(label.into())
    }

    /// Check whether an item passes this filter.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => item.category == *label,
        }
    }

    /// Label shown on the filter button. `all_label` is the configured
    /// caption for the `All` filter (e.g. "Todos").
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            CategoryFilter::All => all_label,
            CategoryFilter::Category(label) => label,
        }
    }

    /// Check if this is the `All` filter.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(label) => write!(f, "{}", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn item(category: &str) -> CatalogItem {
        CatalogItem::new(1, "Cera Capilar en Barra", Money::new(3000), category, "")
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches(&item("Cabello")));
        assert!(CategoryFilter::All.matches(&item("Skincare")));
    }

    #[test]
    fn test_category_matches_exact_label() {
        let filter = CategoryFilter::category("Cabello");
        assert!(filter.matches(&item("Cabello")));
        assert!(!filter.matches(&item("cabello")));
        assert!(!filter.matches(&item("Skincare")));
    }

    #[test]
    fn test_category_named_all_is_not_the_sentinel() {
        let filter = CategoryFilter::category("All");
        assert!(!filter.is_all());
        assert!(!filter.matches(&item("Cabello")));
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryFilter::All.label("Todos"), "Todos");
        assert_eq!(CategoryFilter::category("Skincare").label("Todos"), "Skincare");
    }
}
