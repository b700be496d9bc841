//! The validated, read-only product catalog.

use std::collections::HashSet;

use crate::catalog::{CatalogItem, CategoryFilter};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Serialize;

/// Products offered by the storefront, in display order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Catalog {
    categories: Vec<String>,
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from configured categories and items.
    ///
    /// Returns an error if:
    /// - Any item fails [`CatalogItem::validate`]
    /// - Two items share an id
    /// - A category label is listed twice
    /// - `categories` is non-empty and an item uses a label not in it
    pub fn new(categories: Vec<String>, items: Vec<CatalogItem>) -> Result<Self, CommerceError> {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            if !seen_categories.insert(category.as_str()) {
                return Err(CommerceError::Config(format!(
                    "category '{}' is listed more than once",
                    category
                )));
            }
        }

        let mut seen_ids = HashSet::new();
        for item in &items {
            item.validate()?;

            if !seen_ids.insert(item.id) {
                return Err(CommerceError::DuplicateProduct(item.id));
            }

            if !categories.is_empty() && !seen_categories.contains(item.category.as_str()) {
                return Err(CommerceError::Config(format!(
                    "product {} uses unknown category '{}'",
                    item.id, item.category
                )));
            }
        }

        Ok(Self { categories, items })
    }

    /// Look up an item by id.
    pub fn get(&self, id: ProductId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Configured category labels, in display order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Filter buttons for the product grid: `All` first, then one per
    /// configured category.
    pub fn filters(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().cloned().map(CategoryFilter::Category))
            .collect()
    }

    /// Items passing `filter`, in catalog order.
    pub fn filter<'a>(&'a self, filter: &'a CategoryFilter) -> impl Iterator<Item = &'a CatalogItem> + 'a {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn item(id: u32, category: &str) -> CatalogItem {
        CatalogItem::new(id, format!("Product {}", id), Money::new(1000), category, "")
    }

    fn categories() -> Vec<String> {
        vec!["Skincare".to_string(), "Cabello".to_string()]
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new(categories(), vec![item(1, "Skincare"), item(2, "Cabello")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().category, "Cabello");
        assert!(catalog.get(ProductId::new(3)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(categories(), vec![item(1, "Skincare"), item(1, "Cabello")]);
        assert!(matches!(result, Err(CommerceError::DuplicateProduct(id)) if id == ProductId::new(1)));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result = Catalog::new(categories(), vec![item(1, "Maquillaje")]);
        assert!(matches!(result, Err(CommerceError::Config(_))));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let labels = vec!["Skincare".to_string(), "Skincare".to_string()];
        assert!(matches!(Catalog::new(labels, vec![]), Err(CommerceError::Config(_))));
    }

    #[test]
    fn test_empty_category_list_accepts_any_label() {
        let catalog = Catalog::new(vec![], vec![item(1, "Maquillaje")]).unwrap();
        assert_eq!(catalog.filters(), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_invalid_item_rejected() {
        let mut bad = item(1, "Skincare");
        bad.price = Money::new(-100);
        assert!(matches!(
            Catalog::new(categories(), vec![bad]),
            Err(CommerceError::ValidationError(_))
        ));
    }

    #[test]
    fn test_filters_start_with_all() {
        let catalog = Catalog::new(categories(), vec![]).unwrap();
        assert_eq!(
            catalog.filters(),
            vec![
                CategoryFilter::All,
                CategoryFilter::category("Skincare"),
                CategoryFilter::category("Cabello"),
            ]
        );
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = Catalog::new(
            categories(),
            vec![item(3, "Cabello"), item(1, "Skincare"), item(2, "Cabello")],
        )
        .unwrap();

        let hair = CategoryFilter::category("Cabello");
        let ids: Vec<u32> = catalog.filter(&hair).map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![3, 2]);

        let all: Vec<u32> = catalog.filter(&CategoryFilter::All).map(|i| i.id.get()).collect();
        assert_eq!(all, vec![3, 1, 2]);
    }
}
