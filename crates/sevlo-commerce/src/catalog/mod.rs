//! Product catalog module.
//!
//! Contains the catalog item type, the category filter and the validated
//! catalog built from store configuration.

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod product;

pub use catalog::Catalog;
pub use category::CategoryFilter;
pub use product::CatalogItem;
