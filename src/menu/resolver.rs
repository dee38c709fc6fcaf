//! Category lookup for a requested page slug.

use super::catalog::Catalog;
use super::model::{Category, MenuItem};

/// No category answers to the requested slug.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no menu category `{slug}`")]
pub struct NotFound {
    pub slug: String,
}

/// A category together with its items, in catalog order.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryListing<'a> {
    pub category: &'a Category,
    pub items: Vec<&'a MenuItem>,
}

/// Resolves a URL slug to its category and that category's items.
///
/// The slug is untrusted path text and must match a category slug exactly,
/// including case. A known category with no items resolves to an empty
/// listing, not an error.
pub fn resolve<'a>(catalog: &'a Catalog, slug: &str) -> Result<CategoryListing<'a>, NotFound> {
    let category = catalog
        .category(slug)
        .ok_or_else(|| NotFound { slug: slug.to_owned() })?;

    let items = catalog
        .items()
        .iter()
        .filter(|item| item.category == category.slug)
        .collect();

    Ok(CategoryListing { category, items })
}
