//! The immutable menu dataset.
//!
//! A [`Catalog`] is built once at startup and never changes afterwards.
//! Construction normalises slugs and checks the data-model invariants, so
//! everything downstream can trust the data it reads.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::model::{Category, MenuItem};

const BUNDLED: &str = include_str!("../../data/menu.json");

/// Reasons a dataset is rejected.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid category slug `{0}`")]
    InvalidSlug(String),

    #[error("duplicate category slug `{0}`")]
    DuplicateCategory(String),

    #[error("duplicate menu item id {0}")]
    DuplicateItem(u32),

    #[error("menu item {item} references unknown category `{category}`")]
    UnknownCategory { item: u32, category: String },

    #[error("menu item {item} has invalid price {price}")]
    InvalidPrice { item: u32, price: f64 },

    #[error("menu item {item} has invalid {fact} {value}")]
    InvalidNutrition { item: u32, fact: &'static str, value: f64 },
}

/// On-disk shape of a catalog.
#[derive(Deserialize)]
struct CatalogFile {
    brand: String,
    #[serde(default)]
    updated: Option<String>,
    #[serde(default)]
    site: Option<String>,
    #[serde(default)]
    restaurant: Option<String>,
    #[serde(default)]
    year: Option<u16>,
    categories: Vec<Category>,
    items: Vec<MenuItem>,
}

/// Validated, read-only collection of categories and menu items.
#[derive(Clone, Debug)]
pub struct Catalog {
    brand: String,
    updated: Option<String>,
    site: Option<String>,
    restaurant: Option<String>,
    year: Option<u16>,
    categories: Vec<Category>,
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, normalising slugs and enforcing the invariants:
    /// unique URL-safe slugs, unique item ids, every item pointing at a
    /// known category, and finite non-negative prices and nutrition facts.
    pub fn new(
        brand: impl Into<String>,
        mut categories: Vec<Category>,
        mut items: Vec<MenuItem>,
    ) -> Result<Self, CatalogError> {
        let mut slugs = HashSet::with_capacity(categories.len());
        for category in &mut categories {
            category.slug = canonical_slug(&category.slug).to_owned();
            if !is_valid_slug(&category.slug) {
                return Err(CatalogError::InvalidSlug(category.slug.clone()));
            }
            if !slugs.insert(category.slug.clone()) {
                return Err(CatalogError::DuplicateCategory(category.slug.clone()));
            }
        }

        let mut ids = HashSet::with_capacity(items.len());
        for item in &mut items {
            item.category = canonical_slug(&item.category).to_owned();
            if !ids.insert(item.id) {
                return Err(CatalogError::DuplicateItem(item.id));
            }
            if !slugs.contains(&item.category) {
                return Err(CatalogError::UnknownCategory {
                    item: item.id,
                    category: item.category.clone(),
                });
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(CatalogError::InvalidPrice { item: item.id, price: item.price });
            }
            if let Some((fact, value)) =
                item.nutrition.facts().into_iter().find(|(_, v)| !v.is_finite() || *v < 0.0)
            {
                return Err(CatalogError::InvalidNutrition { item: item.id, fact, value });
            }
        }

        Ok(Self {
            brand: brand.into(),
            updated: None,
            site: None,
            restaurant: None,
            year: None,
            categories,
            items,
        })
    }

    /// Sets the "prices as of" label shown on category pages.
    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = Some(updated.into());
        self
    }

    /// Sets the site name greeted on the home page, e.g. `Jackinthebox-menu.com`.
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Sets the restaurant the menu belongs to, e.g. `Jack in the Box`.
    pub fn with_restaurant(mut self, restaurant: impl Into<String>) -> Self {
        self.restaurant = Some(restaurant.into());
        self
    }

    /// Sets the copyright year in the footer.
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_slice(bytes)?;
        let mut catalog = Self::new(file.brand, file.categories, file.items)?;
        catalog.updated = file.updated;
        catalog.site = file.site;
        catalog.restaurant = file.restaurant;
        catalog.year = file.year;
        Ok(catalog)
    }

    /// Reads and validates a catalog JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path)
            .map_err(|source| CatalogError::Read { path: path.to_owned(), source })?;
        Self::from_json(&bytes)
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED.as_bytes())
    }

    pub fn brand(&self) -> &str { &self.brand }
    pub fn updated(&self) -> Option<&str> { self.updated.as_deref() }
    pub fn year(&self) -> Option<u16> { self.year }

    /// Site name, falling back to the brand.
    pub fn site(&self) -> &str {
        self.site.as_deref().unwrap_or(&self.brand)
    }

    /// Restaurant name, falling back to the brand.
    pub fn restaurant(&self) -> &str {
        self.restaurant.as_deref().unwrap_or(&self.brand)
    }
    pub fn categories(&self) -> &[Category] { &self.categories }
    pub fn items(&self) -> &[MenuItem] { &self.items }

    /// Exact, case-sensitive slug lookup.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }
}

/// Slugs become URL path segments: non-empty, ASCII letters, digits, `-`, `_`.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Strips the leading `/` some data sources put on slugs.
fn canonical_slug(slug: &str) -> &str {
    slug.strip_prefix('/').unwrap_or(slug)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use super::*;
    use crate::menu::model::Nutrition;

    pub(crate) fn item(id: u32, category: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            category: category.to_owned(),
            name: format!("Item {id}"),
            description: String::new(),
            price,
            emoji: "🍽️".to_owned(),
            tags: Vec::new(),
            nutrition: Nutrition::default(),
        }
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.categories().is_empty());
        assert!(!catalog.items().is_empty());
        assert!(catalog.updated().is_some());
        assert_eq!(catalog.restaurant(), "Jack in the Box");
        assert_eq!(catalog.site(), "Jackinthebox-menu.com");
        assert_eq!(catalog.year(), Some(2025));
        assert!(catalog.categories().iter().all(|c| !c.slug.starts_with('/')));
    }

    #[test]
    fn prefixed_slugs_are_normalised() {
        let catalog = Catalog::new(
            "Test",
            vec![Category::new("/burgers", "Burgers", "🍔")],
            vec![item(1, "burgers", 3.99), item(2, "/burgers", 4.49)],
        )
        .unwrap();
        assert_eq!(catalog.categories()[0].slug, "burgers");
        assert!(catalog.items().iter().all(|i| i.category == "burgers"));
        assert!(catalog.category("burgers").is_some());
    }

    #[test]
    fn rejects_duplicate_slug() {
        let err = Catalog::new(
            "Test",
            vec![Category::new("tacos", "Tacos", "🌮"), Category::new("/tacos", "More Tacos", "🌮")],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(s) if s == "tacos"));
    }

    #[test]
    fn rejects_slugs_unfit_for_urls() {
        for slug in ["", "/", "a/b", "two words", "caf\u{e9}", "x\"y"] {
            let err = Catalog::new("Test", vec![Category::new(slug, "X", "x")], vec![]).unwrap_err();
            assert!(matches!(err, CatalogError::InvalidSlug(_)), "slug {slug:?}");
        }
    }

    #[test]
    fn rejects_duplicate_item_id() {
        let err = Catalog::new(
            "Test",
            vec![Category::new("tacos", "Tacos", "🌮")],
            vec![item(1, "tacos", 1.49), item(1, "tacos", 1.99)],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateItem(1)));
    }

    #[test]
    fn rejects_orphan_item() {
        let err = Catalog::new(
            "Test",
            vec![Category::new("tacos", "Tacos", "🌮")],
            vec![item(9, "burgers", 3.99)],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { item: 9, ref category } if category == "burgers"));
    }

    #[test]
    fn rejects_negative_and_nan_prices() {
        for price in [-0.01, f64::NAN, f64::INFINITY] {
            let err = Catalog::new(
                "Test",
                vec![Category::new("tacos", "Tacos", "🌮")],
                vec![item(3, "tacos", price)],
            )
            .unwrap_err();
            assert!(matches!(err, CatalogError::InvalidPrice { item: 3, .. }));
        }
    }

    #[test]
    fn rejects_negative_nutrition() {
        let mut bad = item(4, "tacos", 1.49);
        bad.nutrition.fat = -1.5;
        let err = Catalog::new("Test", vec![Category::new("tacos", "Tacos", "🌮")], vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidNutrition { item: 4, fact: "fat", .. }));
    }

    #[test]
    fn fractional_nutrition_loads() {
        let catalog = Catalog::from_json(
            br#"{"brand":"Diner","categories":[{"slug":"sides","name":"Sides","icon":"x"}],
                "items":[{"id":1,"category":"sides","name":"Onion Rings","description":"",
                "price":2.49,"emoji":"x","nutrition":{"calories":480,"protein":6,"carbs":52.5,"fat":9.5}}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.items()[0].nutrition.fat, 9.5);
        assert_eq!(catalog.items()[0].nutrition.carbs, 52.5);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"brand":"Diner","categories":[{{"slug":"/pie","name":"Pie","icon":"🥧"}}],
                "items":[{{"id":1,"category":"pie","name":"Apple Pie","description":"Warm",
                "price":2.0,"emoji":"🥧","tags":["Sweet"],
                "nutrition":{{"calories":300,"protein":3,"carbs":40,"fat":14}}}}]}}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.brand(), "Diner");
        assert_eq!(catalog.updated(), None);
        assert_eq!(catalog.year(), None);
        assert_eq!(catalog.site(), "Diner");
        assert_eq!(catalog.restaurant(), "Diner");
        assert_eq!(catalog.items()[0].tags, ["Sweet"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::load(Path::new("/nonexistent/menu.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/menu.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json(b"{\"brand\":").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
