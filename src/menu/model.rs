//! Menu value types.
//!
//! Both types deserialize straight from the catalog JSON. Slugs are stored
//! without a leading `/`; [`Category::href`] adds it when a link is needed.

use serde::Deserialize;

/// A named grouping of menu items, addressed by its slug.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(slug: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { slug: slug.into(), name: name.into(), icon: icon.into() }
    }

    /// Link target for this category's page, e.g. `/burgers`.
    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}

/// A single purchasable menu entry.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    /// Slug of the owning [`Category`].
    pub category: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub emoji: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub nutrition: Nutrition,
}

impl MenuItem {
    /// Price as shown on the menu: `$3.99`.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Nutrition facts for one serving. Macros are in grams and may be
/// fractional (`"fat": 9.5`).
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrition {
    /// Each fact with its name, in display order.
    pub fn facts(&self) -> [(&'static str, f64); 4] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ]
    }
}
