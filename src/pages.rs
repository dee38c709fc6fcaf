//! HTML pages.
//!
//! Each page is an askama template fed by a small view model built from the
//! catalog. Templates live in `templates/` and escape every interpolated
//! value; the only raw output is category links, whose slugs the catalog
//! has already restricted to URL-safe characters.

use askama::Template;
use tracing::{debug, error};

use crate::menu::{Catalog, Category, CategoryListing, MenuItem, resolve};
use crate::{Request, Response, Site, Status};

// ── View models ───────────────────────────────────────────────────────────────

pub struct CategoryCard {
    pub href: String,
    pub name: String,
    pub icon: String,
}

impl From<&Category> for CategoryCard {
    fn from(c: &Category) -> Self {
        Self { href: c.href(), name: c.name.clone(), icon: c.icon.clone() }
    }
}

pub struct ItemCard {
    pub name: String,
    pub description: String,
    pub price: String,
    pub emoji: String,
    pub tags: Vec<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl From<&MenuItem> for ItemCard {
    fn from(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price_label(),
            emoji: item.emoji.clone(),
            tags: item.tags.clone(),
            calories: item.nutrition.calories,
            protein: item.nutrition.protein,
            carbs: item.nutrition.carbs,
            fat: item.nutrition.fat,
        }
    }
}

// ── Templates ─────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: String,
    pub brand: String,
    pub copyright: String,
    pub heading: String,
    pub site: String,
    pub restaurant: String,
    pub categories: Vec<CategoryCard>,
}

impl HomePage {
    pub fn new(catalog: &Catalog) -> Self {
        let heading = match catalog.updated() {
            Some(updated) => format!("{} Prices – {updated}", catalog.brand()),
            None => format!("{} Prices", catalog.brand()),
        };
        Self {
            title: heading.clone(),
            brand: catalog.brand().to_owned(),
            copyright: copyright(catalog),
            heading,
            site: catalog.site().to_owned(),
            restaurant: catalog.restaurant().to_owned(),
            categories: catalog.categories().iter().map(CategoryCard::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryPage {
    pub title: String,
    pub brand: String,
    pub copyright: String,
    pub icon: String,
    pub name: String,
    pub name_lower: String,
    pub updated_note: String,
    pub items: Vec<ItemCard>,
}

impl CategoryPage {
    pub fn new(catalog: &Catalog, listing: &CategoryListing<'_>) -> Self {
        let category = listing.category;
        Self {
            title: format!("{} – {}", category.name, catalog.brand()),
            brand: catalog.brand().to_owned(),
            copyright: copyright(catalog),
            icon: category.icon.clone(),
            name: category.name.clone(),
            name_lower: category.name.to_lowercase(),
            updated_note: catalog.updated()
                .map(|u| format!(" Updated as of {u}."))
                .unwrap_or_default(),
            items: listing.items.iter().copied().map(ItemCard::from).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub title: String,
    pub brand: String,
    pub copyright: String,
}

impl NotFoundPage {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            title: "Menu Item Not Found".to_owned(),
            brand: catalog.brand().to_owned(),
            copyright: copyright(catalog),
        }
    }
}

/// Copyright holder line for the footer: `2025 Jack in the Box Menu`.
fn copyright(catalog: &Catalog) -> String {
    match catalog.year() {
        Some(year) => format!("{year} {}", catalog.brand()),
        None => catalog.brand().to_owned(),
    }
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn home(_req: Request, site: Site) -> Response {
    render(&HomePage::new(site.catalog()), Status::Ok)
}

/// `GET /{category}`
pub async fn category(req: Request, site: Site) -> Response {
    let slug = req.param("category").unwrap_or_default();
    match resolve(site.catalog(), slug) {
        Ok(listing) => render(&CategoryPage::new(site.catalog(), &listing), Status::Ok),
        Err(e) => {
            debug!(error = %e, "category lookup missed");
            not_found_page(site.catalog())
        }
    }
}

/// Fallback for every path no route matches.
pub async fn not_found(_req: Request, site: Site) -> Response {
    not_found_page(site.catalog())
}

fn not_found_page(catalog: &Catalog) -> Response {
    render(&NotFoundPage::new(catalog), Status::NotFound)
}

fn render(page: &impl Template, status: Status) -> Response {
    match page.render() {
        Ok(html) => Response::builder().status(status).html(html),
        Err(e) => {
            error!(error = %e, "page render failed");
            Response::status(Status::InternalServerError)
        }
    }
}
