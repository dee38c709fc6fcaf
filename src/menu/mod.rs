//! Menu data and the category lookup behind every category page.

mod catalog;
mod model;
mod resolver;

pub use catalog::{Catalog, CatalogError};
pub use model::{Category, MenuItem, Nutrition};
pub use resolver::{CategoryListing, NotFound, resolve};
