//! Application state, route table and the `run` entry point.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::error::Error;
use crate::menu::Catalog;
use crate::router::Router;
use crate::server::Server;
use crate::{health, pages};

/// State handed to every handler: the immutable catalog behind an `Arc`.
#[derive(Clone)]
pub struct Site {
    catalog: Arc<Catalog>,
}

impl Site {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// The site's routes. Anything unmatched renders the not-found page.
pub fn app(site: Site) -> Router<Site> {
    Router::with_state(site)
        .get("/", pages::home)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
        .get("/{category}", pages::category)
        .fallback(pages::not_found)
}

/// Loads the configured catalog and serves the site until shutdown.
pub async fn run(config: Config) -> Result<(), Error> {
    let catalog = config.load_catalog()?;
    info!(
        brand = catalog.brand(),
        categories = catalog.categories().len(),
        items = catalog.items().len(),
        source = %config.catalog.as_ref().map_or("bundled".into(), |p| p.display().to_string()),
        "catalog loaded",
    );

    Server::bind(config.addr).serve(app(Site::new(catalog))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Category, MenuItem, Nutrition};
    use crate::{Method, Request, Response};

    fn site() -> Site {
        let item = |id, category: &str, name: &str, price| MenuItem {
            id,
            category: category.to_owned(),
            name: name.to_owned(),
            description: format!("{name}, freshly made."),
            price,
            emoji: "🍔".to_owned(),
            tags: vec!["Classic".to_owned()],
            nutrition: Nutrition { calories: 500.0, protein: 20.0, carbs: 40.0, fat: 25.0 },
        };
        let catalog = Catalog::new(
            "Test Diner",
            vec![
                Category::new("/burgers", "Burgers", "🍔"),
                Category::new("/tacos", "Tacos", "🌮"),
                Category::new("/shakes", "Shakes", "🥤"),
            ],
            vec![item(1, "burgers", "Jumbo Jack", 3.99), item(2, "tacos", "Regular Taco", 1.49)],
        )
        .unwrap()
        .with_updated("June 4, 2025");
        Site::new(catalog)
    }

    async fn send(method: Method, path: &str) -> Response {
        app(site()).respond(Request::new(method, path)).await
    }

    fn body(res: &Response) -> &str {
        std::str::from_utf8(res.body()).unwrap()
    }

    #[tokio::test]
    async fn home_lists_categories() {
        let res = send(Method::Get, "/").await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("content-type"), Some("text/html; charset=utf-8"));
        for href in ["href=\"/burgers\"", "href=\"/tacos\"", "href=\"/shakes\""] {
            assert!(body(&res).contains(href), "missing {href}");
        }
    }

    #[tokio::test]
    async fn category_page_shows_only_its_items() {
        let res = send(Method::Get, "/burgers").await;
        assert_eq!(res.status_code(), 200);
        let html = body(&res);
        assert!(html.contains("Jumbo Jack"));
        assert!(html.contains("$3.99"));
        assert!(!html.contains("Regular Taco"));
    }

    #[tokio::test]
    async fn empty_category_is_not_an_error() {
        let res = send(Method::Get, "/shakes").await;
        assert_eq!(res.status_code(), 200);
        assert!(body(&res).contains("No items found in this category."));
    }

    #[tokio::test]
    async fn unknown_category_renders_not_found_page() {
        for path in ["/bogus-category", "/Burgers", "/burgers/", "/burgers/extra"] {
            let res = send(Method::Get, path).await;
            assert_eq!(res.status_code(), 404, "path {path}");
            assert!(body(&res).contains("Menu Item Not Found"), "path {path}");
        }
    }

    #[tokio::test]
    async fn head_has_no_body() {
        let res = send(Method::Head, "/tacos").await;
        assert_eq!(res.status_code(), 200);
        assert!(res.body().is_empty());
    }

    #[tokio::test]
    async fn writes_are_rejected() {
        let res = send(Method::Post, "/tacos").await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("GET, HEAD"));
    }

    #[tokio::test]
    async fn writes_to_unknown_category_are_rejected_too() {
        // `/bogus-category` still matches the `/{category}` pattern.
        let res = send(Method::Post, "/bogus-category").await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("GET, HEAD"));

        let res = send(Method::Post, "/burgers/extra").await;
        assert_eq!(res.status_code(), 404);
        assert!(body(&res).contains("Menu Item Not Found"));
    }

    #[tokio::test]
    async fn health_endpoints() {
        assert_eq!(send(Method::Get, "/healthz").await.body(), b"ok");
        assert_eq!(send(Method::Get, "/readyz").await.status_code(), 200);
    }

    #[tokio::test]
    async fn same_page_twice_is_identical() {
        let first = send(Method::Get, "/tacos").await;
        let second = send(Method::Get, "/tacos").await;
        assert_eq!(first.body(), second.body());
    }
}
