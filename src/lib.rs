//! # menu-site
//!
//! A restaurant menu website: a home page listing the menu categories and
//! one page per category with each item's price, description, tags and
//! nutrition facts.
//!
//! The menu is a [`Catalog`](menu::Catalog): validated once at startup,
//! immutable afterwards, shared by every request through [`Site`]. A
//! category page is one lookup, [`menu::resolve`], from the URL slug to the
//! category and its items; an unknown slug renders the not-found page.
//!
//! Underneath sits a small HTTP layer: radix-tree routing via [`matchit`],
//! hyper on tokio, graceful shutdown on SIGTERM / Ctrl-C.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use menu_site::{Config, menu::Catalog, Server, Site, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), menu_site::Error> {
//!     let config = Config::from_env()?;
//!     let site = Site::new(Catalog::bundled()?);
//!     Server::bind(config.addr).serve(app(site)).await
//! }
//! ```

mod config;
mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod site;
mod status;

pub mod health;
pub mod menu;
pub mod pages;

pub use crate::config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use site::{Site, app, run};
pub use status::Status;
