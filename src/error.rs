//! Unified error type.

use crate::menu::CatalogError;

/// The error type returned by the site's fallible startup and serving paths.
///
/// Page-level outcomes (an unknown category, a render failure) are expressed
/// as HTTP [`Response`](crate::Response) values, not as `Error`s. This type
/// surfaces what stops the process: bad configuration, an invalid catalog,
/// or failing to bind the listener.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
}
