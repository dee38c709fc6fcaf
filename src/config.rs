//! Runtime configuration.
//!
//! Read once at startup from `MENU_SITE_*` environment variables. Every
//! setting has a default, so an empty environment serves the bundled menu
//! on port 3000.
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `MENU_SITE_ADDR` | `addr` | `0.0.0.0:3000` |
//! | `MENU_SITE_CATALOG` | `catalog` | bundled dataset |

use std::net::SocketAddr;
use std::path::PathBuf;

use ::config::Environment;
use serde::Deserialize;

use crate::error::Error;
use crate::menu::Catalog;

pub const ENV_PREFIX: &str = "MENU_SITE";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Config {
    /// Address the server listens on.
    pub addr: SocketAddr,
    /// Catalog JSON file. `None` serves the bundled dataset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    /// Builds a config from an environment source. Empty values count as unset.
    pub fn from_environment(env: Environment) -> Result<Self, Error> {
        let settings = ::config::Config::builder()
            .set_default("addr", DEFAULT_ADDR)?
            .add_source(env.ignore_empty(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Loads the configured catalog.
    pub fn load_catalog(&self) -> Result<Catalog, Error> {
        let catalog = match &self.catalog {
            Some(path) => Catalog::load(path)?,
            None => Catalog::bundled()?,
        };
        Ok(catalog)
    }
}
