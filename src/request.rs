//! Incoming HTTP request type.
//!
//! The site never reads request bodies or headers, so only the method,
//! path and matched path parameters are kept.

use std::collections::HashMap;

use crate::method::Method;

/// An incoming HTTP request, stripped down to what a page handler can use.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), params: HashMap::new() }
    }

    /// Builds a request from the hyper request head.
    ///
    /// Returns `None` for a method outside [`Method`]. The query string is dropped.
    pub(crate) fn from_parts(parts: &http::request::Parts) -> Option<Self> {
        let method = parts.method.as_str().parse().ok()?;
        Some(Self::new(method, parts.uri.path()))
    }

    pub(crate) fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }

    /// Returns a named path parameter.
    ///
    /// For a route `/{category}`, `req.param("category")` on `/tacos` returns `Some("tacos")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
