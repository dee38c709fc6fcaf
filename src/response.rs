//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Build a [`Response`] in your handler and return it. The server turns it
//! into a hyper response on the way out.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http_body_util::Full;
use tracing::warn;

use crate::status::Status;

// ── ContentType ───────────────────────────────────────────────────────────────

/// Content-type values the site serves.
pub enum ContentType {
    Html, // text/html; charset=utf-8
    Text, // text/plain; charset=utf-8
}

impl ContentType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK, no custom headers needed)
///
/// ```rust
/// use menu_site::{Response, Status};
///
/// Response::html("<h1>Burgers</h1>");
/// Response::text("ok");
/// Response::status(Status::NotFound);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use menu_site::{ContentType, Response, Status};
///
/// Response::builder()
///     .status(Status::NotFound)
///     .html("<h1>Menu Item Not Found</h1>");
///
/// Response::builder()
///     .header("cache-control", "no-store")
///     .bytes(ContentType::Text, b"ok".to_vec());
/// ```
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) status: u16,
}

impl Response {
    /// `200 OK` — `text/html; charset=utf-8`.
    pub fn html(body: impl Into<String>) -> Self {
        Self::builder().html(body)
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::builder().text(body)
    }

    /// Response with no body.
    pub fn status(code: Status) -> Self {
        Self { body: Vec::new(), headers: Vec::new(), status: code.into() }
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: Status::Ok.into() }
    }

    pub fn status_code(&self) -> u16 { self.status }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Drops the body but keeps the headers, for answering `HEAD`.
    pub(crate) fn without_body(mut self) -> Self {
        self.body.clear();
        self
    }

    /// Converts into the hyper response type. Headers that are not valid
    /// HTTP are logged and skipped rather than failing the whole response.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = http::StatusCode::from_u16(self.status)
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        let headers = res.headers_mut();
        for (name, value) in self.headers {
            match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(&value)) {
                (Ok(name), Ok(value)) => { headers.append(name, value); }
                _ => warn!(header = %name, "dropping invalid response header"),
            }
        }
        res
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `Status::Ok` (200).
/// Terminated by a typed body method — you always know what you're sending.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: u16,
}

impl ResponseBuilder {
    pub fn status(mut self, code: Status) -> Self {
        self.status = code.into();
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with an HTML body (`text/html; charset=utf-8`).
    pub fn html(self, body: impl Into<String>) -> Response {
        self.bytes(ContentType::Html, body.into().into_bytes())
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.bytes(ContentType::Text, body.into().into_bytes())
    }

    /// Terminate with a typed body.
    pub fn bytes(self, content_type: ContentType, body: Vec<u8>) -> Response {
        let mut headers = vec![("content-type".to_owned(), content_type.as_str().to_owned())];
        headers.extend(self.headers);
        Response { body, headers, status: self.status }
    }

    /// Terminate with no body (e.g. `Status::MethodNotAllowed` with an `allow` header).
    pub fn no_body(self) -> Response {
        Response { body: Vec::new(), headers: self.headers, status: self.status }
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Implement on your own types to return them directly from handlers.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response { Response::text(self) }
}

impl IntoResponse for String {
    fn into_response(self) -> Response { Response::text(self) }
}

/// Return a [`Status`] directly from a handler: `return Status::NotFound`
impl IntoResponse for Status {
    fn into_response(self) -> Response { Response::status(self) }
}
