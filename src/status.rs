//! HTTP status codes as a typed enum.
//!
//! Only the codes the site actually sends. Use [`Status`] anywhere a status
//! code is accepted: `Response::status()`, `Response::builder().status()`,
//! or as a bare handler return value.
//!
//! ```rust
//! use menu_site::{Response, Status};
//!
//! Response::status(Status::NotFound);
//!
//! Response::builder()
//!     .status(Status::NotFound)
//!     .html("<h1>Menu Item Not Found</h1>");
//! ```

/// Status codes produced by the site's handlers and router.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    NotFound,            // 404
    MethodNotAllowed,    // 405
    InternalServerError, // 500
    ServiceUnavailable,  // 503
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        match s {
            Status::Ok                  => 200,
            Status::NotFound            => 404,
            Status::MethodNotAllowed    => 405,
            Status::InternalServerError => 500,
            Status::ServiceUnavailable  => 503,
        }
    }
}
