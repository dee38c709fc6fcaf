//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Is there a menu to serve? |

use crate::{Request, Response, Site, Status};

/// Always `200 OK` with body `"ok"`. If the process can answer HTTP at all,
/// it is alive.
pub async fn liveness(_req: Request, _site: Site) -> Response {
    Response::text("ok")
}

/// `200 OK` once the catalog has at least one category, `503` otherwise.
pub async fn readiness(_req: Request, site: Site) -> Response {
    let categories = site.catalog().categories().len();
    if categories == 0 {
        return Response::status(Status::ServiceUnavailable);
    }
    Response::text(format!("ready ({categories} categories)"))
}
