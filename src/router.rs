//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. Every handler receives a
//! clone of the router's state next to the request.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Registration methods return `self` so they chain naturally.
pub struct Router<S> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    fallback: Option<BoxedHandler<S>>,
    state: S,
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn with_state(state: S) -> Self {
        Self { routes: HashMap::new(), fallback: None, state }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax — `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics if the path is malformed or conflicts with an existing route.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Register a `GET` handler. `HEAD` requests are answered by it too.
    pub fn get(self, path: &str, handler: impl Handler<S>) -> Self {
        self.on(Method::Get, path, handler)
    }

    /// Handler for requests no route matches. Without one, they get a bare `404`.
    pub fn fallback(mut self, handler: impl Handler<S>) -> Self {
        self.fallback = Some(handler.into_boxed_handler());
        self
    }

    pub(crate) fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler<S>, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    /// Methods with a route for `path`, in wire order, for the `allow` header.
    fn allowed(&self, path: &str) -> Vec<&'static str> {
        let mut methods: Vec<&'static str> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(method, _)| method.as_str())
            .collect();
        if methods.contains(&"GET") && !methods.contains(&"HEAD") {
            methods.push("HEAD");
        }
        methods.sort_unstable();
        methods
    }

    /// Routes one request to its handler and runs it.
    pub(crate) async fn respond(&self, req: Request) -> Response {
        let method = req.method();
        let head = method == Method::Head;

        let found = self.lookup(method, req.path())
            .or_else(|| if head { self.lookup(Method::Get, req.path()) } else { None });

        let response = match found {
            Some((handler, params)) => {
                handler.call(req.with_params(params), self.state.clone()).await
            }
            None => {
                let allowed = self.allowed(req.path());
                if !allowed.is_empty() {
                    Response::builder()
                        .status(Status::MethodNotAllowed)
                        .header("allow", &allowed.join(", "))
                        .no_body()
                } else if let Some(fallback) = &self.fallback {
                    fallback.call(req, self.state.clone()).await
                } else {
                    Response::status(Status::NotFound)
                }
            }
        };

        if head { response.without_body() } else { response }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn echo(req: Request, greeting: &'static str) -> String {
        format!("{greeting} {}", req.param("name").unwrap_or("nobody"))
    }

    async fn missing(_req: Request, _greeting: &'static str) -> Response {
        Response::builder().status(Status::NotFound).text("nothing here")
    }

    fn get(path: &str) -> Request {
        Request::new(Method::Get, path)
    }

    #[tokio::test]
    async fn passes_params_and_state() {
        let router = Router::with_state("hello").get("/{name}", echo);
        let res = router.respond(get("/alice")).await;
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.body(), b"hello alice");
    }

    #[tokio::test]
    async fn static_routes_win_over_params() {
        let router = Router::with_state("hi")
            .get("/{name}", echo)
            .get("/healthz", |_req: Request, _s: &'static str| async { "ok" });
        assert_eq!(router.respond(get("/healthz")).await.body(), b"ok");
        assert_eq!(router.respond(get("/bob")).await.body(), b"hi bob");
    }

    #[tokio::test]
    async fn head_uses_get_route_without_body() {
        let router = Router::with_state("hello").get("/{name}", echo);
        let res = router.respond(Request::new(Method::Head, "/alice")).await;
        assert_eq!(res.status_code(), 200);
        assert!(res.body().is_empty());
        assert_eq!(res.header("content-type"), Some("text/plain; charset=utf-8"));
    }

    #[tokio::test]
    async fn other_method_on_known_path_is_405() {
        let router = Router::with_state("hello").get("/{name}", echo);
        let res = router.respond(Request::new(Method::Post, "/alice")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("GET, HEAD"));
    }

    #[tokio::test]
    async fn unmatched_path_uses_fallback() {
        let bare = Router::with_state("x").get("/", echo);
        assert_eq!(bare.respond(get("/a/b")).await.status_code(), 404);

        let router = Router::with_state("x").get("/", echo).fallback(missing);
        let res = router.respond(get("/a/b")).await;
        assert_eq!(res.status_code(), 404);
        assert_eq!(res.body(), b"nothing here");
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::with_state("x").get("/{a}", echo).get("/{b}", echo);
    }
}
