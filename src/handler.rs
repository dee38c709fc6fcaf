//! Handler trait and type erasure.
//!
//! # How async handlers are stored
//!
//! The router holds handlers of *different* types in a single
//! `HashMap<Method, Tree>`, so each one is hidden behind a trait object
//! (`dyn ErasedHandler<S>`). `S` is the application state every handler
//! receives alongside the request; for the site that is [`Site`](crate::Site).
//!
//! ```text
//! async fn category(req: Request, site: Site) -> Response { … }
//!        ↓ router.get("/{category}", category)
//! category.into_boxed_handler()                    ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(category))                    ← stored as BoxedHandler<S>
//!        ↓
//! handler.call(req, state.clone())  per request    ← one vtable dispatch
//!        ↓
//! Box::pin(async { category(req, site).await.into_response() })
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Internal types ────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler<S> {
    fn call(&self, req: Request, state: S) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
#[doc(hidden)]
pub type BoxedHandler<S> = Arc<dyn ErasedHandler<S> + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// Automatically satisfied for any `async fn` with the signature:
///
/// ```text
/// async fn name(req: Request, state: S) -> impl IntoResponse
/// ```
///
/// The trait is sealed: only the blanket impl below can satisfy it.
pub trait Handler<S>: private::Sealed<S> + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler<S>;
}

mod private {
    pub trait Sealed<S> {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, Fut, R, S> private::Sealed<S> for F
where
    F: Fn(Request, S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R, S> Handler<S> for F
where
    F: Fn(Request, S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
    S: 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler<S> {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Bridges a concrete handler `F` into the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R, S> ErasedHandler<S> for FnHandler<F>
where
    F: Fn(Request, S) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request, state: S) -> BoxFuture {
        let fut = (self.0)(req, state);
        Box::pin(async move { fut.await.into_response() })
    }
}
