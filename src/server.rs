//! HTTP server and graceful shutdown.
//!
//! # Graceful shutdown
//!
//! On **SIGTERM** (container orchestrators) or **Ctrl-C** (local dev) the
//! server:
//! 1. Immediately stops `listener.accept()` — no new connections are made.
//! 2. Lets every in-flight connection task run to completion.
//! 3. Returns from [`Server::serve`], which lets `main` exit cleanly.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;
use crate::status::Status;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the server to bind to `addr` when [`serve`](Server::serve)
    /// is called.
    pub fn bind(addr: SocketAddr) -> Self {
        Self { addr }
    }

    /// Starts accepting connections and dispatching them through `router`.
    ///
    /// Returns only after a full graceful shutdown (SIGTERM or Ctrl-C,
    /// followed by all in-flight requests completing).
    pub async fn serve<S>(self, router: Router<S>) -> Result<(), Error>
    where
        S: Clone + Send + Sync + 'static,
    {
        self.serve_with_shutdown(router, shutdown_signal()).await
    }

    /// Like [`serve`](Server::serve), but stops accepting once `shutdown`
    /// resolves instead of waiting for a process signal.
    pub async fn serve_with_shutdown<S, F>(self, router: Router<S>, shutdown: F) -> Result<(), Error>
    where
        S: Clone + Send + Sync + 'static,
        F: Future<Output = ()>,
    {
        let listener = TcpListener::bind(self.addr).await?;
        let local = listener.local_addr()?;

        // Shared by every connection task without copying the routing table.
        let router = Arc::new(router);

        info!(addr = %local, "menu-site listening");

        // JoinSet tracks every connection task so shutdown can wait for them.
        let mut tasks = tokio::task::JoinSet::new();

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // Check shutdown first so a signal stops accepting immediately,
                // even if more connections are queued.
                biased;

                () = &mut shutdown => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req).await }
                        });

                        // HTTP/1.1 or HTTP/2, whichever the client negotiates.
                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished connection tasks so the JoinSet stays small.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("menu-site stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one request and produces one response.
///
/// Every failure becomes a status code here, so hyper never sees an error.
async fn dispatch<S>(
    router: Arc<Router<S>>,
    req: hyper::Request<Incoming>,
) -> Result<http::Response<Full<Bytes>>, Infallible>
where
    S: Clone + Send + Sync + 'static,
{
    let started = Instant::now();
    let (parts, _body) = req.into_parts();

    let response = match Request::from_parts(&parts) {
        Some(req) => router.respond(req).await,
        None => Response::status(Status::MethodNotAllowed),
    };

    debug!(
        method = %parts.method,
        path = parts.uri.path(),
        status = response.status_code(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request",
    );

    Ok(response.into_inner())
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first shutdown signal the process receives.
///
/// On Unix this listens for both **SIGTERM** and **SIGINT** (Ctrl-C).
/// On Windows only Ctrl-C is available. If a handler cannot be installed
/// the failure is logged and that arm never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => { stream.recv().await; }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c   => {}
        () = sigterm  => {}
    }
}
