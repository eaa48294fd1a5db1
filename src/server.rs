//! Bundled hyper host and graceful shutdown.
//!
//! [`Router`] only decides which handler runs. This module owns everything
//! around it: accepting connections, turning a hyper request into a
//! [`Request`], answering unmatched requests with `404`, and writing the
//! [`Response`] back.
//!
//! # Graceful shutdown
//!
//! On **SIGTERM** or **SIGINT** (or when the future passed to
//! [`Server::serve_with_shutdown`] resolves) the server:
//! 1. Stops calling `listener.accept()`, so no new connections are taken.
//! 2. Lets every in-flight connection task run to completion.
//! 3. Returns.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Pause after a failed `accept` (e.g. EMFILE) before trying again.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

enum Bind {
    Addr(SocketAddr),
    Listener(TcpListener),
}

/// The HTTP server.
pub struct Server {
    bind: Bind,
}

impl Server {
    /// Configures the server to bind to `addr` when it starts serving.
    ///
    /// ```rust
    /// use seamux::Server;
    /// let server = Server::bind("0.0.0.0:3000")?;
    /// # Ok::<(), seamux::Error>(())
    /// ```
    pub fn bind(addr: &str) -> Result<Self, Error> {
        let parsed = addr
            .parse::<SocketAddr>()
            .map_err(|source| Error::InvalidAddr { addr: addr.to_owned(), source })?;
        Ok(Self { bind: Bind::Addr(parsed) })
    }

    /// Serves on an already bound listener (e.g. port `0` in tests).
    pub fn from_listener(listener: TcpListener) -> Self {
        Self { bind: Bind::Listener(listener) }
    }

    /// Accepts connections and dispatches them through `router` until
    /// SIGTERM or Ctrl-C, then drains in-flight requests.
    pub async fn serve(self, router: Router) -> Result<(), Error> {
        self.serve_with_shutdown(router, shutdown_signal()).await
    }

    /// Like [`serve`](Server::serve), but stops when `signal` resolves.
    pub async fn serve_with_shutdown<F>(self, router: Router, signal: F) -> Result<(), Error>
    where
        F: Future<Output = ()>,
    {
        let listener = match self.bind {
            Bind::Addr(addr) => TcpListener::bind(addr).await?,
            Bind::Listener(listener) => listener,
        };
        let local_addr = listener.local_addr()?;

        // Shared read-only by every connection task.
        let router = Arc::new(router);

        info!(addr = %local_addr, routes = router.len(), "seamux listening");

        let mut tasks = JoinSet::new();
        tokio::pin!(signal);

        loop {
            tokio::select! {
                // Check shutdown first so a signal stops accepting at once,
                // even with connections queued.
                biased;

                () = &mut signal => {
                    info!(in_flight = tasks.len(), "shutdown signal received, draining connections");
                    break;
                }

                res = listener.accept() => {
                    let (stream, remote_addr) = match res {
                        Ok(v) => v,
                        Err(e) => {
                            error!("accept error: {e}");
                            tokio::time::sleep(ACCEPT_BACKOFF).await;
                            continue;
                        }
                    };

                    let router = Arc::clone(&router);
                    let io = TokioIo::new(stream);

                    tasks.spawn(async move {
                        // Called once per request on the connection.
                        let svc = service_fn(move |req| {
                            let router = Arc::clone(&router);
                            async move { dispatch(router, req, remote_addr).await }
                        });

                        if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                            .serve_connection(io, svc)
                            .await
                        {
                            error!(peer = %remote_addr, "connection error: {e}");
                        }
                    });
                }

                // Reap finished tasks so the set does not grow on long-running servers.
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }

        while tasks.join_next().await.is_some() {}

        info!("seamux stopped");
        Ok(())
    }
}

// ── Request dispatch ──────────────────────────────────────────────────────────

/// Routes one hyper request and produces one hyper response.
///
/// Never fails: an unreadable body is `400`, a miss is `404`.
async fn dispatch(
    router: Arc<Router>,
    req: hyper::Request<Incoming>,
    remote_addr: SocketAddr,
) -> Result<http::Response<Full<Bytes>>, Infallible> {
    let (parts, body) = req.into_parts();

    let body = match body.collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!(peer = %remote_addr, "failed to read request body: {e}");
            let mut res = Response::new();
            res.set_status(StatusCode::BAD_REQUEST);
            return Ok(res.into_http());
        }
    };

    let mut request = Request::from_parts(&parts, body.to_vec());
    let mut response = Response::new();

    if !router.serve(&mut response, &mut request) {
        debug!(method = %parts.method, path = parts.uri.path(), "not found");
        response.set_status(StatusCode::NOT_FOUND);
    }

    Ok(response.into_http())
}

// ── Shutdown signal ───────────────────────────────────────────────────────────

/// Resolves on the first SIGTERM or SIGINT (Ctrl-C only on non-Unix).
///
/// If a handler cannot be installed that arm never resolves and the error
/// is logged.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c  => {}
        () = sigterm => {}
    }
}

#[cfg(test)]
mod tests {
    use super::ACCEPT_BACKOFF;

    #[test]
    fn accept_backoff_pauses_without_stalling_the_loop() {
        assert!(!ACCEPT_BACKOFF.is_zero());
        assert!(ACCEPT_BACKOFF.as_secs() < 1);
    }
}
