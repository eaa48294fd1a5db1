//! Built-in middleware.
//!
//! Middleware is any [`Handler`](crate::Handler) registered with
//! [`Router::use_middleware`](crate::Router::use_middleware). It runs on every
//! matched request, in registration order, before the route handler. There is
//! no per-route scoping and no way to stop the chain early.

use tracing::info;

use crate::request::Request;
use crate::response::Response;

/// Emits one `info` event per matched request with method, path and the
/// parameter store (path parameters included).
///
/// ```rust
/// let mut router = seamux::Router::new();
/// router.use_middleware(seamux::middleware::trace);
/// ```
pub fn trace(_res: &mut Response, req: &mut Request) {
    info!(
        method = req.method(),
        path = req.path(),
        params = %req.raw_query(),
        "request",
    );
}
