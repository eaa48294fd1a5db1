//! Handler trait and type erasure.
//!
//! Handlers and middleware have the same shape: they get the response sink
//! and the request, and act only through side effects.
//!
//! ```text
//! fn show(res: &mut Response, req: &mut Request) { … }  ← user writes this
//!        ↓ router.handle_func("/users/:id", show)
//! Box::new(show) as BoxedHandler                       ← stored type-erased
//!        ↓
//! handler.call(&mut res, &mut req)  at request time     ← one vtable call
//! ```
//!
//! Closures work too, but Rust needs the argument types spelled out so the
//! closure is generic over the borrow lifetimes:
//!
//! ```rust
//! # use seamux::{Request, Response, Router};
//! let mut router = Router::new();
//! router
//!     .handle_func("/ping", |res: &mut Response, _req: &mut Request| {
//!         res.text("pong");
//!     })
//!     .unwrap();
//! ```

use crate::request::Request;
use crate::response::Response;

/// A route handler or middleware.
///
/// Implemented for every `Fn(&mut Response, &mut Request)` that is
/// `Send + Sync + 'static`. Implement it on your own type when the handler
/// carries state:
///
/// ```rust
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use seamux::{Handler, Request, Response};
///
/// struct Counter(AtomicU64);
///
/// impl Handler for Counter {
///     fn call(&self, res: &mut Response, _req: &mut Request) {
///         let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
///         res.text(n.to_string());
///     }
/// }
/// ```
///
/// `call` runs on the connection task. Long blocking work belongs on
/// `tokio::task::spawn_blocking` or a thread of your own.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, res: &mut Response, req: &mut Request);
}

impl<F> Handler for F
where
    F: Fn(&mut Response, &mut Request) + Send + Sync + 'static,
{
    fn call(&self, res: &mut Response, req: &mut Request) {
        self(res, req)
    }
}

/// A type-erased handler owned by the router.
pub(crate) type BoxedHandler = Box<dyn Handler>;
