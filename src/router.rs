//! Ordered-match request router.
//!
//! Routes are tried in registration order and the first one whose method
//! list and pattern both accept the request wins. No tree, no scoring, no
//! longest-match: if two routes overlap, register the specific one first.

use std::fmt;

use tracing::{debug, trace};

use crate::error::PatternCompileError;
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::pattern::{self, Pattern};
use crate::request::Request;
use crate::response::Response;

/// One registered endpoint: pattern, accepted methods, handler.
pub struct Route {
    methods: Vec<String>,
    pattern: Pattern,
    handler: BoxedHandler,
}

impl Route {
    /// Sets the accepted methods, replacing any earlier list.
    ///
    /// An empty list accepts every method. Comparison is exact, so pass
    /// uppercase names (or [`Method`] values).
    pub fn methods<I, M>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        self.methods = methods.into_iter().map(|m| m.as_ref().to_owned()).collect();
        self
    }

    pub fn allowed_methods(&self) -> &[String] {
        &self.methods
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Whether `method` passes this route's method filter.
    pub fn accepts(&self, method: &str) -> bool {
        method_allowed(&self.methods, method)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("methods", &self.methods)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// `true` when `methods` is empty or contains `method`.
pub fn method_allowed(methods: &[String], method: &str) -> bool {
    methods.is_empty() || methods.iter().any(|m| m == method)
}

/// The application router.
///
/// Build it during startup, then share it read-only (the server wraps it in
/// an `Arc`). Registration takes `&mut self`, so the borrow checker already
/// rules out registering routes while requests are being served.
///
/// ```rust
/// use seamux::{Method, Request, Response, Router};
///
/// fn show_user(res: &mut Response, req: &mut Request) {
///     let id = req.param("id").unwrap_or_default().to_owned();
///     res.text(id);
/// }
///
/// let mut router = Router::new();
/// router.handle_func("/users/:id", show_user)?.methods([Method::Get]);
///
/// let mut req = Request::new("GET", "/users/42");
/// let mut res = Response::new();
/// assert!(router.serve(&mut res, &mut req));
/// assert_eq!(res.body(), b"42");
/// # Ok::<(), seamux::PatternCompileError>(())
/// ```
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
    middleware: Vec<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles `pattern` and appends a route that accepts any method.
    ///
    /// Returns the new route so its methods can be narrowed. On error the
    /// router is left unchanged.
    pub fn add_route(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        let pattern = pattern::compile(pattern)?;
        debug!(
            pattern = pattern.source(),
            regex = pattern.as_str(),
            params = ?pattern.param_names(),
            "route registered",
        );

        self.routes.push(Route { methods: Vec::new(), pattern, handler: Box::new(handler) });
        let idx = self.routes.len() - 1;
        Ok(&mut self.routes[idx])
    }

    /// Same as [`add_route`](Router::add_route).
    pub fn handle_func(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        self.add_route(pattern, handler)
    }

    pub fn get(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        self.on(Method::Get, pattern, handler)
    }

    pub fn post(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        self.on(Method::Post, pattern, handler)
    }

    pub fn put(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        self.on(Method::Put, pattern, handler)
    }

    pub fn patch(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        self.on(Method::Patch, pattern, handler)
    }

    pub fn delete(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        self.on(Method::Delete, pattern, handler)
    }

    pub fn head(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        self.on(Method::Head, pattern, handler)
    }

    pub fn options(
        &mut self,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        self.on(Method::Options, pattern, handler)
    }

    fn on(
        &mut self,
        method: Method,
        pattern: &str,
        handler: impl Handler,
    ) -> Result<&mut Route, PatternCompileError> {
        Ok(self.add_route(pattern, handler)?.methods([method]))
    }

    /// Appends a middleware. Middleware runs in registration order on every
    /// matched request, before the handler.
    pub fn use_middleware(&mut self, middleware: impl Handler) -> &mut Self {
        self.middleware.push(Box::new(middleware));
        debug!(count = self.middleware.len(), "middleware registered");
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Dispatches one request.
    ///
    /// Finds the first route accepting the request, appends its path
    /// parameters to the request's [`Query`](crate::Query), runs every
    /// middleware, then the handler. Returns `false` without touching
    /// `req` or `res` when nothing matches; the caller decides what a miss
    /// looks like.
    pub fn serve(&self, res: &mut Response, req: &mut Request) -> bool {
        for route in &self.routes {
            if !route.accepts(&req.method) {
                continue;
            }

            let Some(params) = route.pattern.extract(&req.path) else {
                continue;
            };

            trace!(
                method = %req.method,
                path = %req.path,
                pattern = route.pattern.source(),
                "route matched",
            );

            for (name, value) in params {
                req.query.add(name, value);
            }

            for middleware in &self.middleware {
                middleware.call(res, req);
            }

            route.handler.call(res, req);
            return true;
        }

        trace!(method = %req.method, path = %req.path, "no route matched");
        false
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("middleware", &self.middleware.len())
            .finish()
    }
}
