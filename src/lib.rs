//! # seamux
//!
//! A lightweight HTTP router: ordered route matching, `:name` path
//! parameters, and a flat middleware chain.
//!
//! ## The contract
//!
//! - Routes are tried in **registration order**; the first route whose
//!   method list and pattern both accept the request handles it.
//! - A pattern like `/users/:id` compiles to the regex `/users/([^/]+)`.
//!   Literal segments are not escaped and the regex is not anchored, so a
//!   pattern matches anywhere inside the path.
//! - Path parameters are appended to the request's query parameters. Read
//!   them with [`Request::param`].
//! - Middleware runs on every matched request, in order, before the handler.
//!   Nothing runs on a miss.
//!
//! [`Router`] is transport-agnostic: hand it a [`Request`] and a [`Response`]
//! and it tells you whether a route matched. [`Server`] is the bundled
//! hyper host that does exactly that and answers misses with `404`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use seamux::{Method, Request, Response, Router, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), seamux::Error> {
//!     let mut app = Router::new();
//!     app.use_middleware(seamux::middleware::trace);
//!     app.handle_func("/users/:id", get_user)?.methods([Method::Get]);
//!     app.post("/users", create_user)?;
//!
//!     Server::bind("0.0.0.0:3000")?.serve(app).await
//! }
//!
//! fn get_user(res: &mut Response, req: &mut Request) {
//!     let id = req.param("id").unwrap_or("unknown");
//!     res.json(format!(r#"{{"id":"{id}"}}"#).into_bytes());
//! }
//!
//! fn create_user(res: &mut Response, _req: &mut Request) {
//!     res.set_status(seamux::StatusCode::CREATED);
//! }
//! ```

mod error;
mod handler;
mod method;
mod query;
mod request;
mod response;
mod router;
mod server;

pub mod middleware;
pub mod pattern;

pub use error::{Error, PatternCompileError};
pub use handler::Handler;
pub use http::StatusCode;
pub use method::Method;
pub use query::Query;
pub use request::Request;
pub use response::Response;
pub use router::{Route, Router, method_allowed};
pub use server::Server;
