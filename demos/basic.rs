//! Minimal seamux example: JSON endpoints, path parameters, middleware.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! Try:
//!   curl http://localhost:3000/users/42
//!   curl 'http://localhost:3000/users/42/posts/7?fields=title'
//!   curl -X POST http://localhost:3000/users -d '{"name":"alice"}'
//!   curl -X DELETE http://localhost:3000/users/42

use seamux::{Method, Request, Response, Router, Server, StatusCode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), seamux::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr = std::env::var("SEAMUX_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());

    let mut app = Router::new();
    app.use_middleware(seamux::middleware::trace);
    app.use_middleware(request_id);

    // Most specific first: the first matching route wins.
    app.get("/users/:id/posts/:post", get_post)?;
    app.handle_func("/users/:id", get_user)?.methods([Method::Get, Method::Head]);
    app.delete("/users/:id", delete_user)?;
    app.post("/users", create_user)?;

    Server::bind(&addr)?.serve(app).await
}

fn request_id(res: &mut Response, req: &mut Request) {
    let id = req.header("x-request-id").unwrap_or("-").to_owned();
    res.set_header("x-request-id", &id);
}

// GET /users/:id
fn get_user(res: &mut Response, req: &mut Request) {
    let id = req.param("id").unwrap_or("unknown");
    res.json(format!(r#"{{"id":"{id}","name":"alice"}}"#).into_bytes());
}

// GET /users/:id/posts/:post
fn get_post(res: &mut Response, req: &mut Request) {
    let user = req.param("id").unwrap_or("unknown");
    let post = req.param("post").unwrap_or("unknown");
    res.json(format!(r#"{{"user":"{user}","post":"{post}"}}"#).into_bytes());
}

// POST /users
fn create_user(res: &mut Response, req: &mut Request) {
    if req.body().is_empty() {
        res.set_status(StatusCode::BAD_REQUEST);
        return;
    }

    res.set_status(StatusCode::CREATED)
        .set_header("location", "/users/99")
        .json(br#"{"id":"99","name":"new_user"}"#.to_vec());
}

// DELETE /users/:id → 204 No Content
fn delete_user(res: &mut Response, _req: &mut Request) {
    res.set_status(StatusCode::NO_CONTENT);
}
