use seamux::{Request, Response, Router, Server, StatusCode};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

fn app() -> Router {
    let mut router = Router::new();
    router
        .get("/users/:id", |res: &mut Response, req: &mut Request| {
            let id = req.param("id").unwrap_or("unknown");
            res.json(format!(r#"{{"id":"{id}"}}"#).into_bytes());
        })
        .unwrap();
    router
        .post("/echo", |res: &mut Response, req: &mut Request| {
            let body = req.body().to_vec();
            res.set_status(StatusCode::CREATED).write(body);
        })
        .unwrap();
    router
        .get("/greet/:name", |res: &mut Response, req: &mut Request| {
            let body = format!(
                "name={} q={}",
                req.param("name").unwrap_or("-"),
                req.param("q").unwrap_or("-"),
            );
            res.text(body);
        })
        .unwrap();
    router
}

/// Sends one raw HTTP/1.1 request and returns the full response text.
async fn roundtrip(addr: std::net::SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn serves_matched_and_unmatched_requests() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(
        Server::from_listener(listener).serve_with_shutdown(app(), async move {
            let _ = stopped.await;
        }),
    );

    let ok = roundtrip(addr, "GET /users/42 HTTP/1.1\r\nhost: test\r\nconnection: close\r\n\r\n").await;
    assert!(ok.starts_with("HTTP/1.1 200 OK\r\n"), "{ok}");
    assert!(ok.contains("content-type: application/json"), "{ok}");
    assert!(ok.ends_with(r#"{"id":"42"}"#), "{ok}");

    let created = roundtrip(
        addr,
        "POST /echo HTTP/1.1\r\nhost: test\r\ncontent-length: 5\r\nconnection: close\r\n\r\nhello",
    )
    .await;
    assert!(created.starts_with("HTTP/1.1 201 Created\r\n"), "{created}");
    assert!(created.ends_with("hello"), "{created}");

    let missing = roundtrip(addr, "GET /nowhere HTTP/1.1\r\nhost: test\r\nconnection: close\r\n\r\n").await;
    assert!(missing.starts_with("HTTP/1.1 404 Not Found\r\n"), "{missing}");

    let wrong_method = roundtrip(addr, "DELETE /users/1 HTTP/1.1\r\nhost: test\r\nconnection: close\r\n\r\n").await;
    assert!(wrong_method.starts_with("HTTP/1.1 404 Not Found\r\n"), "{wrong_method}");

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[tokio::test]
async fn path_parameters_are_decoded_like_query_values() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(
        Server::from_listener(listener).serve_with_shutdown(app(), async move {
            let _ = stopped.await;
        }),
    );

    let res = roundtrip(
        addr,
        "GET /greet/J%C3%B6rg?q=J%C3%B6rg HTTP/1.1\r\nhost: test\r\nconnection: close\r\n\r\n",
    )
    .await;
    assert!(res.starts_with("HTTP/1.1 200 OK\r\n"), "{res}");
    assert!(res.ends_with("name=Jörg q=Jörg"), "{res}");

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();
}

#[test]
fn bind_rejects_bad_address() {
    let err = Server::bind("not-an-address").err().unwrap();
    assert!(matches!(err, seamux::Error::InvalidAddr { .. }));
    assert!(err.to_string().contains("not-an-address"));
}
