//! Outgoing response sink.
//!
//! The router never writes to a [`Response`]. It hands the same sink to every
//! middleware and then to the handler; whatever they leave in it is what the
//! host sends.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::StatusCode;
use http_body_util::Full;
use tracing::warn;

/// A mutable response under construction.
///
/// Starts as `200 OK`, no headers, empty body.
///
/// ```rust
/// use seamux::{Request, Response, StatusCode};
///
/// fn create_user(res: &mut Response, _req: &mut Request) {
///     res.set_status(StatusCode::CREATED)
///         .set_header("location", "/users/99")
///         .json(br#"{"id":99}"#.to_vec());
/// }
/// ```
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Response {
    pub fn new() -> Self {
        Self { status: StatusCode::OK, headers: Vec::new(), body: Vec::new() }
    }

    pub fn status(&self) -> StatusCode { self.status }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup; first value wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn set_status(&mut self, status: StatusCode) -> &mut Self {
        self.status = status;
        self
    }

    /// Sets `name`, dropping any earlier values for it.
    pub fn set_header(&mut self, name: &str, value: &str) -> &mut Self {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.append_header(name, value)
    }

    /// Adds a value for `name`, keeping earlier ones (e.g. `set-cookie`).
    pub fn append_header(&mut self, name: &str, value: &str) -> &mut Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Appends raw bytes to the body.
    pub fn write(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        self.body.extend_from_slice(bytes.as_ref());
        self
    }

    /// Replaces the body with plain text (`text/plain; charset=utf-8`).
    pub fn text(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = body.into().into_bytes();
        self.set_header("content-type", "text/plain; charset=utf-8")
    }

    /// Replaces the body with serialized JSON (`application/json`).
    pub fn json(&mut self, body: Vec<u8>) -> &mut Self {
        self.body = body;
        self.set_header("content-type", "application/json")
    }

    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = self.status;

        let headers = res.headers_mut();
        for (name, value) in self.headers {
            match (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(&value)) {
                (Ok(name), Ok(value)) => {
                    headers.append(name, value);
                }
                _ => warn!(header = %name, "dropping invalid response header"),
            }
        }
        res
    }
}

impl Default for Response {
    fn default() -> Self { Self::new() }
}
