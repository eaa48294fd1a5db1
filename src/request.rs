//! Incoming HTTP request type.

use percent_encoding::percent_decode_str;

use crate::query::Query;

/// An incoming request as seen by handlers and middleware.
///
/// The router reads [`method`](Request::method) and [`path`](Request::path)
/// and appends matched path parameters to [`query`](Request::query). Each
/// request owns its own store; nothing is shared between requests.
#[derive(Clone, Debug)]
pub struct Request {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) query: Query,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Vec<u8>,
}

impl Request {
    /// Builds a request by hand. The server does this for you; tests and
    /// other hosts use it directly.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: Query::new(),
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Replaces the parameter store with the decoded `raw` query string.
    pub fn with_query(mut self, raw: &str) -> Self {
        self.query = Query::parse(raw);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds a request from hyper's parts. The path is percent-decoded so
    /// path parameters arrive decoded, like query values do.
    pub(crate) fn from_parts(parts: &http::request::Parts, body: Vec<u8>) -> Self {
        let headers = parts
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value.to_str().ok().map(|v| (name.as_str().to_owned(), v.to_owned()))
            })
            .collect();

        Self {
            method: parts.method.as_str().to_owned(),
            path: percent_decode_str(parts.uri.path()).decode_utf8_lossy().into_owned(),
            query: parts.uri.query().map(Query::parse).unwrap_or_default(),
            headers,
            body,
        }
    }

    pub fn method(&self) -> &str { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn query(&self) -> &Query { &self.query }
    pub fn query_mut(&mut self) -> &mut Query { &mut self.query }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// The parameter store re-encoded as a query string, keys sorted.
    pub fn raw_query(&self) -> String {
        self.query.encode()
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named parameter, path or query.
    ///
    /// For a route `/users/:id`, `req.param("id")` on `/users/42` returns
    /// `Some("42")`. Path values are appended after the query string, so
    /// `/users/42?id=7` yields `Some("7")`; use `query().get_all("id")` to
    /// see both.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(uri: &str) -> http::request::Parts {
        http::Request::builder()
            .method("GET")
            .uri(uri)
            .header("X-Id", "7")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn from_parts_decodes_path_and_query() {
        let req = Request::from_parts(&parts("/users/J%C3%B6rg%20K?q=J%C3%B6rg"), Vec::new());
        assert_eq!(req.method(), "GET");
        assert_eq!(req.path(), "/users/Jörg K");
        assert_eq!(req.param("q"), Some("Jörg"));
        assert_eq!(req.header("x-id"), Some("7"));
    }

    #[test]
    fn from_parts_keeps_invalid_utf8_lossy() {
        let req = Request::from_parts(&parts("/files/%FF"), Vec::new());
        assert_eq!(req.path(), "/files/\u{FFFD}");
    }
}
