//! Ordered multi-value parameter store.
//!
//! Query-string values and path parameters live in the same [`Query`], so a
//! handler reads `:id` exactly the way it reads `?page=2`.

use url::form_urlencoded;

/// An ordered `key → values` map built from a query string.
///
/// Keys may repeat. [`get`](Query::get) returns the first value for a key,
/// [`get_all`](Query::get_all) every value in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` string (no leading `?`).
    pub fn parse(raw: &str) -> Self {
        form_urlencoded::parse(raw.as_bytes()).into_owned().collect()
    }

    /// Appends a value; existing values for `key` are kept.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).next()
    }

    pub fn get_all<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes back to a query string, sorted by key.
    ///
    /// The sort is stable: values of a repeated key keep their order.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish()
    }
}

impl FromIterator<(String, String)> for Query {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self { pairs: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_and_keeps_order() {
        let q = Query::parse("name=J%C3%B6rg&tag=a&tag=b+c");
        assert_eq!(q.get("name"), Some("Jörg"));
        assert_eq!(q.get_all("tag").collect::<Vec<_>>(), ["a", "b c"]);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn add_appends_and_get_returns_first() {
        let mut q = Query::parse("id=7");
        q.add("id", "42");
        assert_eq!(q.get("id"), Some("7"));
        assert_eq!(q.get_all("id").collect::<Vec<_>>(), ["7", "42"]);
    }

    #[test]
    fn missing_key() {
        let q = Query::new();
        assert!(q.is_empty());
        assert!(!q.contains_key("x"));
        assert_eq!(q.get("x"), None);
    }

    #[test]
    fn encode_sorts_keys_stably() {
        let mut q = Query::parse("z=1&a=2");
        q.add("a", "1");
        q.add("m", "x y");
        assert_eq!(q.encode(), "a=2&a=1&m=x+y&z=1");
    }
}
