//! HTTP method names.
//!
//! Routes store methods as plain strings and compare them exactly, so any
//! token works, including extension methods. [`Method`] is a typo-proof way
//! to spell the common ones.

use std::fmt;

/// A standard HTTP method (RFC 9110, plus `PATCH` from RFC 5789).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Connect,
    Delete,
    Get,
    Head,
    Options,
    Patch,
    Post,
    Put,
    Trace,
}

impl Method {
    /// Returns the uppercase wire representation (e.g. `"GET"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Delete  => "DELETE",
            Self::Get     => "GET",
            Self::Head    => "HEAD",
            Self::Options => "OPTIONS",
            Self::Patch   => "PATCH",
            Self::Post    => "POST",
            Self::Put     => "PUT",
            Self::Trace   => "TRACE",
        }
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Method;

    #[test]
    fn wire_names_are_uppercase() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Options.to_string(), "OPTIONS");
        assert_eq!(Method::Patch.as_ref(), "PATCH");
    }
}
