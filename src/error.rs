//! Unified error types.

use std::net::AddrParseError;

use thiserror::Error;

/// A route pattern that does not compile into a valid matcher.
///
/// Returned at registration time by [`Router::add_route`](crate::Router::add_route)
/// and friends. Treat it as a fatal configuration error: fix the pattern,
/// do not retry.
#[derive(Debug, Error)]
#[error("invalid route pattern `{pattern}`: {source}")]
pub struct PatternCompileError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl PatternCompileError {
    pub(crate) fn new(pattern: &str, source: regex::Error) -> Self {
        Self { pattern: pattern.to_owned(), source }
    }

    /// The route pattern as it was passed to the router.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// The error type returned by seamux's fallible operations.
///
/// A request that matches no route is not an error. This type surfaces
/// setup and infrastructure failures: a bad pattern, a bad bind address,
/// or an I/O failure while binding or accepting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid socket address `{addr}`: {source}")]
    InvalidAddr {
        addr: String,
        #[source]
        source: AddrParseError,
    },

    #[error(transparent)]
    Pattern(#[from] PatternCompileError),
}
