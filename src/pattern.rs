//! Route pattern compiler.
//!
//! A pattern is a `/`-separated path template. Segments starting with `:`
//! declare a named parameter that matches one path segment; every other
//! segment is copied into the compiled expression verbatim.
//!
//! ```rust
//! let p = seamux::pattern::compile("/users/:id").unwrap();
//! assert_eq!(p.as_str(), "/users/([^/]+)");
//! assert_eq!(p.param_names(), ["id"]);
//! ```
//!
//! Two properties are easy to miss:
//!
//! - Literal segments are **not** escaped. `.`, `(`, `|` and friends keep
//!   their regex meaning, so `/file.txt` also matches `/fileXtxt`.
//! - The expression is **not** anchored. A pattern matches when it is found
//!   anywhere in the path: `/alive` matches `/alive/extra` and `/v1/alive`.

use std::fmt;

use regex::Regex;

use crate::error::PatternCompileError;

/// What a `:name` segment is replaced with: one non-empty path segment.
const PARAM_SEGMENT: &str = "([^/]+)";

/// A compiled route pattern.
pub struct Pattern {
    source: String,
    regex: Regex,
    param_names: Vec<String>,
}

/// Compiles `pattern` into a [`Pattern`].
///
/// Parameter names are recorded left to right; a bare `:` segment yields a
/// parameter with an empty name. Fails if the rewritten expression is not a
/// valid regex (e.g. an unbalanced `(` in a literal segment).
pub fn compile(pattern: &str) -> Result<Pattern, PatternCompileError> {
    let mut param_names = Vec::new();

    let expr = pattern
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => {
                param_names.push(name.to_owned());
                PARAM_SEGMENT
            }
            None => segment,
        })
        .collect::<Vec<_>>()
        .join("/");

    let regex = Regex::new(&expr).map_err(|e| PatternCompileError::new(pattern, e))?;

    Ok(Pattern { source: pattern.to_owned(), regex, param_names })
}

impl Pattern {
    /// The pattern as written at registration, e.g. `/users/:id`.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled expression, e.g. `/users/([^/]+)`.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Parameter names in segment order. Index `i` names capture group `i + 1`.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Matches `path` and returns `(name, value)` pairs for every parameter.
    ///
    /// `None` means no match. Binding is positional over every capture group,
    /// so groups coming from regex syntax in a literal segment shift the
    /// binding, and groups past the last name are bound under `""`. A group
    /// that took no part in the match binds to `""`. Patterns without
    /// parameters bind nothing.
    pub fn extract<'s, 'p>(&'s self, path: &'p str) -> Option<Vec<(&'s str, &'p str)>> {
        if self.param_names.is_empty() {
            return self.regex.is_match(path).then(Vec::new);
        }

        let caps = self.regex.captures(path)?;
        let params = caps
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, group)| {
                let name = self.param_names.get(i).map_or("", String::as_str);
                (name, group.map_or("", |m| m.as_str()))
            })
            .collect();
        Some(params)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("regex", &self.regex.as_str())
            .field("param_names", &self.param_names)
            .finish()
    }
}
