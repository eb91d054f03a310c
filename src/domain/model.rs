use crate::utils::error::{ClientError, Result};
use serde_json::{json, Value};
use std::fmt;
use url::Url;

/// A backend route relative to the API base URL.
///
/// `path` is a fixed route such as `/bid-status`. Dynamic parts are appended as
/// separate segments so that ids containing `/`, `?` or spaces are
/// percent-encoded instead of changing the route. Query pairs are kept in
/// insertion order and form-urlencoded on resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    segments: Vec<String>,
    query: Vec<(String, String)>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            segments: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Values go through `Display`, so `7.0_f64` renders as `7`.
    pub fn query(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Joins the route onto `base`, keeping any path prefix the base carries
    /// (e.g. `/api`).
    pub fn resolve(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| ClientError::Config {
                message: format!("base URL '{}' cannot carry a path", base),
            })?;
            segments.pop_if_empty();
            segments.extend(self.path.split('/').filter(|s| !s.is_empty()));
            segments.extend(self.segments.iter());
        }

        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        for (i, (key, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

/// The uniform shape every failed call resolves to.
pub fn error_response(message: impl Into<String>) -> Value {
    json!({
        "status": "error",
        "error_message": message.into(),
    })
}

/// The `status` field of a response object, if it has one.
pub fn response_status(response: &Value) -> Option<&str> {
    response.get("status").and_then(Value::as_str)
}

pub fn is_error_response(response: &Value) -> bool {
    response_status(response) == Some("error")
}
