//! Request descriptors: everything needed to (re)submit one backend call.
//!
//! A descriptor is built once by an endpoint and may be submitted twice by
//! the gateway. It carries its own retry bookkeeping so a retried submission
//! can never schedule a second retry.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde_json::Value;

use crate::config::DEFAULT_MAX_RETRIES;
use crate::session::Role;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
pub const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named part of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file_name: String, mime: Option<String>, bytes: Vec<u8> },
}

impl FormPart {
    #[must_use]
    pub fn text(name: &str, value: &str) -> Self {
        Self::Text { name: name.to_owned(), value: value.to_owned() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

impl Body {
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }

    /// Log-safe rendering; multipart payloads are never printed.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Empty => "-".to_owned(),
            Self::Json(value) => value.to_string(),
            Self::Multipart(parts) => format!("[multipart: {} parts]", parts.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
    pub headers: Vec<(String, String)>,
    pub remaining_retries: u32,
    pub retried: bool,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Body::Empty,
            headers: Vec::new(),
            remaining_retries: DEFAULT_MAX_RETRIES,
            retried: false,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_owned(), value.into()));
        self
    }

    /// Append a query pair only when `value` is present and non-blank.
    #[must_use]
    pub fn query_opt(self, key: &str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    #[must_use]
    pub fn json(mut self, value: Value) -> Self {
        self.body = Body::Json(value);
        self
    }

    #[must_use]
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Credential role, derived from the path.
    #[must_use]
    pub fn role(&self) -> Role {
        Role::for_path(&self.path)
    }

    /// Path plus percent-encoded query string.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let pairs: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        let sep = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{sep}{}", self.path, pairs.join("&"))
    }

    /// Headers for one submission.
    ///
    /// JSON defaults come first, caller headers override them, and any
    /// caller-supplied `Authorization` is replaced by `token`. Multipart
    /// bodies carry no `Content-Type` so the transport can set the boundary.
    #[must_use]
    pub fn outbound_headers(&self, token: Option<&str>) -> Vec<(String, String)> {
        let mut headers: Vec<(String, String)> = Vec::with_capacity(self.headers.len() + 3);
        if !self.body.is_multipart() {
            headers.push((CONTENT_TYPE.to_owned(), JSON_MIME.to_owned()));
        }
        headers.push((ACCEPT.to_owned(), JSON_MIME.to_owned()));

        for (name, value) in &self.headers {
            if name.eq_ignore_ascii_case(AUTHORIZATION) {
                continue;
            }
            if name.eq_ignore_ascii_case(CONTENT_TYPE) && self.body.is_multipart() {
                continue;
            }
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }

        if let Some(token) = token {
            headers.push((AUTHORIZATION.to_owned(), format!("Bearer {token}")));
        }
        headers
    }
}

/// Encode one path segment (ids, tokens) for interpolation into a route.
#[must_use]
pub fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
