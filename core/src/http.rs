//! HTTP request and response values as plain data.
//!
//! # Design
//! These types describe HTTP traffic without touching the network. Typed
//! clients build `HttpRequest` values and a `Transport` implementation
//! (mock or live) turns them into `ApiResponse` values. The response body
//! is a tagged union rather than a raw byte blob: a canned response knows
//! whether it carries JSON, plain text, or nothing, and reading it the
//! wrong way is a defined error rather than a parsing accident.

use serde_json::Value;

use crate::error::{ApiError, BodyKind};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Uppercase wire name, also used in mock lookup keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by the typed clients; executed by a [`crate::transport::Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_json_body(mut self, body: String) -> Self {
        self.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        self
    }

    pub fn with_bearer_token(mut self, token: &str) -> Self {
        self.headers
            .push(("authorization".to_string(), format!("Bearer {token}")));
        self
    }
}

/// What a response carries: a JSON value, verbatim text, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
    Empty,
}

impl Body {
    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Json(_) => BodyKind::Json,
            Body::Text(_) => BodyKind::Text,
            Body::Empty => BodyKind::Empty,
        }
    }
}

/// A response as seen by the validator and the tests.
///
/// `ok` is derived from the status (200..=299) unless explicitly
/// overridden, which lets tests simulate servers whose error flags
/// disagree with their status codes.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub ok: bool,
    pub body: Body,
}

impl ApiResponse {
    /// Response with a JSON body.
    pub fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            ok: status_is_ok(status),
            body: Body::Json(value),
        }
    }

    /// Response with a plain-text body, e.g. a bare confirmation message.
    pub fn text(status: u16, text: impl Into<String>) -> Self {
        Self {
            status,
            ok: status_is_ok(status),
            body: Body::Text(text.into()),
        }
    }

    /// Response with no body at all.
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            ok: status_is_ok(status),
            body: Body::Empty,
        }
    }

    /// Override the derived `ok` flag.
    pub fn with_ok(mut self, ok: bool) -> Self {
        self.ok = ok;
        self
    }

    /// The JSON value of the body.
    ///
    /// Reading JSON out of a text or empty body is a decode error, the
    /// same signal a real client gets when it calls `.json()` on a
    /// plain-text confirmation message.
    pub fn json_value(&self) -> Result<&Value, ApiError> {
        match &self.body {
            Body::Json(value) => Ok(value),
            other => Err(ApiError::BodyNotJson { kind: other.kind() }),
        }
    }

    /// The body as text: JSON serialized compactly, text verbatim,
    /// empty as "".
    pub fn text_value(&self) -> String {
        match &self.body {
            Body::Json(value) => value.to_string(),
            Body::Text(text) => text.clone(),
            Body::Empty => String::new(),
        }
    }
}

fn status_is_ok(status: u16) -> bool {
    (200..300).contains(&status)
}
