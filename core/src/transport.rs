//! Transports: the seam between typed clients and the network.
//!
//! # Design
//! `Transport` takes a plain-data [`HttpRequest`] and returns an
//! [`ApiResponse`]. The clients never know whether a request crossed the
//! network or hit the in-memory mock table, so the same test body runs
//! against both.
//!
//! `MockTransport` is the in-process stand-in: a table of canned responses
//! keyed by `"METHOD:/resolved/path"`. Lookups are exact-match; a miss is
//! an explicit `MockNotConfigured` error naming the attempted key rather
//! than a silent default. Each test owns its own instance, so there is no
//! cross-test state and no locking.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use crate::error::ApiError;
use crate::http::{ApiResponse, HttpMethod, HttpRequest};

/// Executes requests. Implemented by [`MockTransport`] in-process and by
/// whatever live HTTP executor an integration suite supplies.
pub trait Transport {
    fn send(&self, request: &HttpRequest) -> Result<ApiResponse, ApiError>;
}

/// Build the exact-match lookup key for a method + resolved path.
///
/// The method is uppercased, so registration and lookup are
/// case-insensitive on the method and exact on the path.
pub fn mock_key(method: &str, endpoint: &str) -> String {
    format!("{}:{}", method.to_ascii_uppercase(), endpoint)
}

/// In-memory substitute for the network layer.
///
/// Registered responses are replayed verbatim on every matching send;
/// repeated sends of the same key within a test see identical responses.
/// The table lives behind a `RefCell` so a test can keep registering
/// mocks after handing shared borrows to clients and the mock factory —
/// everything here is single-threaded by design.
#[derive(Debug, Default)]
pub struct MockTransport {
    mocks: RefCell<HashMap<String, ApiResponse>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for a method + endpoint pair.
    /// Registering the same pair again overwrites the previous entry.
    pub fn register(&self, method: HttpMethod, endpoint: &str, response: ApiResponse) {
        let key = mock_key(method.as_str(), endpoint);
        debug!(%key, status = response.status, "registering mock response");
        self.mocks.borrow_mut().insert(key, response);
    }

    /// Drop every registered response. Called between tests when an
    /// instance is reused; a stale mock satisfying a later test's lookup
    /// is exactly the bug this guards against.
    pub fn clear(&self) {
        self.mocks.borrow_mut().clear();
    }

    /// Number of registered responses.
    pub fn len(&self) -> usize {
        self.mocks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mocks.borrow().is_empty()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &HttpRequest) -> Result<ApiResponse, ApiError> {
        let key = mock_key(request.method.as_str(), &request.path);
        debug!(%key, "mock transport lookup");
        self.mocks
            .borrow()
            .get(&key)
            .cloned()
            .ok_or(ApiError::MockNotConfigured { key })
    }
}
