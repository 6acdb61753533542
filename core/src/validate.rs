//! Shared status + schema enforcement for every typed client.
//!
//! # Design
//! A test's expectation is two-part: the status code it wants and,
//! optionally, the shape of the body. `expect_status` enforces the first
//! and hands the raw response back; `expect_model` enforces both and hands
//! back the parsed model. A wrong status is an error carrying both codes
//! and the full body text; a schema failure carries the underlying parse
//! or constraint error plus the raw body, so a failing test always shows
//! exactly what was received.
//!
//! Clients return [`Outcome`] so tests branch on the returned variant —
//! "wrong status with a valid error body" is an expected, testable result,
//! not a harness failure.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::http::ApiResponse;

/// A structural contract a parsed JSON body must satisfy.
///
/// Deserialization covers required fields and types; `check` covers
/// literal constraints serde cannot express (e.g. a minimum token length).
pub trait ResponseSchema: DeserializeOwned {
    /// Constraint checks beyond deserialization. Default: none.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

impl ResponseSchema for serde_json::Value {}
impl ResponseSchema for String {}

impl<T: ResponseSchema> ResponseSchema for Vec<T> {
    fn check(&self) -> Result<(), String> {
        for item in self {
            item.check()?;
        }
        Ok(())
    }
}

/// What a typed client hands back to the test.
#[derive(Debug)]
pub enum Outcome<T> {
    /// Status matched and the body satisfied the schema.
    Parsed(T),
    /// Status matched but no schema was enforced; the raw response is
    /// returned for the test to inspect.
    Raw(ApiResponse),
}

impl<T> Outcome<T> {
    /// The parsed model, or a panic with the raw response — for tests
    /// that have already established which variant they expect.
    pub fn into_parsed(self) -> T {
        match self {
            Outcome::Parsed(model) => model,
            Outcome::Raw(raw) => panic!(
                "expected a schema-validated body, got raw response (status {}): {}",
                raw.status,
                raw.text_value()
            ),
        }
    }

    /// The raw response, or a panic if the body was parsed into a model.
    pub fn into_raw(self) -> ApiResponse {
        match self {
            Outcome::Parsed(_) => panic!("expected a raw response, got a parsed model"),
            Outcome::Raw(raw) => raw,
        }
    }
}

/// Assert the response status and return the response unchanged.
pub fn expect_status(response: ApiResponse, expected: u16) -> Result<ApiResponse, ApiError> {
    debug!(actual = response.status, expected, "checking response status");
    if response.status != expected {
        return Err(ApiError::StatusMismatch {
            expected,
            actual: response.status,
            body: response.text_value(),
        });
    }
    Ok(response)
}

/// Assert the response status, then parse and validate the body as `T`.
pub fn expect_model<T: ResponseSchema>(
    response: ApiResponse,
    expected: u16,
) -> Result<T, ApiError> {
    let response = expect_status(response, expected)?;
    let body_text = response.text_value();

    let value = response
        .json_value()
        .map_err(|e| ApiError::SchemaViolation {
            reason: e.to_string(),
            body: body_text.clone(),
        })?;

    let model: T = serde_json::from_value(value.clone()).map_err(|e| ApiError::SchemaViolation {
        reason: e.to_string(),
        body: body_text.clone(),
    })?;

    model.check().map_err(|reason| ApiError::SchemaViolation {
        reason,
        body: body_text,
    })?;

    debug!("response body validated");
    Ok(model)
}
