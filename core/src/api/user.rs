//! Client and models for the user endpoints (/api/user/*).
//!
//! All of these endpoints require authentication; the client carries an
//! optional bearer token and attaches it to every request. The mock
//! transport ignores headers, so mocked tests work with or without one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::http::{ApiResponse, HttpMethod, HttpRequest};
use crate::transport::Transport;
use crate::validate::{expect_model, expect_status, Outcome, ResponseSchema};

/// Rough geolocation attached to profiles and help requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Successful response body for GET /api/user (200 OK).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl ResponseSchema for UserProfile {
    fn check(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("user id must not be empty".into());
        }
        Ok(())
    }
}

/// Request body for POST /api/user/favourites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavouritePayload {
    #[serde(rename = "requestId")]
    pub request_id: String,
}

impl AddFavouritePayload {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        if self.request_id.is_empty() {
            return Err(ApiError::InvalidPayload(
                "requestId must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// API client for user profile and favourites endpoints.
pub struct UserClient<'a> {
    transport: &'a dyn Transport,
    token: Option<String>,
}

impl<'a> UserClient<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self {
            transport,
            token: None,
        }
    }

    /// Attach the bearer token obtained from a login.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn authed(&self, request: HttpRequest) -> HttpRequest {
        match &self.token {
            Some(token) => request.with_bearer_token(token),
            None => request,
        }
    }

    /// GET /api/user — the authenticated user's profile.
    pub fn get_profile(&self, expected_status: u16) -> Result<Outcome<UserProfile>, ApiError> {
        let path = Endpoint::User.path()?;
        info!(%path, "GET user profile");

        let request = self.authed(HttpRequest::new(HttpMethod::Get, path));
        let response = self.transport.send(&request)?;

        if expected_status == 200 {
            Ok(Outcome::Parsed(expect_model(response, expected_status)?))
        } else {
            Ok(Outcome::Raw(expect_status(response, expected_status)?))
        }
    }

    /// GET /api/user/favourites — the user's favourite request IDs.
    ///
    /// On 200 the body must be a JSON array of strings; anything else is
    /// a schema violation.
    pub fn get_favourites(&self, expected_status: u16) -> Result<Outcome<Vec<String>>, ApiError> {
        let path = Endpoint::UserFavourites.path()?;
        info!(%path, "GET favourites");

        let request = self.authed(HttpRequest::new(HttpMethod::Get, path));
        let response = self.transport.send(&request)?;

        if expected_status == 200 {
            Ok(Outcome::Parsed(expect_model(response, expected_status)?))
        } else {
            Ok(Outcome::Raw(expect_status(response, expected_status)?))
        }
    }

    /// POST /api/user/favourites — add a request to favourites.
    ///
    /// The service answers with a plain-text confirmation, so the raw
    /// response is returned after the status check.
    pub fn add_favourite(
        &self,
        payload: &AddFavouritePayload,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        payload.validate()?;
        let path = Endpoint::UserFavourites.path()?;
        info!(%path, request_id = %payload.request_id, "POST add favourite");

        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let request = self.authed(HttpRequest::new(HttpMethod::Post, path).with_json_body(body));
        let response = self.transport.send(&request)?;
        expect_status(response, expected_status)
    }

    /// DELETE /api/user/favourites/{requestId} — remove one favourite.
    pub fn remove_favourite(
        &self,
        request_id: &str,
        expected_status: u16,
    ) -> Result<ApiResponse, ApiError> {
        if request_id.is_empty() {
            return Err(ApiError::InvalidPayload(
                "requestId must not be empty".into(),
            ));
        }
        let path = Endpoint::UserFavouriteDetail.resolve(&[("requestId", request_id)])?;
        info!(%path, "DELETE favourite");

        let request = self.authed(HttpRequest::new(HttpMethod::Delete, path));
        let response = self.transport.send(&request)?;
        expect_status(response, expected_status)
    }
}
