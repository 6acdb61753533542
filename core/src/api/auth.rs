//! Client and models for the authentication endpoint (POST /api/auth).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::transport::Transport;
use crate::validate::{expect_model, expect_status, Outcome, ResponseSchema};

/// Request body for POST /api/auth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub login: String,
    pub password: String,
}

impl AuthPayload {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Reject malformed payloads before any transport interaction.
    fn validate(&self) -> Result<(), ApiError> {
        if self.login.is_empty() {
            return Err(ApiError::InvalidPayload("login must not be empty".into()));
        }
        if self.password.is_empty() {
            return Err(ApiError::InvalidPayload("password must not be empty".into()));
        }
        Ok(())
    }
}

/// Successful response body for POST /api/auth (200 OK).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSuccess {
    pub auth: bool,
    pub token: String,
}

impl ResponseSchema for AuthSuccess {
    fn check(&self) -> Result<(), String> {
        if !self.auth {
            return Err("the `auth` field must be true on successful login".into());
        }
        if self.token.len() < 10 {
            return Err(format!(
                "token must be at least 10 characters, got {}",
                self.token.len()
            ));
        }
        Ok(())
    }
}

/// API client for the authorization endpoint.
pub struct AuthClient<'a> {
    transport: &'a dyn Transport,
}

impl<'a> AuthClient<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// POST /api/auth with the given credentials.
    ///
    /// On a 2xx response the body is validated against [`AuthSuccess`];
    /// otherwise the raw response is returned after the status check, so
    /// negative tests can inspect the error body themselves.
    pub fn login(
        &self,
        payload: &AuthPayload,
        expected_status: u16,
    ) -> Result<Outcome<AuthSuccess>, ApiError> {
        payload.validate()?;
        let path = Endpoint::Auth.path()?;
        info!(%path, "POST login");

        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let request = HttpRequest::new(HttpMethod::Post, path).with_json_body(body);
        let response = self.transport.send(&request)?;

        if response.ok {
            Ok(Outcome::Parsed(expect_model(response, expected_status)?))
        } else {
            Ok(Outcome::Raw(expect_status(response, expected_status)?))
        }
    }
}
