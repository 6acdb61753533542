//! Client and models for the help-request endpoints (/api/request/*).
//!
//! These endpoints are public — no authentication needed to browse
//! requests or to contribute to one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::endpoints::Endpoint;
use crate::error::ApiError;
use crate::http::{ApiResponse, HttpMethod, HttpRequest};
use crate::transport::Transport;
use crate::validate::{expect_model, expect_status, Outcome, ResponseSchema};

use super::user::Location;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequesterType {
    Person,
    Organization,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HelpType {
    Finance,
    Material,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HelperType {
    Group,
    Single,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Qualification {
    Professional,
    Common,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// One step of a request's action plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_done: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestContacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HelperRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_type: Option<HelperType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<Qualification>,
}

/// A help request as returned by GET /api/request and
/// GET /api/request/{id}. Only `id` is guaranteed; the service omits
/// most fields freely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HelpRequest {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions_schedule: Vec<ActionStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<RequestContacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_type: Option<RequesterType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_type: Option<HelpType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_requirements: Option<HelperRequirements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributors_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_goal: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_goal_current_value: Option<u64>,
}

impl ResponseSchema for HelpRequest {
    fn check(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("help request id must not be empty".into());
        }
        Ok(())
    }
}

/// API client for the help-request endpoints.
pub struct RequestClient<'a> {
    transport: &'a dyn Transport,
}

impl<'a> RequestClient<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// GET /api/request — every published help request.
    pub fn list_requests(&self, expected_status: u16) -> Result<Outcome<Vec<HelpRequest>>, ApiError> {
        let path = Endpoint::Requests.path()?;
        info!(%path, "GET all requests");

        let request = HttpRequest::new(HttpMethod::Get, path);
        let response = self.transport.send(&request)?;

        if expected_status == 200 {
            Ok(Outcome::Parsed(expect_model(response, expected_status)?))
        } else {
            Ok(Outcome::Raw(expect_status(response, expected_status)?))
        }
    }

    /// GET /api/request/{id} — one help request in detail.
    pub fn get_request(
        &self,
        id: &str,
        expected_status: u16,
    ) -> Result<Outcome<HelpRequest>, ApiError> {
        let path = Endpoint::RequestDetail.resolve(&[("id", id)])?;
        info!(%path, "GET request detail");

        let request = HttpRequest::new(HttpMethod::Get, path);
        let response = self.transport.send(&request)?;

        if expected_status == 200 {
            Ok(Outcome::Parsed(expect_model(response, expected_status)?))
        } else {
            Ok(Outcome::Raw(expect_status(response, expected_status)?))
        }
    }

    /// POST /api/request/{id}/contribution — contribute to a request.
    /// The service answers with a plain-text confirmation.
    pub fn contribute(&self, id: &str, expected_status: u16) -> Result<ApiResponse, ApiError> {
        let path = Endpoint::RequestContribution.resolve(&[("id", id)])?;
        info!(%path, "POST contribution");

        let request = HttpRequest::new(HttpMethod::Post, path);
        let response = self.transport.send(&request)?;
        expect_status(response, expected_status)
    }
}
