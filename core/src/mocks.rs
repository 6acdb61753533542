//! Canned-response factory with named presets per domain scenario.
//!
//! # Design
//! `MockFactory` is sugar over `MockTransport::register`: a generic
//! constructor plus one builder per resource group (auth, user, request)
//! whose methods describe the scenario at the call site —
//! `mocks.auth().invalid_credentials()` instead of repeating literal
//! endpoints and status codes in every test body. Every preset is bound
//! to one fixed (method, endpoint, status, body) tuple.

use serde_json::Value;

use crate::endpoints::Endpoint;
use crate::http::{ApiResponse, Body, HttpMethod};
use crate::transport::MockTransport;

/// Canned bodies shared between the factory presets and test assertions.
pub mod mock_data {
    use serde_json::{json, Value};

    pub const TOKEN: &str = "mocked-jwt-via-factory-abc123xyz";
    pub const USER_ID: &str = "user-42";
    pub const FAVOURITES: [&str; 3] = ["request-id-1", "request-id-2", "request-id-3"];

    pub const FAVOURITE_ADDED_TEXT: &str = "Added to favourites";
    pub const FAVOURITE_REMOVED_TEXT: &str = "Removed from favourites";
    pub const CONTRIBUTION_TEXT: &str = "Contribution recorded";

    pub fn auth_success() -> Value {
        json!({"auth": true, "token": TOKEN})
    }

    pub fn auth_invalid_credentials() -> Value {
        json!({"error": "Invalid credentials", "message": "Wrong login or password"})
    }

    pub fn bad_request() -> Value {
        json!({"error": "Bad Request", "message": "Malformed request payload"})
    }

    pub fn unauthorized() -> Value {
        json!({"error": "Unauthorized", "message": "Authentication required"})
    }

    pub fn not_found(what: &str) -> Value {
        json!({"error": "Not Found", "message": format!("{what} does not exist")})
    }

    pub fn server_error() -> Value {
        json!({"error": "Server error", "message": "Planned server-side failure"})
    }

    pub fn user_profile() -> Value {
        json!({
            "id": USER_ID,
            "name": "Test User",
            "birthdate": "1990-05-21T00:00:00Z",
            "location": {"city": "Riga", "district": "Centrs"}
        })
    }

    pub fn favourites_list() -> Value {
        json!(FAVOURITES)
    }

    pub fn help_request(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Help with the community garden",
            "organization": {"title": "Green Yard", "is_verified": true},
            "description": "Weeding and replanting after the storm.",
            "requester_type": "organization",
            "help_type": "material",
            "contributors_count": 4,
            "request_goal": 1000,
            "request_goal_current_value": 250
        })
    }

    pub fn help_request_list() -> Value {
        json!([help_request("request-id-1"), help_request("request-id-2")])
    }
}

/// Builds canned responses and registers them into a [`MockTransport`].
pub struct MockFactory<'a> {
    transport: &'a MockTransport,
}

impl<'a> MockFactory<'a> {
    pub fn new(transport: &'a MockTransport) -> Self {
        Self { transport }
    }

    /// Generic constructor: status plus exactly one body form (JSON,
    /// plain text, or nothing), with `ok` derived from the status.
    pub fn register(&self, method: HttpMethod, endpoint: &str, status: u16, body: Body) {
        let response = match body {
            Body::Json(value) => ApiResponse::json(status, value),
            Body::Text(text) => ApiResponse::text(status, text),
            Body::Empty => ApiResponse::empty(status),
        };
        self.transport.register(method, endpoint, response);
    }

    /// Register a fully built response, for tests overriding the `ok`
    /// flag or otherwise needing more control than the presets give.
    pub fn register_response(&self, method: HttpMethod, endpoint: &str, response: ApiResponse) {
        self.transport.register(method, endpoint, response);
    }

    fn register_json(&self, method: HttpMethod, endpoint: &str, status: u16, value: Value) {
        self.register(method, endpoint, status, Body::Json(value));
    }

    fn register_text(&self, method: HttpMethod, endpoint: &str, status: u16, text: &str) {
        self.register(method, endpoint, status, Body::Text(text.to_string()));
    }

    pub fn auth(&self) -> AuthMocks<'_> {
        AuthMocks { factory: self }
    }

    pub fn user(&self) -> UserMocks<'_> {
        UserMocks { factory: self }
    }

    pub fn request(&self) -> RequestMocks<'_> {
        RequestMocks { factory: self }
    }
}

/// Presets for POST /api/auth.
pub struct AuthMocks<'a> {
    factory: &'a MockFactory<'a>,
}

impl AuthMocks<'_> {
    fn endpoint(&self) -> String {
        Endpoint::Auth.path().expect("static template")
    }

    pub fn successful_login(&self) {
        self.factory.register_json(
            HttpMethod::Post,
            &self.endpoint(),
            200,
            mock_data::auth_success(),
        );
    }

    pub fn invalid_credentials(&self) {
        self.factory.register_json(
            HttpMethod::Post,
            &self.endpoint(),
            400,
            mock_data::auth_invalid_credentials(),
        );
    }

    pub fn bad_request(&self) {
        self.factory.register_json(
            HttpMethod::Post,
            &self.endpoint(),
            400,
            mock_data::bad_request(),
        );
    }

    pub fn server_error(&self) {
        self.factory.register_json(
            HttpMethod::Post,
            &self.endpoint(),
            500,
            mock_data::server_error(),
        );
    }
}

/// Presets for the /api/user endpoints.
pub struct UserMocks<'a> {
    factory: &'a MockFactory<'a>,
}

impl UserMocks<'_> {
    pub fn profile_success(&self) {
        self.factory.register_json(
            HttpMethod::Get,
            &Endpoint::User.path().expect("static template"),
            200,
            mock_data::user_profile(),
        );
    }

    pub fn profile_unauthorized(&self) {
        self.factory.register_json(
            HttpMethod::Get,
            &Endpoint::User.path().expect("static template"),
            401,
            mock_data::unauthorized(),
        );
    }

    pub fn favourites_success(&self) {
        self.factory.register_json(
            HttpMethod::Get,
            &Endpoint::UserFavourites.path().expect("static template"),
            200,
            mock_data::favourites_list(),
        );
    }

    pub fn favourites_unauthorized(&self) {
        self.factory.register_json(
            HttpMethod::Get,
            &Endpoint::UserFavourites.path().expect("static template"),
            401,
            mock_data::unauthorized(),
        );
    }

    pub fn add_favourite_success(&self) {
        self.factory.register_text(
            HttpMethod::Post,
            &Endpoint::UserFavourites.path().expect("static template"),
            200,
            mock_data::FAVOURITE_ADDED_TEXT,
        );
    }

    pub fn add_favourite_bad_request(&self) {
        self.factory.register_json(
            HttpMethod::Post,
            &Endpoint::UserFavourites.path().expect("static template"),
            400,
            mock_data::bad_request(),
        );
    }

    pub fn remove_favourite_success(&self, request_id: &str) {
        let path = Endpoint::UserFavouriteDetail
            .resolve(&[("requestId", request_id)])
            .expect("requestId supplied");
        self.factory.register_text(
            HttpMethod::Delete,
            &path,
            200,
            mock_data::FAVOURITE_REMOVED_TEXT,
        );
    }

    pub fn remove_favourite_not_found(&self, request_id: &str) {
        let path = Endpoint::UserFavouriteDetail
            .resolve(&[("requestId", request_id)])
            .expect("requestId supplied");
        self.factory
            .register_json(HttpMethod::Delete, &path, 404, mock_data::not_found("favourite"));
    }
}

/// Presets for the /api/request endpoints.
pub struct RequestMocks<'a> {
    factory: &'a MockFactory<'a>,
}

impl RequestMocks<'_> {
    pub fn list_success(&self) {
        self.factory.register_json(
            HttpMethod::Get,
            &Endpoint::Requests.path().expect("static template"),
            200,
            mock_data::help_request_list(),
        );
    }

    pub fn list_server_error(&self) {
        self.factory.register_json(
            HttpMethod::Get,
            &Endpoint::Requests.path().expect("static template"),
            500,
            mock_data::server_error(),
        );
    }

    pub fn detail_success(&self, id: &str) {
        let path = Endpoint::RequestDetail
            .resolve(&[("id", id)])
            .expect("id supplied");
        self.factory
            .register_json(HttpMethod::Get, &path, 200, mock_data::help_request(id));
    }

    pub fn detail_not_found(&self, id: &str) {
        let path = Endpoint::RequestDetail
            .resolve(&[("id", id)])
            .expect("id supplied");
        self.factory
            .register_json(HttpMethod::Get, &path, 404, mock_data::not_found("request"));
    }

    pub fn contribution_success(&self, id: &str) {
        let path = Endpoint::RequestContribution
            .resolve(&[("id", id)])
            .expect("id supplied");
        self.factory
            .register_text(HttpMethod::Post, &path, 200, mock_data::CONTRIBUTION_TEXT);
    }
}
