//! In-process implementation of the help-request service, used by live
//! integration tests. Implements the same endpoint table the real service
//! exposes: auth, user profile, favourites, help requests, contribution.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

/// Credentials of the seeded test account.
pub const TEST_LOGIN: &str = "test@test.com";
pub const TEST_PASSWORD: &str = "password";

/// Token issued on a successful login and required by /api/user/*.
pub const TOKEN: &str = "live-mock-jwt-token-abc123xyz";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HelpRequest {
    pub id: String,
    pub title: String,
    pub requester_type: String,
    pub help_type: String,
    pub contributors_count: u64,
    pub request_goal: u64,
    pub request_goal_current_value: u64,
}

#[derive(Deserialize)]
pub struct LoginPayload {
    pub login: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AddFavouritePayload {
    #[serde(rename = "requestId")]
    pub request_id: String,
}

#[derive(Debug, Default)]
pub struct ServiceState {
    pub favourites: HashSet<String>,
    pub requests: HashMap<String, HelpRequest>,
}

pub type Db = Arc<RwLock<ServiceState>>;

fn seed_request(id: &str, title: &str) -> HelpRequest {
    HelpRequest {
        id: id.to_string(),
        title: title.to_string(),
        requester_type: "organization".to_string(),
        help_type: "material".to_string(),
        contributors_count: 0,
        request_goal: 1000,
        request_goal_current_value: 0,
    }
}

pub fn app() -> Router {
    let mut requests = HashMap::new();
    for req in [
        seed_request("request-id-1", "Help with the community garden"),
        seed_request("request-id-2", "Rebuild the shelter roof"),
    ] {
        requests.insert(req.id.clone(), req);
    }

    let db: Db = Arc::new(RwLock::new(ServiceState {
        favourites: HashSet::new(),
        requests,
    }));

    Router::new()
        .route("/api/auth", post(login))
        .route("/api/user", get(get_user))
        .route(
            "/api/user/favourites",
            get(list_favourites).post(add_favourite),
        )
        .route("/api/user/favourites/{requestId}", delete(remove_favourite))
        .route("/api/request", get(list_requests))
        .route("/api/request/{id}", get(get_request))
        .route("/api/request/{id}/contribution", post(contribute))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "Unauthorized", "message": "Authentication required"})),
    )
        .into_response()
}

async fn login(Json(payload): Json<LoginPayload>) -> Response {
    if payload.login == TEST_LOGIN && payload.password == TEST_PASSWORD {
        info!(login = %payload.login, "login ok");
        (
            StatusCode::OK,
            Json(json!({"auth": true, "token": TOKEN})),
        )
            .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid credentials", "message": "Wrong login or password"})),
        )
            .into_response()
    }
}

async fn get_user(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "id": "user-42",
        "name": "Test User",
        "birthdate": "1990-05-21T00:00:00Z",
        "location": {"city": "Riga", "district": "Centrs"}
    }))
    .into_response()
}

async fn list_favourites(headers: HeaderMap, State(db): State<Db>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let state = db.read().await;
    let mut ids: Vec<String> = state.favourites.iter().cloned().collect();
    ids.sort();
    Json(ids).into_response()
}

async fn add_favourite(
    headers: HeaderMap,
    State(db): State<Db>,
    Json(payload): Json<AddFavouritePayload>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut state = db.write().await;
    if !state.requests.contains_key(&payload.request_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Bad Request", "message": "Unknown request id"})),
        )
            .into_response();
    }
    state.favourites.insert(payload.request_id);
    (StatusCode::OK, "Added to favourites").into_response()
}

async fn remove_favourite(
    headers: HeaderMap,
    State(db): State<Db>,
    Path(request_id): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut state = db.write().await;
    if state.favourites.remove(&request_id) {
        (StatusCode::OK, "Removed from favourites").into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Not Found", "message": "favourite does not exist"})),
        )
            .into_response()
    }
}

async fn list_requests(State(db): State<Db>) -> Json<Vec<HelpRequest>> {
    let state = db.read().await;
    let mut requests: Vec<HelpRequest> = state.requests.values().cloned().collect();
    requests.sort_by(|a, b| a.id.cmp(&b.id));
    Json(requests)
}

async fn get_request(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let state = db.read().await;
    match state.requests.get(&id) {
        Some(request) => Json(request.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Not Found", "message": "request does not exist"})),
        )
            .into_response(),
    }
}

async fn contribute(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let mut state = db.write().await;
    match state.requests.get_mut(&id) {
        Some(request) => {
            request.contributors_count += 1;
            (StatusCode::OK, "Contribution recorded").into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Not Found", "message": "request does not exist"})),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_request_serializes_to_json() {
        let request = seed_request("request-id-1", "Garden");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["id"], "request-id-1");
        assert_eq!(json["title"], "Garden");
        assert_eq!(json["help_type"], "material");
        assert_eq!(json["contributors_count"], 0);
    }

    #[test]
    fn add_favourite_payload_uses_camel_case() {
        let payload: AddFavouritePayload =
            serde_json::from_str(r#"{"requestId":"request-id-1"}"#).unwrap();
        assert_eq!(payload.request_id, "request-id-1");
    }

    #[test]
    fn add_favourite_payload_rejects_missing_request_id() {
        let result: Result<AddFavouritePayload, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn login_payload_rejects_missing_password() {
        let result: Result<LoginPayload, _> =
            serde_json::from_str(r#"{"login":"test@test.com"}"#);
        assert!(result.is_err());
    }
}
