//! Live suite against the in-process help-request server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every typed
//! client over real HTTP using a ureq-backed `Transport`. Validates that
//! request building, the validator, and the server contract hold
//! end-to-end — the same test bodies the mocked suite runs, minus the
//! canned-response layer.

use helpreq_core::{
    AddFavouritePayload, ApiError, ApiResponse, AuthClient, AuthPayload, Body, Config, HttpMethod,
    HttpRequest, Outcome, RequestClient, Transport, UserClient,
};

/// `Transport` backed by ureq, with the fixed per-request timeout from
/// the suite config and no retries.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data rather than `Err`, leaving status
/// interpretation to the validator.
struct LiveTransport {
    agent: ureq::Agent,
    base_url: String,
}

impl LiveTransport {
    fn new(config: &Config) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Self {
            agent,
            base_url: config.base_url.clone(),
        }
    }
}

/// Copy the request's headers onto a ureq builder, whichever typestate
/// it is in.
fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    builder
}

impl Transport for LiveTransport {
    fn send(&self, request: &HttpRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let headers = &request.headers;

        let mut response = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&url), headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&url), headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&url), headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(&url), headers).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                with_headers(self.agent.patch(&url), headers).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => with_headers(self.agent.patch(&url), headers).send_empty(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let is_json = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let body = if text.is_empty() {
            Body::Empty
        } else if is_json {
            let value = serde_json::from_str(&text)
                .map_err(|e| ApiError::Transport(format!("invalid JSON from server: {e}")))?;
            Body::Json(value)
        } else {
            Body::Text(text)
        };

        Ok(ApiResponse {
            status,
            ok: (200..300).contains(&status),
            body,
        })
    }
}

fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn full_suite_lifecycle() {
    let base_url = start_server();
    let config = Config::for_local(&base_url, mock_server::TEST_LOGIN, mock_server::TEST_PASSWORD);
    let transport = LiveTransport::new(&config);

    let auth_client = AuthClient::new(&transport);

    // Step 1: wrong password — expected 400, raw error body.
    let raw = auth_client
        .login(
            &AuthPayload::new(&config.test_login, &config.invalid_password),
            400,
        )
        .unwrap()
        .into_raw();
    assert_eq!(raw.status, 400);
    assert_eq!(raw.json_value().unwrap()["error"], "Invalid credentials");

    // Step 2: wrong password while expecting 200 — status mismatch.
    let err = auth_client
        .login(
            &AuthPayload::new(&config.test_login, &config.invalid_password),
            200,
        )
        .unwrap_err();
    assert!(matches!(err, ApiError::StatusMismatch { actual: 400, .. }));

    // Step 3: valid credentials — parsed, schema-checked token.
    let success = auth_client
        .login(
            &AuthPayload::new(&config.test_login, &config.test_password),
            200,
        )
        .unwrap()
        .into_parsed();
    assert!(success.auth);
    assert_eq!(success.token, mock_server::TOKEN);

    // Step 4: profile without a token — 401 raw.
    let anonymous = UserClient::new(&transport);
    let raw = anonymous.get_profile(401).unwrap().into_raw();
    assert_eq!(raw.status, 401);

    // Step 5: profile with the token.
    let user_client = UserClient::new(&transport).with_token(&success.token);
    let profile = user_client.get_profile(200).unwrap().into_parsed();
    assert_eq!(profile.id, "user-42");

    // Step 6: favourites start empty.
    let ids = user_client.get_favourites(200).unwrap().into_parsed();
    assert!(ids.is_empty(), "expected empty favourites");

    // Step 7: add a seeded request to favourites — plain text body.
    let raw = user_client
        .add_favourite(&AddFavouritePayload::new("request-id-1"), 200)
        .unwrap();
    assert_eq!(raw.text_value(), "Added to favourites");
    assert!(raw.json_value().is_err());

    let ids = user_client.get_favourites(200).unwrap().into_parsed();
    assert_eq!(ids, vec!["request-id-1".to_string()]);

    // Step 8: adding an unknown request is a 400.
    let raw = user_client
        .add_favourite(&AddFavouritePayload::new("no-such-request"), 400)
        .unwrap();
    assert_eq!(raw.status, 400);

    // Step 9: remove the favourite, then remove again — 404.
    let raw = user_client.remove_favourite("request-id-1", 200).unwrap();
    assert_eq!(raw.text_value(), "Removed from favourites");

    let raw = user_client.remove_favourite("request-id-1", 404).unwrap();
    assert_eq!(raw.status, 404);

    // Step 10: browse help requests — public endpoints.
    let request_client = RequestClient::new(&transport);
    let requests = request_client.list_requests(200).unwrap().into_parsed();
    assert_eq!(requests.len(), 2);

    let detail = request_client
        .get_request("request-id-2", 200)
        .unwrap()
        .into_parsed();
    assert_eq!(detail.id, "request-id-2");
    assert_eq!(detail.title.as_deref(), Some("Rebuild the shelter roof"));

    match request_client.get_request("no-such-request", 404).unwrap() {
        Outcome::Raw(raw) => assert_eq!(raw.status, 404),
        Outcome::Parsed(_) => panic!("expected a raw 404 response"),
    }

    // Step 11: contribute — plain text confirmation, count visible in detail.
    let raw = request_client.contribute("request-id-1", 200).unwrap();
    assert_eq!(raw.text_value(), "Contribution recorded");

    let detail = request_client
        .get_request("request-id-1", 200)
        .unwrap()
        .into_parsed();
    assert_eq!(detail.contributors_count, Some(1));
}
