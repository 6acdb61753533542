//! Test harness core for the help-request service API.
//!
//! # Overview
//! Typed clients build plain-data `HttpRequest` values and hand them to a
//! [`transport::Transport`]; the shared validator enforces the expected
//! status and, where a schema applies, the shape of the JSON body. In
//! mocked runs the transport is an in-memory table of canned responses;
//! in live runs the caller supplies an executor that does real I/O.
//!
//! # Design
//! - One `MockTransport` instance per test — no shared mutable mock
//!   state, no locking, no cross-test leakage.
//! - Clients return [`validate::Outcome`]: a parsed model when the server
//!   satisfied the contract, the raw response otherwise. Tests branch on
//!   the variant instead of catching harness failures.
//! - Every error names what was attempted: an unconfigured mock carries
//!   the exact lookup key, a status mismatch both codes and the body.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod mocks;
pub mod transport;
pub mod validate;

pub use api::auth::{AuthClient, AuthPayload, AuthSuccess};
pub use api::request::{HelpRequest, RequestClient};
pub use api::user::{AddFavouritePayload, UserClient, UserProfile};
pub use config::Config;
pub use endpoints::Endpoint;
pub use error::ApiError;
pub use http::{ApiResponse, Body, HttpMethod, HttpRequest};
pub use mocks::MockFactory;
pub use transport::{MockTransport, Transport};
pub use validate::{expect_model, expect_status, Outcome, ResponseSchema};
