//! Typed clients, one per resource group of the help-request service.

pub mod auth;
pub mod request;
pub mod user;
