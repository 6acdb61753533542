//! Registry of help-request service endpoints.
//!
//! # Design
//! Each endpoint is a symbolic identifier mapped to a path template with
//! named placeholders. Resolution substitutes every placeholder from the
//! supplied parameters and fails explicitly when one is missing, so a test
//! can never send a request with a literal `{requestId}` left in the path.

use crate::error::ApiError;

/// Symbolic identifiers for every endpoint the suite exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// POST — user authentication.
    Auth,
    /// GET — authenticated user profile.
    User,
    /// GET (list) / POST (add) — the user's favourite request IDs.
    UserFavourites,
    /// DELETE — remove one favourite by request ID.
    UserFavouriteDetail,
    /// GET — all help requests.
    Requests,
    /// GET — one help request by ID.
    RequestDetail,
    /// POST — contribute to one help request.
    RequestContribution,
}

impl Endpoint {
    /// Path template with `{name}` placeholders.
    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::Auth => "/api/auth",
            Endpoint::User => "/api/user",
            Endpoint::UserFavourites => "/api/user/favourites",
            Endpoint::UserFavouriteDetail => "/api/user/favourites/{requestId}",
            Endpoint::Requests => "/api/request",
            Endpoint::RequestDetail => "/api/request/{id}",
            Endpoint::RequestContribution => "/api/request/{id}/contribution",
        }
    }

    /// Placeholder names the template requires at resolution time.
    pub fn placeholders(&self) -> &'static [&'static str] {
        match self {
            Endpoint::UserFavouriteDetail => &["requestId"],
            Endpoint::RequestDetail | Endpoint::RequestContribution => &["id"],
            _ => &[],
        }
    }

    /// Substitute every placeholder and return the concrete path.
    ///
    /// Parameters the template does not use are ignored; a placeholder
    /// with no matching parameter is an error.
    pub fn resolve(&self, params: &[(&str, &str)]) -> Result<String, ApiError> {
        let mut path = self.template().to_string();
        for placeholder in self.placeholders() {
            let value = params
                .iter()
                .find(|(name, _)| name == placeholder)
                .map(|(_, value)| *value)
                .ok_or(ApiError::MissingPlaceholder {
                    placeholder,
                    template: self.template(),
                })?;
            path = path.replace(&format!("{{{placeholder}}}"), value);
        }
        Ok(path)
    }

    /// Resolve a template with no placeholders.
    pub fn path(&self) -> Result<String, ApiError> {
        self.resolve(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_endpoints_resolve_to_their_template() {
        assert_eq!(Endpoint::Auth.path().unwrap(), "/api/auth");
        assert_eq!(Endpoint::User.path().unwrap(), "/api/user");
        assert_eq!(
            Endpoint::UserFavourites.path().unwrap(),
            "/api/user/favourites"
        );
        assert_eq!(Endpoint::Requests.path().unwrap(), "/api/request");
    }

    #[test]
    fn placeholder_is_substituted() {
        let path = Endpoint::UserFavouriteDetail
            .resolve(&[("requestId", "abc-123")])
            .unwrap();
        assert_eq!(path, "/api/user/favourites/abc-123");

        let path = Endpoint::RequestContribution
            .resolve(&[("id", "req-1")])
            .unwrap();
        assert_eq!(path, "/api/request/req-1/contribution");
    }

    #[test]
    fn missing_placeholder_is_an_error() {
        let err = Endpoint::RequestDetail.resolve(&[]).unwrap_err();
        match err {
            ApiError::MissingPlaceholder {
                placeholder,
                template,
            } => {
                assert_eq!(placeholder, "id");
                assert_eq!(template, "/api/request/{id}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unused_parameters_are_ignored() {
        let path = Endpoint::RequestDetail
            .resolve(&[("id", "req-1"), ("unused", "x")])
            .unwrap();
        assert_eq!(path, "/api/request/req-1");
    }

    #[test]
    fn all_templates_share_the_api_prefix() {
        let endpoints = [
            Endpoint::Auth,
            Endpoint::User,
            Endpoint::UserFavourites,
            Endpoint::UserFavouriteDetail,
            Endpoint::Requests,
            Endpoint::RequestDetail,
            Endpoint::RequestContribution,
        ];
        for endpoint in endpoints {
            assert!(endpoint.template().starts_with("/api/"));
        }
    }
}
