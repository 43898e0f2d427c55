//! The fixed `changeUserStatus` mutation and the request that carries it.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;

/// GitHub GraphQL API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Stand-in for a personal access token. Requests carrying it are rejected
/// by GitHub.
pub const PLACEHOLDER_TOKEN: &str = "YOUR_PERSONAL_ACCESS_TOKEN";

/// GraphQL document sent on every call.
pub const CHANGE_USER_STATUS: &str = r#"
mutation {
    changeUserStatus(input: {clientMutationId: "YOUR_USER_ID", emoji: ":rocket:", expiresAt: "2021-05-09T00:00:00", limitedAvailability: true, message: "Working on an API tutorial"}) {
        clientMutationId
        status {
            message
            emoji
            updatedAt
        }
    }
}
"#;

/// JSON body of a GraphQL POST.
#[derive(Debug, Serialize)]
struct GraphqlBody<'a> {
    query: &'a str,
}

/// A fully built mutation request. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct MutationRequest {
    endpoint: String,
    headers: HeaderMap,
    body: String,
}

impl MutationRequest {
    /// Builds the request for [`CHANGE_USER_STATUS`] against `endpoint`,
    /// authorized with `token` as a bearer credential.
    pub fn new(endpoint: impl Into<String>, token: &str) -> Result<Self, crate::InvokeError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let body = serde_json::to_string(&GraphqlBody {
            query: CHANGE_USER_STATUS,
        })?;

        Ok(Self {
            endpoint: endpoint.into(),
            headers,
            body,
        })
    }

    /// URL the mutation is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `Content-Type` and `Authorization` headers sent with the request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// JSON-encoded `{"query": ...}` payload.
    pub fn body(&self) -> &str {
        &self.body
    }
}
