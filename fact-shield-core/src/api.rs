//! HTTP client wrapper around a pluggable [`Transport`].
//!
//! The wrapper owns URL building, bearer headers, JSON encoding and the
//! single error path for non-2xx answers. The transport only moves bytes.

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{
    Claim, ClaimListResponse, ClaimStatus, EscalatedQueueResponse, SignInResponse, Vote,
};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request over the wire. No retries, no timeout.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<R, ApiError> {
        let body = self.execute(Method::Get, path, None, token).await?;
        decode(&body)
    }

    /// `body` defaults to `{}` when omitted.
    pub async fn post<R: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
        token: Option<&str>,
    ) -> Result<R, ApiError> {
        let body = self.execute(Method::Post, path, body, token).await?;
        decode(&body)
    }

    pub async fn claims_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, ApiError> {
        let path = format!("/claims?status={}", status.as_str());
        self.get::<ClaimListResponse>(&path, None)
            .await
            .map(ClaimListResponse::into_items)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, ApiError> {
        self.post(
            "/auth/signin",
            Some(serde_json::json!({ "email": email, "password": password })),
            None,
        )
        .await
    }

    pub async fn escalated_queue(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<Vec<Claim>, ApiError> {
        let path = format!("/fact-checkers/{user_id}/escalated");
        self.get::<EscalatedQueueResponse>(&path, Some(token))
            .await
            .map(EscalatedQueueResponse::into_items)
    }

    /// The response body is not inspected; only the status decides success.
    pub async fn cast_vote(
        &self,
        claim_id: &str,
        user_id: &str,
        vote: Vote,
        token: &str,
    ) -> Result<(), ApiError> {
        let path = format!("/claims/{claim_id}/vote");
        let body = serde_json::json!({ "user_id": user_id, "vote": vote });
        self.execute(Method::Post, &path, Some(body), Some(token))
            .await
            .map(drop)
    }

    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        token: Option<&str>,
    ) -> HttpRequest {
        let mut headers = Vec::new();
        let body = match method {
            Method::Get => None,
            Method::Post => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(body.unwrap_or_else(|| serde_json::json!({})).to_string())
            }
        };
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        HttpRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        token: Option<&str>,
    ) -> Result<String, ApiError> {
        let request = self.build_request(method, path, body, token);
        debug!("{method} {}", request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            warn!("{method} {path} returned {}", response.status);
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct Canned {
        response: Result<HttpResponse, ApiError>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl Canned {
        fn ok(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status,
                    body: body.into(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for &Canned {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.borrow_mut().push(request);
            self.response.clone()
        }
    }

    fn client(canned: &Canned) -> ApiClient<&Canned> {
        ApiClient::new(ClientConfig::new("http://api.test"), canned)
    }

    #[test]
    fn get_without_token_sends_no_headers() {
        let canned = Canned::ok(200, "[]");
        let items = block_on(client(&canned).claims_by_status(ClaimStatus::True)).expect("get");
        assert!(items.is_empty());

        let seen = canned.seen.borrow();
        assert_eq!(seen[0].method, Method::Get);
        assert_eq!(seen[0].url, "http://api.test/claims?status=true");
        assert!(seen[0].headers.is_empty());
        assert_eq!(seen[0].body, None);
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        let canned = Canned::ok(200, "{}");
        let req = client(&canned).build_request(Method::Get, "/x", None, Some(""));
        assert_eq!(req.header("authorization"), None);
    }

    #[test]
    fn post_defaults_to_empty_object_and_sets_bearer() {
        let canned = Canned::ok(200, r#"{"ok":true}"#);
        let out: serde_json::Value =
            block_on(client(&canned).post("/ping", None, Some("tok"))).expect("post");
        assert_eq!(out["ok"], true);

        let seen = canned.seen.borrow();
        assert_eq!(seen[0].body.as_deref(), Some("{}"));
        assert_eq!(seen[0].header("Content-Type"), Some("application/json"));
        assert_eq!(seen[0].header("Authorization"), Some("Bearer tok"));
    }

    #[test]
    fn non_success_surfaces_body_text() {
        let canned = Canned::ok(500, "dataset index unavailable");
        let err = block_on(client(&canned).claims_by_status(ClaimStatus::False))
            .expect_err("should fail");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                body: "dataset index unavailable".into()
            }
        );
        assert_eq!(err.to_string(), "dataset index unavailable");
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let canned = Canned::ok(200, "<html>");
        let err = block_on(client(&canned).claims_by_status(ClaimStatus::True))
            .expect_err("should fail");
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn vote_posts_user_and_vote_and_ignores_body() {
        let canned = Canned::ok(200, "");
        block_on(client(&canned).cast_vote("c7", "u1", Vote::False, "tok1")).expect("vote");

        let seen = canned.seen.borrow();
        assert_eq!(seen[0].method, Method::Post);
        assert_eq!(seen[0].url, "http://api.test/claims/c7/vote");
        let body: serde_json::Value =
            serde_json::from_str(seen[0].body.as_deref().expect("body")).expect("json");
        assert_eq!(body, serde_json::json!({ "user_id": "u1", "vote": "false" }));
        assert_eq!(seen[0].header("Authorization"), Some("Bearer tok1"));
    }

    #[test]
    fn transport_failure_propagates() {
        let canned = Canned {
            response: Err(ApiError::Transport("connection refused".into())),
            seen: RefCell::new(Vec::new()),
        };
        let err = block_on(client(&canned).escalated_queue("u1", "tok")).expect_err("fail");
        assert_eq!(err.to_string(), "request failed: connection refused");
    }
}
