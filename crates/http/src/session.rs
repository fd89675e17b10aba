//! Session identity derivation.
//!
//! The like cap is scoped by an opaque per-visitor identifier. A `sid`
//! cookie takes precedence; without one the identifier is derived as a
//! UUIDv5 over client address and user agent, so repeat requests from the
//! same visitor map to the same session without any issued state.

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, USER_AGENT};
use axum::http::request::Parts;
use std::convert::Infallible;
use uuid::Uuid;

use pulse_core::SESSION_COOKIE_NAME;

/// Opaque per-visitor session identifier extracted from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn cookie_value(parts: &Parts, name: &str) -> Option<String> {
    let header = parts.headers.get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_owned())
    })
}

fn derived_session_id(parts: &Parts) -> String {
    let addr = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let agent = parts.headers.get(USER_AGENT).and_then(|v| v.to_str().ok()).unwrap_or("");
    Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("{addr}|{agent}").as_bytes()).to_string()
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = cookie_value(parts, SESSION_COOKIE_NAME)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| derived_session_id(parts));
        Ok(Self(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri("/like/x");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn cookie_takes_precedence() {
        let mut parts =
            parts_with_headers(&[("cookie", "theme=dark; sid=abc123"), ("user-agent", "ua")]);
        let id = SessionId::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[tokio::test]
    async fn derived_id_is_stable_per_visitor() {
        let headers = [("x-forwarded-for", "203.0.113.7"), ("user-agent", "Mozilla/5.0")];
        let mut first = parts_with_headers(&headers);
        let mut second = parts_with_headers(&headers);
        let a = SessionId::from_request_parts(&mut first, &()).await.unwrap();
        let b = SessionId::from_request_parts(&mut second, &()).await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn different_visitors_get_different_ids() {
        let mut first =
            parts_with_headers(&[("x-forwarded-for", "203.0.113.7"), ("user-agent", "ua")]);
        let mut second =
            parts_with_headers(&[("x-forwarded-for", "203.0.113.8"), ("user-agent", "ua")]);
        let a = SessionId::from_request_parts(&mut first, &()).await.unwrap();
        let b = SessionId::from_request_parts(&mut second, &()).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn empty_cookie_value_falls_back_to_derivation() {
        let mut parts = parts_with_headers(&[("cookie", "sid="), ("user-agent", "ua")]);
        let id = SessionId::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(!id.as_str().is_empty());
    }
}
