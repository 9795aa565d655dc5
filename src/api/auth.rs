//! Optional HTTP Basic authentication.

use crate::config::AuthConfig;
use crate::error::ApiError;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

/// Reject requests that do not carry the configured credentials.
pub async fn require_basic_auth(
    State(auth): State<Arc<AuthConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if check_credentials(&auth, request.headers()) {
        next.run(request).await
    } else {
        debug!(path = %request.uri().path(), "Rejected unauthenticated request");
        ApiError::Unauthorized.into_response()
    }
}

fn check_credentials(auth: &AuthConfig, headers: &HeaderMap) -> bool {
    let Some((username, password)) = basic_credentials(headers) else {
        return false;
    };
    // Evaluate both comparisons so timing does not reveal which one failed.
    let user_ok = username.as_bytes().ct_eq(auth.username.as_bytes());
    let pass_ok = password.as_bytes().ct_eq(auth.password.as_bytes());
    bool::from(user_ok & pass_ok)
}

fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn auth() -> AuthConfig {
        AuthConfig {
            username: "gort".into(),
            password: "klaatu:barada".into(),
        }
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_accepts_matching_credentials() {
        let value = format!("Basic {}", STANDARD.encode("gort:klaatu:barada"));
        assert!(check_credentials(&auth(), &headers(&value)));
    }

    #[test]
    fn test_rejects_wrong_or_missing_credentials() {
        let wrong = format!("Basic {}", STANDARD.encode("gort:nikto"));
        assert!(!check_credentials(&auth(), &headers(&wrong)));
        assert!(!check_credentials(&auth(), &headers("Bearer abc")));
        assert!(!check_credentials(&auth(), &headers("Basic !!!")));
        assert!(!check_credentials(&auth(), &HeaderMap::new()));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let value = format!("basic {}", STANDARD.encode("gort:klaatu:barada"));
        assert!(check_credentials(&auth(), &headers(&value)));
    }
}
