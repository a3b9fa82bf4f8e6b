use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::error::ApiError;

/// Extracts and validates the bearer token, yielding the subject identity.
///
/// Every failure mode (missing header, wrong scheme, bad signature, expired
/// token) is a 401. The system never answers 403: handlers compare the
/// subject against the path identity themselves and also answer 401 on
/// mismatch.
#[derive(Debug)]
pub struct AuthUser(pub String);

/// Accepts only `Bearer <token>`, nothing else.
pub(crate) fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".into()))?;

        let token = bearer_token(auth_header)
            .ok_or_else(|| ApiError::Unauthorized("Unauthorized".into()))?;

        let claims = match keys.verify(token) {
            Ok(c) => c,
            Err(_) => {
                warn!("invalid or expired token");
                return Err(ApiError::Unauthorized("Unauthorized".into()));
            }
        };

        Ok(AuthUser(claims.sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use axum::http::Request;

    fn make_keys() -> JwtKeys {
        JwtKeys::new(&JwtConfig {
            secret: "test-secret".into(),
            ttl_minutes: 5,
        })
    }

    fn parts_with_auth(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/users/u1/role");
        if let Some(v) = value {
            builder = builder.header(axum::http::header::AUTHORIZATION, v);
        }
        let (parts, _) = builder.body(()).expect("request").into_parts();
        parts
    }

    #[test]
    fn bearer_token_requires_exact_scheme() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("abc"), None);
    }

    #[tokio::test]
    async fn extracts_subject_from_valid_token() {
        let keys = make_keys();
        let token = keys.sign("u1", "a@b.com").expect("sign");
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
        let AuthUser(sub) = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .expect("extract");
        assert_eq!(sub, "u1");
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let keys = make_keys();
        let mut parts = parts_with_auth(None);
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn rejects_non_bearer_scheme() {
        let keys = make_keys();
        let mut parts = parts_with_auth(Some("Basic dXNlcjpwYXNz"));
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn rejects_tampered_token() {
        let keys = make_keys();
        let other = JwtKeys::new(&JwtConfig {
            secret: "other-secret".into(),
            ttl_minutes: 5,
        });
        let token = other.sign("u1", "a@b.com").expect("sign");
        let mut parts = parts_with_auth(Some(&format!("Bearer {token}")));
        let err = AuthUser::from_request_parts(&mut parts, &keys)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }
}
