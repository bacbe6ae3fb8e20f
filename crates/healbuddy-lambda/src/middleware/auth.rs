use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;

/// Bearer identity middleware.
///
/// Extracts `Authorization: Bearer <token>` and exposes the opaque subject
/// as `AuthUser` in request extensions. The screening core never needs
/// more than an opaque identifier; it is used for audit correlation only.
pub async fn require_auth(mut req: Request, next: Next) -> Result<Response, ApiError> {
    let sub = {
        let auth_header = req
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("malformed authorization header".to_string()))?;

        if token.is_empty() {
            return Err(ApiError::Unauthorized("empty bearer token".to_string()));
        }

        token.to_string()
    };

    req.extensions_mut().insert(AuthUser { sub });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from the bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}
