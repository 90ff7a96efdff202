/**
 * Session Middleware
 *
 * Runs in front of every route. It reads the session token from the
 * `auth-token` cookie or the `Authorization: Bearer` header, verifies it,
 * and attaches the result to the request:
 *
 * - a [`Session`] extension, always present after this layer
 * - the `x-user-id` header, only when the token is valid
 *
 * Any `x-user-id` header sent by the client is removed first, so handlers
 * downstream can trust the header.
 *
 * Missing or invalid tokens never fail the request. Routes that need a
 * member extract [`AuthUser`] and get a 401 there.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::cookie::token_from_headers;
use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;
use crate::shared::identity::IdentityId;

/// Header carrying the verified identity id to downstream handlers
pub const USER_ID_HEADER: &str = "x-user-id";

/// Result of session resolution for one request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session(pub Option<IdentityId>);

/// Session middleware
pub async fn session_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Response {
    if request.headers_mut().remove(USER_ID_HEADER).is_some() {
        tracing::warn!("Dropped client-supplied {} header", USER_ID_HEADER);
    }

    let identity = token_from_headers(request.headers()).and_then(|token| tokens.verify(&token));

    if let Some(id) = &identity {
        match HeaderValue::from_str(id.as_str()) {
            Ok(value) => {
                request.headers_mut().insert(USER_ID_HEADER, value);
            }
            Err(e) => tracing::warn!("Identity id is not a valid header value: {}", e),
        }
    }

    request.extensions_mut().insert(Session(identity));
    next.run(request).await
}

/// Identity resolved by the session middleware, or `None`
fn session_identity(parts: &Parts) -> Option<IdentityId> {
    parts
        .extensions
        .get::<Session>()
        .and_then(|session| session.0.clone())
}

/// Axum extractor for a signed-in member
///
/// Rejects with 401 when the request carries no valid session.
#[derive(Clone, Debug)]
pub struct AuthUser(pub IdentityId);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        session_identity(parts)
            .map(AuthUser)
            .ok_or_else(|| BackendError::unauthorized("Unauthorized"))
    }
}

/// Axum extractor for an optional member; never rejects
#[derive(Clone, Debug, Default)]
pub struct MaybeUser(pub Option<IdentityId>);

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(session_identity(parts)))
    }
}
