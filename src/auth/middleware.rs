use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderMap},
    Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::sync::Arc;

use crate::auth::extractors::AuthenticatedUser;
use crate::auth::token::TokenService;
use crate::error::AppError;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Why a request was refused before reaching a protected handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No `Authorization` header.
    MissingHeader,
    /// Header present but not valid UTF-8 or without the `Bearer ` prefix.
    MalformedHeader,
    /// Token failed signature, structure or expiry checks.
    InvalidToken,
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> AppError {
        match rejection {
            Rejection::MissingHeader | Rejection::MalformedHeader => {
                AppError::Unauthorized("Access denied".into())
            }
            Rejection::InvalidToken => AppError::Unauthorized("Invalid token".into()),
        }
    }
}

/// Resolves the caller's identity from request headers.
///
/// Verification is only attempted once a `Bearer` token has been found.
pub fn authenticate(
    headers: &HeaderMap,
    tokens: &TokenService,
) -> Result<AuthenticatedUser, Rejection> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(Rejection::MissingHeader)?;

    let token = value
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty())
        .ok_or(Rejection::MalformedHeader)?;

    let claims = tokens.verify(token).map_err(|_| Rejection::InvalidToken)?;

    Ok(AuthenticatedUser {
        user_id: claims.sub,
    })
}

/// Guards every service it wraps: requests without a valid bearer token are
/// answered with 401 and never reach the inner service.
pub struct AuthMiddleware {
    tokens: Arc<TokenService>,
}

impl AuthMiddleware {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            tokens: Arc::clone(&self.tokens),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(req.headers(), &self.tokens) {
            Ok(user) => {
                // Extensions belong to this request only.
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(rejection) => {
                log::debug!("Rejected {} {}: {:?}", req.method(), req.path(), rejection);
                let app_err: AppError = rejection.into();
                let res = req.error_response(app_err).map_into_right_body();
                Box::pin(ready(Ok(res)))
            }
        }
    }
}
