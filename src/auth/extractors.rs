use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::error::AppError;

/// The identity bound to a request by `AuthMiddleware`.
///
/// Handlers take the owning user id for every task query from here, never from
/// the request body or path. Extraction fails with `401` when the middleware did
/// not run for the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>().copied() {
            Some(user) => ready(Ok(user)),
            None => {
                log::error!(
                    "No authenticated user on {}; is AuthMiddleware applied?",
                    req.path()
                );
                ready(Err(AppError::Unauthorized("Access denied".into()).into()))
            }
        }
    }
}
