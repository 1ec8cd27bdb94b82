use crate::{
    auth::{AuthService, CredentialsRequest, LoginResponse},
    error::AppError,
    models::MessageResponse,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates an account for `email`. No token is returned; the client logs in next.
///
/// ## Responses:
/// - `201 Created`: `{"message": "User registered successfully"}`.
/// - `400 Bad Request`: Malformed body, or the email is already registered.
/// - `422 Unprocessable Entity`: Invalid email format or password length.
#[post("/register")]
pub async fn register(
    auth: web::Data<AuthService>,
    register_data: web::Json<CredentialsRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    auth.register(&register_data.email, &register_data.password)
        .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("User registered successfully")))
}

/// Login user
///
/// Authenticates a user and returns a bearer token.
///
/// ## Responses:
/// - `200 OK`: `{"token": "..."}`.
/// - `400 Bad Request`: Unknown email or wrong password, with the same body for both.
/// - `422 Unprocessable Entity`: Invalid email format or password length.
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    login_data: web::Json<CredentialsRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let token = auth
        .login(&login_data.email, &login_data.password)
        .await
        .map_err(|err| match err {
            AppError::NotFound(_) => AppError::InvalidCredentials,
            other => other,
        })?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
