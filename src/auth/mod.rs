pub mod extractors;
pub mod middleware;
pub mod password;
pub mod service;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUser;
pub use middleware::{authenticate, AuthMiddleware, Rejection};
pub use password::PasswordHasher;
pub use service::AuthService;
pub use token::{Claims, TokenService};

/// Email and password, as sent to both `/register` and `/login`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Between 6 and 72 characters; bcrypt ignores input past 72 bytes.
    #[validate(length(min = 6, max = 72))]
    pub password: String,
}

/// Returned by a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The JWT (JSON Web Token) to send as `Authorization: Bearer <token>`.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_credentials_validation() {
        assert!(credentials("alice@example.com", "secret123").validate().is_ok());
        assert!(credentials("aliceexample.com", "secret123").validate().is_err());
        assert!(credentials("alice@example.com", "123").validate().is_err());
        assert!(credentials("alice@example.com", "").validate().is_err());
        assert!(credentials("alice@example.com", &"p".repeat(73))
            .validate()
            .is_err());
    }
}
