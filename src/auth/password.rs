use crate::error::AppError;
use actix_web::web;

/// Work factor used when `BCRYPT_COST` is not configured.
pub const DEFAULT_COST: u32 = 10;

/// Salted, deliberately slow one-way password hashing (bcrypt).
///
/// The cost is fixed for the lifetime of the hasher; every record embeds its own
/// salt and cost, so `verify` works regardless of the cost in effect when the
/// record was produced.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes `password` under a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        if password.is_empty() {
            return Err(AppError::ValidationError("Password must not be empty".into()));
        }
        bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
    }

    /// Checks `password` against a stored record in constant time.
    ///
    /// A mismatch and a malformed record both yield `Ok(false)`; only an empty
    /// password is an error.
    pub fn verify(&self, password: &str, hashed_password: &str) -> Result<bool, AppError> {
        if password.is_empty() {
            return Err(AppError::ValidationError("Password must not be empty".into()));
        }
        match bcrypt::verify(password, hashed_password) {
            Ok(matches) => Ok(matches),
            Err(e) => {
                log::warn!("Stored password hash could not be parsed: {}", e);
                Ok(false)
            }
        }
    }

    /// `hash` on the blocking thread pool.
    pub async fn hash_blocking(self, password: String) -> Result<String, AppError> {
        web::block(move || self.hash(&password)).await?
    }

    /// `verify` on the blocking thread pool.
    pub async fn verify_blocking(
        self,
        password: String,
        hashed_password: String,
    ) -> Result<bool, AppError> {
        web::block(move || self.verify(&password, &hashed_password)).await?
    }
}
