//! Registration and login, composed from the credential store, the password
//! hasher and the token service.

use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::auth::password::PasswordHasher;
use crate::auth::token::TokenService;
use crate::error::AppError;
use crate::models::User;
use crate::store::Store;

// Verified against when the email is unknown, so both login failures cost one bcrypt run.
const DUMMY_PASSWORD: &str = "taskkeep-dummy-password";

#[derive(Clone)]
pub struct AuthService {
    store: Store,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
    dummy_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(store: Store, hasher: PasswordHasher, tokens: Arc<TokenService>) -> Self {
        Self {
            store,
            hasher,
            tokens,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    pub fn tokens(&self) -> Arc<TokenService> {
        Arc::clone(&self.tokens)
    }

    /// Creates an account. Fails with `DuplicateEmail` when the email is taken;
    /// the store decides that atomically.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        let password_hash = self.hasher.hash_blocking(password.to_string()).await?;
        let user = self.store.create_user(email, &password_hash).await?;
        log::info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Checks credentials and issues a session token.
    ///
    /// An unknown email fails with `NotFound`, a wrong password with
    /// `InvalidCredentials`. Callers facing the network should not expose the
    /// difference.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = match self.store.find_user_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound(msg)) => {
                self.burn_verify(password).await?;
                log::debug!("Login attempt for unknown email");
                return Err(AppError::NotFound(msg));
            }
            Err(e) => return Err(e),
        };

        let matches = self
            .hasher
            .verify_blocking(password.to_string(), user.password_hash.clone())
            .await?;
        if !matches {
            log::debug!("Password mismatch for user {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        self.tokens.issue(user.id)
    }

    async fn burn_verify(&self, password: &str) -> Result<(), AppError> {
        let hasher = self.hasher;
        let dummy_hash = self
            .dummy_hash
            .get_or_try_init(|| hasher.hash_blocking(DUMMY_PASSWORD.to_string()))
            .await?;
        hasher
            .verify_blocking(password.to_string(), dummy_hash.clone())
            .await?;
        Ok(())
    }
}
