/// Authentication for Finboard
///
/// The contract is deliberately small: verify a credential and return
/// an opaque user record or nothing. There is no session or token
/// machinery here.
///
/// # Modules
///
/// - `password`: Argon2id password hashing and verification
use sqlx::PgPool;
use tracing::debug;

use crate::models::user::User;

pub mod password;

/// Error type for authentication
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Database lookup failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored hash could not be processed
    #[error(transparent)]
    Password(#[from] password::PasswordError),
}

/// Authenticates a user by email and password
///
/// Returns the user on success, None when the email is unknown or the
/// password does not match. The two failure cases are indistinguishable
/// to the caller.
///
/// # Example
///
/// ```no_run
/// use finboard_shared::auth::authenticate;
/// # use sqlx::PgPool;
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// match authenticate(&pool, "user@example.com", "password").await? {
///     Some(user) => println!("Welcome, {}", user.name),
///     None => println!("Invalid credentials"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn authenticate(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<User>, AuthError> {
    let Some(user) = User::find_by_email(pool, email).await? else {
        debug!("Authentication failed: unknown email");
        return Ok(None);
    };

    if password::verify_password(password, &user.password_hash)? {
        Ok(Some(user))
    } else {
        debug!("Authentication failed: password mismatch");
        Ok(None)
    }
}
