//! Credential check and session-token issuance.

use crate::auth::password::{looks_hashed, verify};
use crate::auth::{AuthKeys, Claims};
use crate::error::AppError;
use crate::model::User;
use sqlx::PgPool;

pub struct AuthService;

impl AuthService {
    /// Verify (email, password) against the credential store and issue a
    /// session token for the matching user.
    pub async fn login(
        pool: &PgPool,
        keys: &AuthKeys,
        email: &str,
        password: &str,
    ) -> Result<(String, User), AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::UserNotFound)?;

        // Rows provisioned by hand sometimes hold plaintext instead of a hash.
        if !looks_hashed(&user.password_hash) {
            tracing::error!(
                email,
                "stored password is not a bcrypt hash; re-provision this user with create-user"
            );
            return Err(AppError::CorruptPasswordHash);
        }

        if !verify(password, &user.password_hash)? {
            return Err(AppError::WrongPassword);
        }

        let token = keys.sign(&Claims {
            id: user.id,
            name: user.name.clone(),
        })?;
        Ok((token, user))
    }
}
