//! Credential service: registration and authentication
//!
//! # Performance
//!
//! - Password hashing/verification runs on the blocking thread pool
//! - The JWT service is passed by reference (pre-computed keys)

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::types::{Confirmation, TokenResponse};
use sqlx::error::DatabaseError as _;
use sqlx::PgPool;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Stores only the bcrypt hash of the password; the plaintext is
    /// neither persisted nor logged.
    pub async fn register(
        pool: &PgPool,
        email: &str,
        name: &str,
        password: &str,
        bcrypt_cost: u32,
    ) -> Result<Confirmation, ApiError> {
        // Validate email format
        if !email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        // Check if email already exists
        if UserRepository::email_exists(pool, email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::AlreadyRegistered);
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_owned = password.to_string();
        let password_hash = PasswordService::hash_async(password_owned, bcrypt_cost)
            .await
            .map_err(ApiError::Internal)?;

        UserRepository::create(pool, email, name, &password_hash)
            .await
            .map_err(registration_error)?;

        Ok(Confirmation::new("User registered successfully"))
    }

    /// Authenticate with email and password, issuing an access token
    ///
    /// The token carries the caller's {id, email, name} and expires after
    /// the configured duration.
    pub async fn authenticate(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<TokenResponse, ApiError> {
        // Find user by email
        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or(ApiError::NotRegistered)?;

        // Verify password on blocking thread pool (CPU-intensive);
        // bcrypt's own comparison, never string equality on hashes
        let password_owned = password.to_string();
        let hash_owned = user.password_hash.clone();
        let valid = PasswordService::verify_async(password_owned, hash_owned)
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::BadCredentials);
        }

        // Issue token (uses pre-computed keys - fast)
        let token = jwt_service
            .issue_token(user.id, &user.email, &user.name)
            .map_err(ApiError::Internal)?;

        Ok(TokenResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.token_expiry_secs(),
        })
    }
}

/// Map a failed user insert to the right error kind
///
/// Two concurrent registrations can both pass the email_exists check;
/// the unique index on users.email then rejects the later insert, which
/// must still surface as AlreadyRegistered rather than a server error.
fn registration_error(err: anyhow::Error) -> ApiError {
    if let Some(sqlx::Error::Database(db_err)) = err.downcast_ref::<sqlx::Error>() {
        if db_err.is_unique_violation() {
            return ApiError::AlreadyRegistered;
        }
    }
    ApiError::Internal(err)
}
