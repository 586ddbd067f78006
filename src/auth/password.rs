//! Password hashing using bcrypt
//!
//! Provides secure password hashing and verification.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. For async contexts, use the
//! `_async` variants which run on the blocking thread pool.

use anyhow::Result;
use bcrypt::{hash, verify};

/// Default bcrypt cost factor (2^10 rounds)
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Password hashing service
///
/// Uses bcrypt with a per-hash random salt. Verification goes through
/// the primitive's own comparison, never string equality on hashes.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using bcrypt (blocking operation)
    ///
    /// # Performance Note
    /// This is CPU-intensive. For async contexts, use `hash_async`.
    pub fn hash(password: &str, cost: u32) -> Result<String> {
        hash(password, cost).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(password: String, cost: u32) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password, cost))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a hash (blocking operation)
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        verify(password, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool.
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
