use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Produces a salted one-way hash of a plaintext password. Each call embeds a
/// fresh random salt, so hashing the same input twice yields different output.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verifies a plaintext candidate against a stored hash. Returns `Ok(false)`
/// on mismatch; only a malformed stored hash produces an error.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
