pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::UserSummary;

// Re-export necessary items
pub use extractors::AuthenticatedUserId;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

/// Normalizes an email address for storage and lookup: trimmed and
/// lowercased, so `" A@B.com "` and `"a@b.com"` refer to the same account.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Represents the payload for a user login request.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// User's password.
    /// Only presence is checked here; a wrong length surfaces as the same
    /// generic 401 as any other bad credential.
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginRequest {
    /// Returns the request with its email normalized, so padded or
    /// mixed-case addresses validate and look up identically.
    pub fn normalized(mut self) -> Self {
        self.email = normalize_email(&self.email);
        self
    }
}

/// Represents the payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// First name of the account holder.
    /// Must be between 2 and 50 characters.
    #[validate(length(min = 2, max = 50))]
    pub f_name: String,
    /// Last name of the account holder.
    /// Must be between 2 and 50 characters.
    #[validate(length(min = 2, max = 50))]
    pub l_name: String,
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email)]
    pub email: String,
    /// Password for the new account.
    /// Must be at least 6 characters long.
    #[validate(length(min = 6))]
    pub password: String,
}

impl RegisterRequest {
    /// Returns the request with its email normalized for validation,
    /// storage, and the duplicate check.
    pub fn normalized(mut self) -> Self {
        self.email = normalize_email(&self.email);
        self
    }
}

/// Response structure after successful authentication (login or registration).
/// Contains the bearer token and a summary of the account, never the
/// password hash.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT (JSON Web Token) for session authentication.
    pub token: String,
    /// The authenticated account.
    pub user: UserSummary,
}
