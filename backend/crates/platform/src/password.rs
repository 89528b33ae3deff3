//! Password Hashing and Verification
//!
//! bcrypt-based password handling:
//! - Adaptive hash with a fixed work factor (cost 10)
//! - Constant-time verification (inside the bcrypt crate)
//! - Zeroization of clear-text passwords on drop
//!
//! The resulting hash string embeds salt and cost; no extra storage
//! columns are needed beyond the hash itself.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed bcrypt work factor.
pub const BCRYPT_COST: u32 = 10;

/// Password hashing/verification errors.
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid bcrypt string
    #[error("Invalid password hash format")]
    InvalidHashFormat,

    /// Empty password (nothing meaningful to hash)
    #[error("Password cannot be empty")]
    Empty,
}

/// Clear text password with automatic memory zeroization.
///
/// Erased from memory when dropped. Does not implement `Clone`, and
/// `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a raw password, rejecting empty input.
    pub fn new(raw: String) -> Result<Self, PasswordHashError> {
        if raw.is_empty() {
            return Err(PasswordHashError::Empty);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClearTextPassword(<redacted>)")
    }
}

/// Hash a password with the fixed work factor.
pub fn hash_password(password: &ClearTextPassword) -> Result<String, PasswordHashError> {
    bcrypt::hash(password.as_str(), BCRYPT_COST)
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))
}

/// Verify a password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch; `Err` only when the stored hash
/// itself is malformed.
pub fn verify_password(
    password: &ClearTextPassword,
    stored_hash: &str,
) -> Result<bool, PasswordHashError> {
    bcrypt::verify(password.as_str(), stored_hash)
        .map_err(|_| PasswordHashError::InvalidHashFormat)
}
