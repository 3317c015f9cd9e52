//! Password hashing for generated user records.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to hash password: {0}")]
pub struct HashError(String);

/// Hashes a plaintext password with Argon2 and a fresh random salt.
///
/// A run supplies a single plaintext, so every generated user ends up sharing
/// one hash.
pub fn hash_password(password: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| HashError(e.to_string()))?;
    Ok(hash.to_string())
}
