//! Salted one-way password hashing.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$...`), which embed their
//! own salt and parameters, so no separate salt column is stored.

use anyhow::{Result, anyhow};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use shopdesk_core::domain::PlainPassword;

/// Hash a password on the blocking pool; Argon2 is deliberately slow.
pub async fn hash(password: PlainPassword) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

pub fn hash_password(password: &PlainPassword) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow!("failed to hash password: {e}"))
}

/// Returns `false` for a wrong password and for a malformed stored hash.
pub fn verify_password(password: &PlainPassword, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.expose().as_bytes(), &parsed_hash)
        .is_ok()
}
