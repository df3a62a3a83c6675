//! Password hashing with Argon2id.
//!
//! Passwords are stored as PHC strings (`$argon2id$v=19$...`) which embed the salt and
//! parameters, so verification needs nothing but the stored string. Argon2 is CPU
//! bound, so both operations run on tokio's blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tokio::task;

use crate::server::error::password::PasswordError;

/// Hashes a plain-text password with a fresh random salt.
///
/// # Arguments
/// - `password` - Plain-text password
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash string
/// - `Err(PasswordError)` - Hashing failed or the blocking task did not complete
pub async fn hash_password(password: &str) -> Result<String, PasswordError> {
    let password = password.to_owned();

    task::spawn_blocking(move || hash_blocking(&password)).await?
}

/// Checks a plain-text password against a stored PHC hash string.
///
/// # Arguments
/// - `password` - Plain-text password supplied by the client
/// - `password_hash` - PHC string stored for the user
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(PasswordError)` - Stored hash could not be parsed or the blocking task did
///   not complete
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();

    task::spawn_blocking(move || verify_blocking(&password, &password_hash)).await?
}

fn hash_blocking(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

fn verify_blocking(password: &str, password_hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(password_hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
