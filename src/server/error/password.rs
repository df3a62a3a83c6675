use thiserror::Error;

/// Failures while hashing or verifying a password.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Argon2 rejected the input or the stored PHC string.
    #[error(transparent)]
    Hash(#[from] argon2::password_hash::Error),

    /// The blocking hash task panicked or was cancelled.
    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
