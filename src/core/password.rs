use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Errors that can occur while hashing a password
#[derive(Debug, Error)]
pub enum HashError {
    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("hashing task failed: {0}")]
    TaskJoin(String),
}

/// Hash a plaintext password into an argon2id PHC string
///
/// A fresh random salt is generated per call, so hashing the same
/// plaintext twice yields different digests; each digest still verifies
/// against its original plaintext. The empty string hashes like any
/// other input.
pub fn hash(plaintext: &str) -> Result<String, HashError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|e| HashError::Hash(e.to_string()))
}

/// True iff `plaintext` is the password the digest was derived from
///
/// A digest that does not parse as a PHC string verifies as false rather
/// than surfacing an error; the caller cannot tell the difference between
/// a wrong password and a corrupt digest.
pub fn verify(digest: &str, plaintext: &str) -> bool {
    match PasswordHash::new(digest) {
        Ok(parsed) => Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Run [`hash`] on the blocking pool
///
/// Argon2 is deliberately slow; keep it off the async executor.
pub async fn hash_blocking(plaintext: String) -> Result<String, HashError> {
    tokio::task::spawn_blocking(move || hash(&plaintext))
        .await
        .map_err(|e| HashError::TaskJoin(e.to_string()))?
}

/// Run [`verify`] on the blocking pool
pub async fn verify_blocking(digest: String, plaintext: String) -> bool {
    tokio::task::spawn_blocking(move || verify(&digest, &plaintext))
        .await
        .unwrap_or(false)
}
