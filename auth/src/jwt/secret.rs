use secrecy::ExposeSecret;
use secrecy::SecretVec;

use super::errors::JwtError;

/// HMAC key shared by token issuance and verification.
///
/// Supplied by configuration at process start. Issuance and verification
/// must use the same secret, otherwise every token is rejected.
pub struct SigningSecret(SecretVec<u8>);

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningSecret([REDACTED])")
    }
}

impl SigningSecret {
    /// Minimum key size for HS256 (256 bits).
    pub const MIN_LENGTH: usize = 32;

    /// Wrap raw key material.
    ///
    /// # Errors
    /// * `WeakSecret` - Key is shorter than `MIN_LENGTH` bytes
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, JwtError> {
        let secret = secret.into();
        if secret.len() < Self::MIN_LENGTH {
            return Err(JwtError::WeakSecret {
                min: Self::MIN_LENGTH,
                actual: secret.len(),
            });
        }
        Ok(Self(SecretVec::new(secret)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret()
    }
}
