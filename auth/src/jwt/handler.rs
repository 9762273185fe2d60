use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessToken;
use super::claims::Claims;
use super::errors::JwtError;
use super::secret::SigningSecret;

/// Default token lifetime (one hour).
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// JWT token handler for issuing and verifying access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Tokens are always signed with the current
/// secret; secrets registered with `with_previous_secret` are still accepted
/// for verification so a secret can be rotated without logging everyone out.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_keys: Vec<DecodingKey>,
    validation: Validation,
    algorithm: Algorithm,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Signing secret (loaded from configuration, never from code)
    ///
    /// # Returns
    /// JwtHandler instance configured with HS256 and the default one hour TTL
    pub fn new(secret: &SigningSecret) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        // Expiry is checked against the caller's clock in `verify`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_keys: vec![DecodingKey::from_secret(secret.as_bytes())],
            validation,
            algorithm,
            ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
        }
    }

    /// Override the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Accept tokens signed with a retired secret.
    ///
    /// Previous secrets are tried in registration order, only after the
    /// current secret reports a signature mismatch.
    pub fn with_previous_secret(mut self, secret: &SigningSecret) -> Self {
        self.decoding_keys
            .push(DecodingKey::from_secret(secret.as_bytes()));
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a signed token for a subject.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued to
    /// * `now` - Issue time; the token expires at `now + ttl`
    ///
    /// # Returns
    /// Signed token and its expiry
    ///
    /// # Errors
    /// * `SigningFailed` - Token encoding or signing failed, or the expiry
    ///   falls outside the representable date range
    pub fn issue(&self, subject: &str, now: DateTime<Utc>) -> Result<AccessToken, JwtError> {
        let claims = Claims::for_subject(subject, now, self.ttl)
            .ok_or_else(|| JwtError::SigningFailed("token expiry out of range".to_string()))?;
        // Whole seconds, matching the `exp` claim.
        let expires_at = claims
            .expires_at()
            .ok_or_else(|| JwtError::SigningFailed("token expiry out of range".to_string()))?;
        let header = Header::new(self.algorithm);

        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::SigningFailed(e.to_string()))?;

        Ok(AccessToken { token, expires_at })
    }

    /// Verify a token and decode its claims.
    ///
    /// The signature is checked before any claim is interpreted, so expiry
    /// cannot be extended without the secret.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string
    /// * `now` - Verification time
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed token, wrong algorithm, or signature mismatch
    /// * `Expired` - `now` is past the token's expiration
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, JwtError> {
        let claims = self.decode_signed(token)?;

        if claims.is_expired(now) {
            return Err(JwtError::Expired);
        }

        Ok(claims)
    }

    fn decode_signed(&self, token: &str) -> Result<Claims, JwtError> {
        let mut mismatch = None;

        for key in &self.decoding_keys {
            match decode::<Claims>(token, key, &self.validation) {
                Ok(token_data) => return Ok(token_data.claims),
                Err(e) if matches!(e.kind(), ErrorKind::InvalidSignature) => mismatch = Some(e),
                Err(e) => return Err(JwtError::InvalidToken(e.to_string())),
            }
        }

        Err(JwtError::InvalidToken(
            mismatch.map_or_else(|| "no verification key".to_string(), |e| e.to_string()),
        ))
    }
}
