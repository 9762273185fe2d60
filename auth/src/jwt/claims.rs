use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// A token holds no reference to server-side state: validity depends only
/// on these claims, the verification time and the signing secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `ttl` after `now`.
    ///
    /// # Arguments
    /// * `subject` - Identity the token is issued to
    /// * `now` - Issue time
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with sub, exp and iat set, or `None` when `now + ttl` is out of
    /// the representable date range
    pub fn for_subject(
        subject: impl ToString,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Option<Self> {
        let expires_at = now.checked_add_signed(ttl)?;

        Some(Self {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        })
    }

    /// Expiry as a timestamp, if representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check if token is expired.
    ///
    /// A token is valid up to and including the instant `exp`, and expired
    /// from the first moment after it.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => now > expires_at,
            None => self.exp < now.timestamp(),
        }
    }
}

/// Token handed back to a client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Compact, URL-safe signed token
    pub token: String,

    /// Absolute expiry of the token
    pub expires_at: DateTime<Utc>,
}
