//! HS512 session token codec

use std::sync::Arc;

use chrono::{DateTime, Duration, SubsecRound, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, IssuedToken};
use crate::errors::TokenError;
use crate::services::clock::{Clock, SystemClock};

use super::config::TokenCodecConfig;

/// The only signing algorithm this service accepts
const ALGORITHM: Algorithm = Algorithm::HS512;

/// Encodes and decodes signed session claims with a symmetric secret
pub struct TokenCodec {
    config: TokenCodecConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Creates a codec that reads time from the wall clock
    pub fn new(config: TokenCodecConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a codec with an explicit time source
    pub fn with_clock(config: TokenCodecConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Expiry is a semantic check done by the session layer against the
        // stored record, so the decoder must not reject expired tokens.
        let mut validation = Validation::new(ALGORITHM);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = false;
        validation.validate_nbf = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Current instant according to the codec's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Mints a token for `subject` that expires `ttl` after now.
    ///
    /// JWT timestamps are whole seconds, so the issue instant is truncated
    /// first and `exp` is exactly `iat + ttl`.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token and the claims it carries
    /// * `Err(TokenError::GenerationFailed)` - Signing failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<IssuedToken, TokenError> {
        let claims = Claims::new(
            subject,
            self.clock.now().trunc_subsecs(0),
            ttl,
            self.config.issuer.as_str(),
            self.config.audience.as_str(),
        );
        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed)?;

        Ok(IssuedToken { token, claims })
    }

    /// Verifies the signature and decodes the claims.
    ///
    /// Fails on bad signature, malformed structure, unsupported algorithm or
    /// foreign issuer/audience. Never fails because the token has expired.
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    TokenError::UnsupportedAlgorithm
                }
                ErrorKind::InvalidIssuer
                | ErrorKind::InvalidAudience
                | ErrorKind::InvalidSubject
                | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
                _ => TokenError::Malformed,
            })
    }

    /// Subject (username) carried by `token`
    pub fn subject(&self, token: &str) -> Result<String, TokenError> {
        self.parse(token).map(|claims| claims.sub)
    }

    /// Expiry carried by `token`
    pub fn expires_at(&self, token: &str) -> Result<DateTime<Utc>, TokenError> {
        self.parse(token)?.expires_at()
    }
}

/// Shortens a token for log output. JWT headers are identical across tokens,
/// so the tail of the signature is what tells them apart.
pub fn mask_token(token: &str) -> String {
    let tail: String = token
        .chars()
        .rev()
        .take(8)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("...{}", tail)
}
