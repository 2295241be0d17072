use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid token")]
    Invalid,
    #[error("token expired")]
    Expired,
}

/// Issues and validates self-contained bearer tokens. Tokens carry only a
/// subject and an expiry; there is no server-side revocation, so a leaked
/// token stays valid until it expires.
pub trait TokenCodec: Send + Sync {
    fn issue(&self, subject: &str, ttl: Duration) -> anyhow::Result<String>;
    fn validate(&self, token: &str) -> Result<String, TokenError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: usize,
    exp: usize,
}

/// HS256 JWT implementation of [`TokenCodec`].
#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtCodec {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenCodec for JwtCodec {
    fn issue(&self, subject: &str, ttl: Duration) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + ttl;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(subject = %subject, "token issued");
        Ok(token)
    }

    fn validate(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::default();
        // Expiry is exact; the default 60s leeway would keep tokens alive
        // past their advertised TTL.
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;
        debug!(subject = %data.claims.sub, "token verified");
        Ok(data.claims.sub)
    }
}
