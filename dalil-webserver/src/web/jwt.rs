use std::collections::HashSet;

use anyhow::{anyhow, Result};
use jwt_service::JwtService;
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// E-mail address of the account
    sub: String,
    /// Unix timestamp in seconds
    exp: u64,
}

/// Issues and checks the bearer tokens of logged-in users.
pub struct JwtState {
    jwt_service: JwtService,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new() -> Self {
        Self::with_validity(Duration::days(7))
    }

    pub fn with_validity(time_valid: Duration) -> Self {
        Self {
            jwt_service: JwtService::new(),
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, email: &str) -> Result<String> {
        let expires_at = OffsetDateTime::now_utc() + self.time_valid;
        let claims = Claims {
            sub: email.to_owned(),
            exp: u64::try_from(expires_at.unix_timestamp())?,
        };
        self.jwt_service.encode(&claims)
    }

    pub fn validate_token_and_get_email(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token has been revoked"));
        }
        Ok(self.jwt_service.decode(token)?.sub)
    }

    pub fn blacklist_token(&self, token: String) {
        self.remove_invalid_tokens();
        self.lock().insert(token);
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway and don't need to be remembered.
    fn remove_invalid_tokens(&self) {
        let mut blacklist = self.lock();
        blacklist.retain(|token| self.jwt_service.decode(token).is_ok());
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

impl Default for JwtState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "jwt")]
mod jwt_service {
    use super::{Claims, Result};
    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

    struct Key {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
    }

    impl Key {
        fn from_secret(secret: &[u8]) -> Self {
            Self {
                encoding_key: EncodingKey::from_secret(secret),
                decoding_key: DecodingKey::from_secret(secret),
            }
        }

        // Tokens don't survive a restart of the server.
        fn random() -> Self {
            Self::from_secret(&rand::random::<[u8; 32]>())
        }
    }

    pub struct JwtService {
        key: Key,
    }

    impl JwtService {
        pub fn new() -> Self {
            Self { key: Key::random() }
        }

        pub fn encode(&self, claims: &Claims) -> Result<String> {
            Ok(encode(&Header::default(), claims, &self.key.encoding_key)?)
        }

        pub fn decode(&self, token: &str) -> Result<Claims> {
            let data = decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
            Ok(data.claims)
        }
    }
}

#[cfg(not(feature = "jwt"))]
mod jwt_service {
    use super::{Claims, Result};
    use anyhow::bail;

    pub struct JwtService;

    impl JwtService {
        pub fn new() -> Self {
            Self
        }

        pub fn encode(&self, _: &Claims) -> Result<String> {
            bail!("JSON web tokens are disabled")
        }

        pub fn decode(&self, _: &str) -> Result<Claims> {
            bail!("JSON web tokens are disabled")
        }
    }
}
