use crate::{email::EmailAddress, id::Id, password::Password, time::Timestamp};

/// Tokens of an OAuth2 authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Timestamp,
}

impl OAuthTokens {
    /// Safety margin before the actual expiry.
    const EXPIRY_MARGIN_MILLIS: i64 = 60_000;

    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at.as_millis() - Self::EXPIRY_MARGIN_MILLIS <= now.as_millis()
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id           : Id,
    pub email        : EmailAddress,
    pub password     : Password,
    pub display_name : Option<String>,
    pub phone        : Option<String>,
    pub is_admin     : bool,
    pub is_affiliate : bool,
    pub video_tokens : Option<OAuthTokens>,
    pub created_at   : Timestamp,
}

impl UserProfile {
    pub fn name_or_email(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.email.as_str())
    }
}
