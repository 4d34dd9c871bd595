use crate::entities::{OAuthTokens, Timestamp, Url};

pub trait VideoHostingGateway {
    /// The consent page the admin has to visit to connect the account.
    fn authorize_url(&self, state: &str) -> anyhow::Result<Url>;

    fn exchange_code(&self, code: &str, now: Timestamp) -> anyhow::Result<OAuthTokens>;

    // The returned tokens keep the given refresh token
    // if the service doesn't issue a new one.
    fn refresh(&self, refresh_token: &str, now: Timestamp) -> anyhow::Result<OAuthTokens>;

    /// Upload a video and return the URL under which it can be watched.
    fn upload_video(&self, access_token: &str, title: &str, data: Vec<u8>) -> anyhow::Result<Url>;
}
