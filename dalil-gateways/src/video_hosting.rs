use anyhow::{anyhow, Result};
use dalil_core::{
    entities::{OAuthTokens, Timestamp, Url},
    gateways::video::VideoHostingGateway,
};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, LOCATION};
use serde::Deserialize;
use serde_json::json;

use crate::check_response;

const SERVICE: &str = "Video hosting";

/// OAuth2 client credentials and endpoints of a YouTube compatible
/// video hosting service.
#[derive(Debug, Clone)]
pub struct VideoHostingConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: Url,
    pub auth_url: Url,
    pub token_url: Url,
    pub upload_url: Url,
    /// The uploaded video id is appended to this URL.
    pub watch_url: Url,
    pub scope: String,
}

#[derive(Debug, Clone)]
pub struct VideoHosting {
    config: VideoHostingConfig,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct UploadedVideo {
    id: String,
}

impl VideoHosting {
    pub const fn new(config: VideoHostingConfig) -> Self {
        Self { config }
    }

    fn request_tokens(&self, params: &[(&str, &str)]) -> Result<TokenResponse> {
        let response = reqwest::blocking::Client::new()
            .post(self.config.token_url.clone())
            .form(params)
            .send()?;
        Ok(check_response(SERVICE, response)?.json()?)
    }

    fn watch_url(&self, video_id: &str) -> Url {
        let mut url = self.config.watch_url.clone();
        url.query_pairs_mut().append_pair("v", video_id);
        url
    }
}

fn into_tokens(
    response: TokenResponse,
    previous_refresh_token: Option<&str>,
    now: Timestamp,
) -> Result<OAuthTokens> {
    let TokenResponse {
        access_token,
        refresh_token,
        expires_in,
    } = response;
    let refresh_token = refresh_token
        .or_else(|| previous_refresh_token.map(ToOwned::to_owned))
        .ok_or_else(|| anyhow!("{SERVICE} did not issue a refresh token"))?;
    Ok(OAuthTokens {
        access_token,
        refresh_token,
        expires_at: Timestamp::from_millis(now.as_millis() + expires_in.max(0) * 1000),
    })
}

impl VideoHostingGateway for VideoHosting {
    fn authorize_url(&self, state: &str) -> Result<Url> {
        let VideoHostingConfig {
            client_id,
            redirect_url,
            auth_url,
            scope,
            ..
        } = &self.config;
        let mut url = auth_url.clone();
        url.query_pairs_mut()
            .append_pair("client_id", client_id)
            .append_pair("redirect_uri", redirect_url.as_str())
            .append_pair("response_type", "code")
            .append_pair("scope", scope)
            // Required to receive a refresh token
            .append_pair("access_type", "offline")
            .append_pair("prompt", "consent")
            .append_pair("state", state);
        Ok(url)
    }

    fn exchange_code(&self, code: &str, now: Timestamp) -> Result<OAuthTokens> {
        let VideoHostingConfig {
            client_id,
            client_secret,
            redirect_url,
            ..
        } = &self.config;
        let response = self.request_tokens(&[
            ("code", code),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("redirect_uri", redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ])?;
        log::info!("Connected video hosting account");
        into_tokens(response, None, now)
    }

    fn refresh(&self, refresh_token: &str, now: Timestamp) -> Result<OAuthTokens> {
        let VideoHostingConfig {
            client_id,
            client_secret,
            ..
        } = &self.config;
        let response = self.request_tokens(&[
            ("refresh_token", refresh_token),
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "refresh_token"),
        ])?;
        log::debug!("Refreshed video hosting access token");
        into_tokens(response, Some(refresh_token), now)
    }

    fn upload_video(&self, access_token: &str, title: &str, data: Vec<u8>) -> Result<Url> {
        let client = reqwest::blocking::Client::new();
        let metadata = json!({
            "snippet": { "title": title },
            "status": { "privacyStatus": "unlisted" }
        });
        let response = client
            .post(self.config.upload_url.clone())
            .query(&[("uploadType", "resumable"), ("part", "snippet,status")])
            .bearer_auth(access_token)
            .header("X-Upload-Content-Length", data.len())
            .header("X-Upload-Content-Type", "video/*")
            .json(&metadata)
            .send()?;
        let session_url = check_response(SERVICE, response)?
            .headers()
            .get(LOCATION)
            .and_then(|location| location.to_str().ok())
            .map(ToOwned::to_owned)
            .ok_or_else(|| anyhow!("{SERVICE} did not return an upload session"))?;
        log::debug!("Started resumable upload of video '{title}'");
        let response = client
            .put(session_url)
            .bearer_auth(access_token)
            .header(CONTENT_TYPE, "video/*")
            .header(CONTENT_LENGTH, data.len())
            .body(data)
            .send()?;
        let UploadedVideo { id } = check_response(SERVICE, response)?.json()?;
        let url = self.watch_url(&id);
        log::info!("Uploaded video '{title}' to {url}");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> VideoHosting {
        VideoHosting::new(VideoHostingConfig {
            client_id: "client".into(),
            client_secret: "secret".into(),
            redirect_url: "https://dalil.example.com/video/oauth/callback".parse().unwrap(),
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".parse().unwrap(),
            token_url: "https://oauth2.googleapis.com/token".parse().unwrap(),
            upload_url: "https://www.googleapis.com/upload/youtube/v3/videos".parse().unwrap(),
            watch_url: "https://www.youtube.com/watch".parse().unwrap(),
            scope: "https://www.googleapis.com/auth/youtube.upload".into(),
        })
    }

    #[test]
    fn authorize_url_with_offline_access() {
        let url = gateway().authorize_url("xyz").unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(Some("client"), get("client_id"));
        assert_eq!(Some("code"), get("response_type"));
        assert_eq!(Some("offline"), get("access_type"));
        assert_eq!(Some("xyz"), get("state"));
        assert_eq!(
            Some("https://dalil.example.com/video/oauth/callback"),
            get("redirect_uri")
        );
    }

    #[test]
    fn keep_refresh_token_if_none_is_issued() {
        let now = Timestamp::from_secs(1000);
        let response: TokenResponse =
            serde_json::from_str(r#"{"access_token":"new","expires_in":3599,"token_type":"Bearer"}"#)
                .unwrap();
        let tokens = into_tokens(response, Some("old-refresh"), now).unwrap();
        assert_eq!("new", tokens.access_token);
        assert_eq!("old-refresh", tokens.refresh_token);
        assert_eq!(Timestamp::from_secs(1000 + 3599), tokens.expires_at);
    }

    #[test]
    fn require_refresh_token_on_first_exchange() {
        let response = TokenResponse {
            access_token: "a".into(),
            refresh_token: None,
            expires_in: 60,
        };
        assert!(into_tokens(response, None, Timestamp::from_secs(0)).is_err());
    }

    #[test]
    fn watch_url_of_uploaded_video() {
        assert_eq!(
            "https://www.youtube.com/watch?v=abc123",
            gateway().watch_url("abc123").as_str()
        );
    }
}
