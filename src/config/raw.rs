use duration_str::deserialize_duration;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG_FILE: &str = include_str!("dalil.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub webserver: Option<WebServer>,
    pub uploads: Option<Uploads>,
    pub subscriptions: Option<Subscriptions>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u8,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Uploads {
    pub max_image_size: u64,
    pub max_audio_size: u64,
    pub max_video_size: u64,
}

impl Default for Uploads {
    fn default() -> Self {
        Config::default().uploads.expect("Uploads configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Subscriptions {
    #[serde(deserialize_with = "deserialize_duration")]
    pub expiry_check_interval: Duration,
}

impl Default for Subscriptions {
    fn default() -> Self {
        Config::default()
            .subscriptions
            .expect("Subscriptions configuration")
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub image_hosting: Option<ImageHosting>,
    pub audio_hosting: Option<AudioHosting>,
    pub video_hosting: Option<VideoHosting>,
    pub nominatim: Option<Nominatim>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ImageHosting {
    pub api_url: String,
    pub api_keys: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AudioHosting {
    pub upload_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VideoHosting {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub auth_url: Option<String>,
    pub token_url: Option<String>,
    pub upload_url: Option<String>,
    pub watch_url: Option<String>,
    pub scope: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Nominatim {
    pub base_url: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub retry_delay: Duration,
}

impl Default for Nominatim {
    fn default() -> Self {
        Config::default()
            .gateway
            .and_then(|gw| gw.nominatim)
            .expect("Nominatim configuration")
    }
}
