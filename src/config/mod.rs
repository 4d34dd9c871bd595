use anyhow::{anyhow, Result};
use dalil_core::entities::Url;
use dalil_gateways::video_hosting::VideoHostingConfig;
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "dalil.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

const YOUTUBE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const YOUTUBE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const YOUTUBE_UPLOAD_URL: &str = "https://www.googleapis.com/upload/youtube/v3/videos";
const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch";
const YOUTUBE_UPLOAD_SCOPE: &str = "https://www.googleapis.com/auth/youtube.upload";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub subscriptions: Subscriptions,
    pub gateways: Gateways,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub max_image_size: u64,
    pub max_audio_size: u64,
    pub max_video_size: u64,
}

pub struct Subscriptions {
    pub expiry_check_interval: Duration,
}

pub struct Gateways {
    pub image_hosting: Option<ImageHosting>,
    pub audio_hosting: Option<Url>,
    pub video_hosting: Option<VideoHostingConfig>,
    pub nominatim: Nominatim,
}

pub struct ImageHosting {
    pub api_url: Url,
    pub api_keys: Vec<String>,
}

pub struct Nominatim {
    pub base_url: Url,
    pub user_agent: String,
    pub retry_delay: Duration,
}

fn parse_url(name: &str, url: &str) -> Result<Url> {
    url.parse()
        .map_err(|err| anyhow!("Invalid {name} URL '{url}': {err}"))
}

fn parse_url_or_default(name: &str, url: Option<String>, default: &str) -> Result<Url> {
    parse_url(name, url.as_deref().unwrap_or(default))
}

fn video_hosting_config(from: raw::VideoHosting) -> Result<VideoHostingConfig> {
    let raw::VideoHosting {
        client_id,
        client_secret,
        redirect_url,
        auth_url,
        token_url,
        upload_url,
        watch_url,
        scope,
    } = from;
    Ok(VideoHostingConfig {
        client_id,
        client_secret,
        redirect_url: parse_url("redirect", &redirect_url)?,
        auth_url: parse_url_or_default("auth", auth_url, YOUTUBE_AUTH_URL)?,
        token_url: parse_url_or_default("token", token_url, YOUTUBE_TOKEN_URL)?,
        upload_url: parse_url_or_default("upload", upload_url, YOUTUBE_UPLOAD_URL)?,
        watch_url: parse_url_or_default("watch", watch_url, YOUTUBE_WATCH_URL)?,
        scope: scope.unwrap_or_else(|| YOUTUBE_UPLOAD_SCOPE.to_owned()),
    })
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            uploads,
            subscriptions,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let raw::Uploads {
            max_image_size,
            max_audio_size,
            max_video_size,
        } = uploads.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            max_image_size,
            max_audio_size,
            max_video_size,
        };

        let raw::Subscriptions {
            expiry_check_interval,
        } = subscriptions.unwrap_or_default();
        if expiry_check_interval.is_zero() {
            return Err(anyhow!("Invalid subscription expiry check interval"));
        }
        let subscriptions = Subscriptions {
            expiry_check_interval,
        };

        let raw::Gateway {
            image_hosting,
            audio_hosting,
            video_hosting,
            nominatim,
        } = gateway.unwrap_or_default();

        let image_hosting = match image_hosting {
            Some(raw::ImageHosting { api_url, api_keys }) => {
                if api_keys.is_empty() {
                    return Err(anyhow!("Missing image hosting API keys"));
                }
                Some(ImageHosting {
                    api_url: parse_url("image hosting", &api_url)?,
                    api_keys,
                })
            }
            None => None,
        };
        let audio_hosting = audio_hosting
            .map(|raw::AudioHosting { upload_url }| parse_url("audio hosting", &upload_url))
            .transpose()?;
        let video_hosting = video_hosting.map(video_hosting_config).transpose()?;
        let raw::Nominatim {
            base_url,
            user_agent,
            retry_delay,
        } = nominatim.unwrap_or_default();
        let nominatim = Nominatim {
            base_url: parse_url("Nominatim", &base_url)?,
            user_agent,
            retry_delay,
        };
        let gateways = Gateways {
            image_hosting,
            audio_hosting,
            video_hosting,
            nominatim,
        };

        Ok(Self {
            db,
            webserver,
            subscriptions,
            gateways,
        })
    }
}
