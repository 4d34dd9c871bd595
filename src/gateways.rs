use std::sync::Arc;

use anyhow::{bail, Result};
use dalil_core::{
    entities::{OAuthTokens, Timestamp, Url},
    gateways::{
        media::{AudioHostingGateway, ImageHostingGateway},
        video::VideoHostingGateway,
    },
};
use dalil_gateways::{
    audio_hosting::AudioHosting, image_hosting::ImageHosting, nominatim::Nominatim,
    notify::LogNotifier, video_hosting::VideoHosting,
};
use dalil_webserver::Gateways;

use crate::config;

/// Stands in for hosting services that are not configured.
#[derive(Debug, Clone, Copy)]
struct Unconfigured(&'static str);

impl ImageHostingGateway for Unconfigured {
    fn upload_image(&self, _: &str, _: Vec<u8>) -> Result<Url> {
        bail!("No {} has been configured", self.0)
    }
}

impl AudioHostingGateway for Unconfigured {
    fn upload_audio(&self, _: &str, _: Vec<u8>) -> Result<Url> {
        bail!("No {} has been configured", self.0)
    }
}

impl VideoHostingGateway for Unconfigured {
    fn authorize_url(&self, _: &str) -> Result<Url> {
        bail!("No {} has been configured", self.0)
    }
    fn exchange_code(&self, _: &str, _: Timestamp) -> Result<OAuthTokens> {
        bail!("No {} has been configured", self.0)
    }
    fn refresh(&self, _: &str, _: Timestamp) -> Result<OAuthTokens> {
        bail!("No {} has been configured", self.0)
    }
    fn upload_video(&self, _: &str, _: &str, _: Vec<u8>) -> Result<Url> {
        bail!("No {} has been configured", self.0)
    }
}

pub fn gateways(cfg: config::Gateways) -> Result<Gateways> {
    let config::Gateways {
        image_hosting,
        audio_hosting,
        video_hosting,
        nominatim,
    } = cfg;

    let image_hosting: Arc<dyn ImageHostingGateway + Send + Sync> = match image_hosting {
        Some(config::ImageHosting { api_url, api_keys }) => {
            log::info!("Use image hosting at {api_url} with {} key(s)", api_keys.len());
            Arc::new(ImageHosting::new(api_url, api_keys)?)
        }
        None => {
            log::warn!("No image hosting configured");
            Arc::new(Unconfigured("image hosting"))
        }
    };
    let audio_hosting: Arc<dyn AudioHostingGateway + Send + Sync> = match audio_hosting {
        Some(upload_url) => {
            log::info!("Use audio hosting at {upload_url}");
            Arc::new(AudioHosting::new(upload_url))
        }
        None => {
            log::warn!("No audio hosting configured");
            Arc::new(Unconfigured("audio hosting"))
        }
    };
    let video_hosting: Arc<dyn VideoHostingGateway + Send + Sync> = match video_hosting {
        Some(cfg) => {
            log::info!("Use video hosting at {}", cfg.upload_url);
            Arc::new(VideoHosting::new(cfg))
        }
        None => {
            log::warn!("No video hosting configured");
            Arc::new(Unconfigured("video hosting"))
        }
    };
    let config::Nominatim {
        base_url,
        user_agent,
        retry_delay,
    } = nominatim;
    log::info!("Use reverse geocoding at {base_url}");
    let geocoding = Arc::new(Nominatim::new(base_url, user_agent, retry_delay));

    Ok(Gateways {
        image_hosting,
        audio_hosting,
        video_hosting,
        geocoding,
        notify: Box::new(LogNotifier),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_services_fail() {
        let gw = Unconfigured("image hosting");
        let err = gw.upload_image("logo.png", vec![1]).unwrap_err();
        assert_eq!(err.to_string(), "No image hosting has been configured");
        assert!(gw.authorize_url("state").is_err());
    }
}
