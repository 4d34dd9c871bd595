use std::sync::Arc;

use dalil_core::gateways::{
    geocode::ReverseGeoCodingGateway,
    media::{AudioHostingGateway, ImageHostingGateway},
    notify::NotificationGateway,
    video::VideoHostingGateway,
};
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


/// Limits of the web layer.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Maximum size of an uploaded image in bytes
    pub max_image_size: u64,
    /// Maximum size of an uploaded audio file in bytes
    pub max_audio_size: u64,
    /// Maximum size of an uploaded video in bytes
    pub max_video_size: u64,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            max_image_size: 10 * 1024 * 1024,
            max_audio_size: 20 * 1024 * 1024,
            max_video_size: 512 * 1024 * 1024,
        }
    }
}

/// External services used by the request handlers.
///
/// The hosting and geocoding clients are blocking and
/// therefore shared with worker threads.
pub struct Gateways {
    pub image_hosting: Arc<dyn ImageHostingGateway + Send + Sync>,
    pub audio_hosting: Arc<dyn AudioHostingGateway + Send + Sync>,
    pub video_hosting: Arc<dyn VideoHostingGateway + Send + Sync>,
    pub geocoding: Arc<dyn ReverseGeoCodingGateway + Send + Sync>,
    pub notify: Box<dyn NotificationGateway + Send + Sync>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways {
        image_hosting,
        audio_hosting,
        video_hosting,
        geocoding,
        notify,
    } = gateways;

    let jwt_state = jwt::JwtState::new();

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(guards::ImageHosting(image_hosting))
        .manage(guards::AudioHosting(audio_hosting))
        .manage(guards::VideoHosting(video_hosting))
        .manage(guards::GeoCoding(geocoding))
        .manage(guards::Notify(notify))
        .manage(cfg)
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    gateways: Gateways,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
