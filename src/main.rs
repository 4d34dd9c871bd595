use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dalil_db_sqlite::Connections;

mod config;
mod expire_subscriptions;
mod gateways;

#[derive(Parser)]
#[command(name = "dalil", version, about = "Bilingual business directory")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config_file: Option<PathBuf>,
    /// URL to the database
    #[arg(long, env = "DATABASE_URL")]
    db_url: Option<String>,
    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config_file.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }
    let config::Config {
        db,
        webserver,
        subscriptions,
        gateways,
    } = cfg;

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        db.conn_sqlite,
        db.conn_pool_size
    );
    let connections = Connections::init(&db.conn_sqlite, u32::from(db.conn_pool_size))?;
    dalil_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let gateways = gateways::gateways(gateways)?;
    tokio::spawn(expire_subscriptions::run(
        connections.clone(),
        subscriptions.expiry_check_interval,
    ));

    let config::WebServer {
        enable_cors,
        max_image_size,
        max_audio_size,
        max_video_size,
    } = webserver;
    let web_cfg = dalil_webserver::Cfg {
        max_image_size,
        max_audio_size,
        max_video_size,
    };
    dalil_webserver::run(
        connections,
        enable_cors,
        web_cfg,
        gateways,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
