#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use dalil_db_sqlite::Connections;

mod adapters;
mod web;

pub use web::{Cfg, Gateways};

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    gateways: Gateways,
    version: &'static str,
) {
    web::run(connections.into(), enable_cors, cfg, gateways, version).await;
}
