#[macro_use]
extern crate log;

use bw_core::gateways::image_host::ImageHostGateway;
use bw_db_jfs::Storage;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(
    db: Storage,
    enable_cors: bool,
    cfg: Cfg,
    image_host: Box<dyn ImageHostGateway + Send + Sync>,
) {
    web::run(db, enable_cors, cfg, image_host).await;
}
