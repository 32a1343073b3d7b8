use std::{path::PathBuf, sync::Arc};

use rocket::{config::Config as RocketCfg, fs::FileServer, Rocket, Route};

use bw_core::{gateways::image_host::ImageHostGateway, repositories::LocationRepo as _};

pub mod api;
mod guards;
mod jfs;

#[cfg(test)]
pub mod tests;

/// Server options beyond the Rocket configuration.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Directory with legacy image files, served under `/images`.
    ///
    /// Records imported from older installations refer to bare file
    /// names instead of hosted URLs.
    pub images_dir: Option<PathBuf>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    image_host: Box<dyn ImageHostGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: bw_db_jfs::Storage,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways { image_host } = gateways;

    match db.count_locations() {
        Ok(count) => info!("Serving {count} locations"),
        Err(err) => warn!("Failed to inspect the document store: {err}"),
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let db = jfs::Storage::from(db);
    let image_host = guards::ImageHost(Arc::from(image_host));

    let mut instance = r.manage(db).manage(image_host);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    if let Some(images_dir) = cfg.images_dir {
        if images_dir.is_dir() {
            instance = instance.mount("/images", FileServer::from(images_dir));
        } else {
            warn!(
                "Image directory {} does not exist, legacy images will not be served",
                images_dir.display()
            );
        }
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(
    db: bw_db_jfs::Storage,
    enable_cors: bool,
    cfg: Cfg,
    image_host: Box<dyn ImageHostGateway + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways { image_host };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
