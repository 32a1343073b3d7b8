use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};
use tempfile::TempDir;

use crate::web::Cfg;
use bw_core::{entities::*, gateways::image_host::ImageHostGateway, usecases};

pub mod prelude {

    pub use rocket::{
        http::{ContentType, Header, Status},
        local::blocking::{Client, LocalResponse},
    };
    pub use tempfile::TempDir;

    pub use super::{
        rocket_test_setup, rocket_test_setup_with, seed_location, seed_user, BrokenImageHost,
        DummyImageHost,
    };

    pub use bw_core::{entities::*, repositories::*};
    pub use bw_entities::builders::*;
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    image_host: Box<dyn ImageHostGateway + Send + Sync>,
) -> (
    rocket::Rocket<rocket::Build>,
    bw_db_jfs::Storage,
    TempDir,
) {
    let documents_dir = tempfile::tempdir().unwrap();
    let db = bw_db_jfs::Storage::try_new(documents_dir.path()).unwrap();
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
    };
    let gateways = super::Gateways { image_host };
    let rocket = super::rocket_instance(options, db.clone(), gateways);
    (rocket, db, documents_dir)
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, bw_db_jfs::Storage, TempDir) {
    rocket_test_setup_with(mounts, Cfg { images_dir: None }, Box::new(DummyImageHost))
}

pub fn rocket_test_setup_with(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    image_host: Box<dyn ImageHostGateway + Send + Sync>,
) -> (Client, bw_db_jfs::Storage, TempDir) {
    let (rocket, db, documents_dir) = rocket_test_instance_with_cfg(mounts, cfg, image_host);
    let client = Client::tracked(rocket).unwrap();
    (client, db, documents_dir)
}

pub fn seed_user(db: &bw_db_jfs::Storage, username: &str, password: &str, role: Role) {
    usecases::create_new_user(
        db,
        usecases::NewUser {
            username: username.to_string(),
            password: password.to_string(),
            role,
            name: username.to_string(),
        },
    )
    .unwrap();
}

pub fn seed_location(db: &bw_db_jfs::Storage, location: &Location) {
    use bw_core::repositories::LocationRepo;
    db.create_location(location).unwrap();
}

/// Answers with a predictable URL so tests can tell uploaded images
/// apart from the default placeholder.
pub struct DummyImageHost;

impl ImageHostGateway for DummyImageHost {
    fn upload_image(&self, file_name: &str, _: &[u8]) -> anyhow::Result<String> {
        Ok(format!("https://images.example/{file_name}"))
    }
}

pub struct BrokenImageHost;

impl ImageHostGateway for BrokenImageHost {
    fn upload_image(&self, _: &str, _: &[u8]) -> anyhow::Result<String> {
        anyhow::bail!("image host unavailable")
    }
}
